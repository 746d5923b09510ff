use std::future::Future;

use super::types::{SearchQuery, SearchResult, UserId};
use crate::error::TransportResult;

/// Backend that owns user accounts.
///
/// [`HttpUserDirectory`](super::api::HttpUserDirectory) talks to the real API;
/// tests plug in in-memory doubles.
pub trait UserDirectory: Send + Sync {
    /// One page of users. The result's `page`/`per_page` are authoritative.
    fn search(&self, query: SearchQuery)
    -> impl Future<Output = TransportResult<SearchResult>> + Send;

    /// Removes a user account.
    fn delete(&self, id: UserId) -> impl Future<Output = TransportResult<()>> + Send;
}
