//! Users API client.
//!
//! Two endpoints are used:
//! - `GET /api/users/search?perpage=<n>&page=<n>`
//! - `DELETE /api/admin/users/<id>`
//!
//! Any non-2xx answer, connection failure or undecodable body comes back as
//! [`TransportError`](crate::TransportError). Nothing is retried.

use super::directory::UserDirectory;
use super::types::{SearchQuery, SearchResult, UserId};
use crate::BusinessConfig;
use crate::error::TransportResult;
use crate::http::Client;

/// [`UserDirectory`] backed by the HTTP API.
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    client: Client,
    api_url: String,
}

impl HttpUserDirectory {
    pub fn new(config: &BusinessConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &BusinessConfig) -> Self {
        Self {
            client,
            api_url: config.api_url(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl UserDirectory for HttpUserDirectory {
    /// GET `/users/search`
    async fn search(&self, query: SearchQuery) -> TransportResult<SearchResult> {
        let url = format!("{}/users/search", self.api_url);

        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .query("perpage", query.per_page)
            .query("page", query.page)
            .send()
            .await
            .inspect_err(|e| log::warn!("User search failed: {e}"))?
            .error_for_status()
            .inspect_err(|e| log::warn!("User search rejected: {e}"))?;

        response.json()
    }

    /// DELETE `/admin/users/{id}`
    async fn delete(&self, id: UserId) -> TransportResult<()> {
        let url = format!("{}/admin/users/{id}", self.api_url);

        self.client
            .delete(&url)
            .header("accept", "application/json")
            .send()
            .await
            .inspect_err(|e| log::warn!("Deleting user {id} failed: {e}"))?
            .error_for_status()
            .inspect_err(|e| log::warn!("Deleting user {id} rejected: {e}"))?;

        Ok(())
    }
}
