//! Wire types for the users API.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Backend identifier of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One search hit from `GET /api/users/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub login: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub last_seen_at: Option<DateTime<Utc>>,
}

impl User {
    /// Minimal user with only the fields the controller relies on.
    pub fn new(id: i64, login: impl Into<String>) -> Self {
        Self {
            id: UserId(id),
            login: login.into(),
            name: String::new(),
            email: String::new(),
            is_admin: false,
            last_seen_at: None,
        }
    }
}

/// Page request sent to the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchQuery {
    pub page: u32,
    pub per_page: u32,
}

/// Body of `GET /api/users/search`.
///
/// `page` and `per_page` are echoed by the server and may differ from what
/// was asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub users: Vec<User>,
    pub page: u32,
    pub per_page: u32,
    pub total_count: u64,
}
