//! Shared test doubles for the business integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use admin_users_business::{
    ConfirmRequest, ConfirmationService, SearchQuery, SearchResult, TransportError,
    TransportResult, User, UserDirectory, UserId,
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn users(logins: &[&str]) -> Vec<User> {
    logins
        .iter()
        .enumerate()
        .map(|(i, login)| User::new(i as i64 + 1, *login))
        .collect()
}

#[derive(Debug, Default)]
struct DirectoryInner {
    users: Vec<User>,
    searches: Vec<SearchQuery>,
    deletes: Vec<UserId>,
    fail_search: bool,
    fail_delete: bool,
    fail_search_after_delete: bool,
    forced_per_page: Option<u32>,
}

/// In-memory backend that pages over a list of users and records every call.
#[derive(Debug, Clone, Default)]
pub struct MockUserDirectory {
    inner: Arc<Mutex<DirectoryInner>>,
}

impl MockUserDirectory {
    pub fn with_users(users: Vec<User>) -> Self {
        let directory = Self::default();
        directory.inner.lock().expect("lock poisoned").users = users;
        directory
    }

    pub fn searches(&self) -> Vec<SearchQuery> {
        self.inner.lock().expect("lock poisoned").searches.clone()
    }

    pub fn deletes(&self) -> Vec<UserId> {
        self.inner.lock().expect("lock poisoned").deletes.clone()
    }

    pub fn fail_search(&self, fail: bool) {
        self.inner.lock().expect("lock poisoned").fail_search = fail;
    }

    pub fn fail_delete(&self, fail: bool) {
        self.inner.lock().expect("lock poisoned").fail_delete = fail;
    }

    /// Lets the next delete succeed, then fails every search after it.
    pub fn fail_search_after_delete(&self) {
        self.inner.lock().expect("lock poisoned").fail_search_after_delete = true;
    }

    /// Makes the backend ignore the requested page size and use `per_page`.
    pub fn force_per_page(&self, per_page: u32) {
        self.inner.lock().expect("lock poisoned").forced_per_page = Some(per_page);
    }
}

impl UserDirectory for MockUserDirectory {
    async fn search(&self, query: SearchQuery) -> TransportResult<SearchResult> {
        let mut inner = self.inner.lock().expect("lock poisoned");
        inner.searches.push(query);

        if inner.fail_search {
            return Err(TransportError::status(500, "mock://api/users/search"));
        }

        let per_page = inner.forced_per_page.unwrap_or(query.per_page);
        let start = (query.page.saturating_sub(1) as usize) * per_page as usize;
        let users = inner
            .users
            .iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect();

        Ok(SearchResult {
            users,
            page: query.page,
            per_page,
            total_count: inner.users.len() as u64,
        })
    }

    async fn delete(&self, id: UserId) -> TransportResult<()> {
        let mut inner = self.inner.lock().expect("lock poisoned");
        inner.deletes.push(id);

        if inner.fail_delete {
            return Err(TransportError::connection("mock connection reset"));
        }

        inner.users.retain(|u| u.id != id);
        if inner.fail_search_after_delete {
            inner.fail_search = true;
        }
        Ok(())
    }
}

/// Confirmation double that answers with a fixed choice and records prompts.
#[derive(Debug, Clone)]
pub struct ScriptedConfirm {
    answer: bool,
    prompts: Arc<Mutex<Vec<ConfirmRequest>>>,
}

impl ScriptedConfirm {
    pub fn accept() -> Self {
        Self {
            answer: true,
            prompts: Arc::default(),
        }
    }

    pub fn decline() -> Self {
        Self {
            answer: false,
            prompts: Arc::default(),
        }
    }

    pub fn prompts(&self) -> Vec<ConfirmRequest> {
        self.prompts.lock().expect("lock poisoned").clone()
    }
}

impl ConfirmationService for ScriptedConfirm {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        self.prompts.lock().expect("lock poisoned").push(request);
        self.answer
    }
}
