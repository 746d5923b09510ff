//! Pagination state and the page-descriptor projection used by navigation UI.

use super::types::{SearchResult, User};

/// One entry of the pager: a page number and whether it is the page on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageDescriptor {
    pub page: u32,
    pub current: bool,
}

impl PageDescriptor {
    pub fn new(page: u32) -> Self {
        Self {
            page,
            current: false,
        }
    }
}

/// Everything the list view shows. Replaced wholesale after each successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
    pub users: Vec<User>,
    pub pages: Vec<PageDescriptor>,
}

impl PageState {
    /// State before the first fetch: page 1, nothing loaded.
    pub fn empty(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page,
            total_pages: 0,
            users: Vec::new(),
            pages: Vec::new(),
        }
    }

    /// Builds the state for a search response. The server's `page`/`per_page` win.
    pub fn from_search(result: SearchResult) -> Self {
        let total_pages = total_pages(result.total_count, result.per_page);
        Self {
            page: result.page,
            per_page: result.per_page,
            total_pages,
            pages: page_descriptors(total_pages, result.page),
            users: result.users,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Number of pages needed for `total_count` items, `per_page` at a time.
///
/// Rounds up so a partial last page is still reachable. A zero page size
/// yields zero pages.
pub fn total_pages(total_count: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    let pages = total_count.div_ceil(u64::from(per_page));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Descriptors for pages `1..=total_pages`, with `current_page` marked.
pub fn page_descriptors(total_pages: u32, current_page: u32) -> Vec<PageDescriptor> {
    (1..=total_pages)
        .map(|page| PageDescriptor {
            page,
            current: page == current_page,
        })
        .collect()
}
