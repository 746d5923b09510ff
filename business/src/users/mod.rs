//! User administration: paginated listing and confirmed deletion.
//!
//! - `types`: wire types of the users API
//! - `directory`: the backend seam (`UserDirectory`)
//! - `api`: `UserDirectory` over HTTP
//! - `confirm`: the confirmation seam (`ConfirmationService`)
//! - `pagination`: page state and page descriptors
//! - `controller`: `UserListController`, which ties the above together

pub mod api;
pub mod confirm;
pub mod controller;
pub mod directory;
pub mod pagination;
pub mod types;

pub use api::HttpUserDirectory;
pub use confirm::{AlwaysConfirm, ConfirmRequest, ConfirmationService};
pub use controller::{ControllerPhase, DeleteOutcome, UserListController};
pub use directory::UserDirectory;
pub use pagination::{PageDescriptor, PageState, page_descriptors, total_pages};
pub use types::{SearchQuery, SearchResult, User, UserId};
