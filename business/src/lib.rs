//! Business layer for the admin users tool.
//!
//! Front ends construct a [`UserListController`] with a [`UserDirectory`]
//! (usually [`HttpUserDirectory`]) and a [`ConfirmationService`], then read
//! its state and call its commands.

pub mod config;
pub mod error;
pub mod http;
pub mod users;

pub use config::{BusinessConfig, DEFAULT_PER_PAGE};
pub use error::{ConfigError, TransportError, TransportResult};
pub use users::{
    AlwaysConfirm, ConfirmRequest, ConfirmationService, ControllerPhase, DeleteOutcome,
    HttpUserDirectory, PageDescriptor, PageState, SearchQuery, SearchResult, User, UserDirectory,
    UserId, UserListController,
};
