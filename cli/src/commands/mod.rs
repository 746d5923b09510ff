//! Command implementations for the admin-users CLI.
//!
//! Each subcommand is implemented in its own module.

pub mod browse;
pub mod completions;
pub mod config;
pub mod delete;
pub mod list;

pub use browse::run_browse;
pub use completions::generate_completions;
pub use config::run_config;
pub use delete::run_delete;
pub use list::run_list;
