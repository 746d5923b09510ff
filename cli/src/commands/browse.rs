//! Interactive browse command: page through users and delete from the list.

use std::fmt;

use admin_users_business::{BusinessConfig, DeleteOutcome, PageDescriptor, PageState, User};
use anyhow::{Context as _, Result};
use inquire::Select;
use tracing::{instrument, warn};

use crate::confirm::InquireConfirm;
use crate::context::{Controller, build_controller};
use crate::output::Output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    Next,
    Previous,
    GoTo,
    Delete,
    Refresh,
    Quit,
}

impl fmt::Display for BrowseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Next => "Next page",
            Self::Previous => "Previous page",
            Self::GoTo => "Go to page...",
            Self::Delete => "Delete a user...",
            Self::Refresh => "Refresh",
            Self::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Actions that make sense for `state`.
pub fn available_actions(state: &PageState) -> Vec<BrowseAction> {
    let mut actions = Vec::new();
    if state.has_next() {
        actions.push(BrowseAction::Next);
    }
    if state.has_previous() {
        actions.push(BrowseAction::Previous);
    }
    if state.pages.len() > 1 {
        actions.push(BrowseAction::GoTo);
    }
    if !state.users.is_empty() {
        actions.push(BrowseAction::Delete);
    }
    actions.push(BrowseAction::Refresh);
    actions.push(BrowseAction::Quit);
    actions
}

struct PageChoice(PageDescriptor);

impl fmt::Display for PageChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.current {
            write!(f, "Page {} (current)", self.0.page)
        } else {
            write!(f, "Page {}", self.0.page)
        }
    }
}

struct UserChoice(User);

impl fmt::Display for UserChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id {})", self.0.login, self.0.id)
    }
}

#[instrument(skip_all, name = "browse", fields(per_page = config.default_per_page))]
pub async fn run_browse(config: &BusinessConfig) -> Result<()> {
    let out = Output::new();
    let controller = build_controller(config, InquireConfirm);

    controller
        .initialize()
        .await
        .context("Failed to load the first users page")?;

    loop {
        let state = controller.snapshot();
        out.page(&state);

        let action = Select::new("What next?", available_actions(&state))
            .with_help_message("Use arrow keys to navigate, Enter to select, Esc to quit")
            .prompt_skippable()
            .context("Failed to read action")?;

        match action {
            None | Some(BrowseAction::Quit) => return Ok(()),
            Some(BrowseAction::Refresh) => report(&out, controller.refresh().await),
            Some(BrowseAction::Next) => {
                go_to(&out, &controller, PageDescriptor::new(state.page + 1)).await;
            }
            Some(BrowseAction::Previous) => {
                go_to(&out, &controller, PageDescriptor::new(state.page - 1)).await;
            }
            Some(BrowseAction::GoTo) => {
                let choices = state.pages.iter().copied().map(PageChoice).collect();
                let picked = Select::new("Go to:", choices)
                    .prompt_skippable()
                    .context("Failed to read page")?;
                if let Some(PageChoice(descriptor)) = picked {
                    go_to(&out, &controller, descriptor).await;
                }
            }
            Some(BrowseAction::Delete) => {
                let choices = state.users.iter().cloned().map(UserChoice).collect();
                let picked = Select::new("Delete which user?", choices)
                    .prompt_skippable()
                    .context("Failed to read user")?;
                if let Some(UserChoice(user)) = picked {
                    match controller.delete_user(&user).await {
                        Ok(DeleteOutcome::Deleted) => {
                            out.success(format!("Deleted {} (id {})", user.login, user.id));
                        }
                        Ok(DeleteOutcome::Declined) => out.dim("Cancelled."),
                        Err(e) => {
                            warn!("Delete of {} failed: {e}", user.id);
                            out.error(format!("Failed to delete {}: {e}", user.login));
                        }
                    }
                }
            }
        }
    }
}

async fn go_to(out: &Output, controller: &Controller<InquireConfirm>, descriptor: PageDescriptor) {
    report(out, controller.navigate_to_page(descriptor).await);
}

/// Transport errors keep the session alive; the stale page stays on screen.
fn report(out: &Output, result: admin_users_business::TransportResult<()>) {
    if let Err(e) = result {
        out.warning(format!("Showing cached page, request failed: {e}"));
    }
}
