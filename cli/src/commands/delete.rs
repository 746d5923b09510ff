//! Delete user command.

use admin_users_business::{AlwaysConfirm, BusinessConfig, ConfirmationService, DeleteOutcome, User};
use anyhow::{Context as _, Result, bail};
use tracing::{info, instrument};

use crate::confirm::InquireConfirm;
use crate::context::{build_controller, load_page};
use crate::output::Output;

/// Finds `key` on the page: a numeric key matches the ID, otherwise the login.
pub fn find_user<'a>(users: &'a [User], key: &str) -> Option<&'a User> {
    let by_id = key
        .parse::<i64>()
        .ok()
        .and_then(|id| users.iter().find(|u| u.id.0 == id));
    by_id.or_else(|| users.iter().find(|u| u.login == key))
}

#[instrument(skip_all, name = "delete", fields(user = user_key, page = page, yes = yes))]
pub async fn run_delete(
    config: &BusinessConfig,
    user_key: &str,
    page: u32,
    yes: bool,
) -> Result<()> {
    if yes {
        delete_with(config, AlwaysConfirm, user_key, page).await
    } else {
        delete_with(config, InquireConfirm, user_key, page).await
    }
}

async fn delete_with<C: ConfirmationService>(
    config: &BusinessConfig,
    confirmer: C,
    user_key: &str,
    page: u32,
) -> Result<()> {
    let out = Output::new();
    let controller = build_controller(config, confirmer);

    load_page(&controller, page)
        .await
        .with_context(|| format!("Failed to load users page {page}"))?;

    let users = controller.users();
    let Some(user) = find_user(&users, user_key) else {
        bail!(
            "No user '{user_key}' on page {} ({} per page); use `list` to locate it",
            controller.page(),
            controller.per_page()
        );
    };

    let outcome = controller
        .delete_user(user)
        .await
        .with_context(|| format!("Failed to delete {} (id {})", user.login, user.id))?;

    match outcome {
        DeleteOutcome::Declined => out.dim("Cancelled, nothing was deleted."),
        DeleteOutcome::Deleted => {
            info!(id = %user.id, login = %user.login, "User deleted");
            out.success(format!("Deleted {} (id {})", user.login, user.id));
            out.page(&controller.snapshot());
        }
    }
    Ok(())
}
