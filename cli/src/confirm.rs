//! Terminal confirmation prompt.

use admin_users_business::{ConfirmRequest, ConfirmationService};
use inquire::Confirm;
use tracing::warn;

/// Asks on the terminal with a `y/N` prompt. Anything but an explicit yes declines.
#[derive(Debug, Default, Clone, Copy)]
pub struct InquireConfirm;

impl ConfirmationService for InquireConfirm {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        let answer = tokio::task::spawn_blocking(move || {
            let prompt = format!("{}: {}", request.title, request.message);
            let help = format!("y = {}, n = cancel", request.confirm_label);
            Confirm::new(&prompt)
                .with_default(false)
                .with_help_message(&help)
                .prompt()
        })
        .await;

        match answer {
            Ok(Ok(confirmed)) => confirmed,
            Ok(Err(e)) => {
                warn!("Confirmation prompt failed, treating as declined: {e}");
                false
            }
            Err(e) => {
                warn!("Confirmation prompt task failed: {e}");
                false
            }
        }
    }
}
