use std::future::Future;

/// What a confirmation prompt should say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub confirm_icon: String,
    pub confirm_label: String,
}

impl ConfirmRequest {
    /// Prompt shown before deleting the account `login`.
    pub fn delete_user(login: &str) -> Self {
        Self {
            title: "Delete".to_owned(),
            message: format!("Do you want to delete {login}?"),
            confirm_icon: "fa-trash".to_owned(),
            confirm_label: "Delete".to_owned(),
        }
    }
}

/// Yes/no gate in front of destructive actions.
///
/// Resolving to `true` means the user explicitly confirmed. Anything else
/// (declined, dismissed, prompt could not be shown) is `false`.
pub trait ConfirmationService: Send + Sync {
    fn confirm(&self, request: ConfirmRequest) -> impl Future<Output = bool> + Send;
}

/// Confirms everything without asking. For scripted use (`--yes`).
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl ConfirmationService for AlwaysConfirm {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        log::debug!("Auto-confirming: {}", request.message);
        true
    }
}
