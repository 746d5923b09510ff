//! Controller construction shared by the commands.

use admin_users_business::{
    BusinessConfig, ConfirmationService, HttpUserDirectory, PageDescriptor, TransportResult,
    UserListController,
};
use tracing::instrument;

pub type Controller<C> = UserListController<HttpUserDirectory, C>;

/// Controller talking to the configured backend.
pub fn build_controller<C: ConfirmationService>(
    config: &BusinessConfig,
    confirmer: C,
) -> Controller<C> {
    UserListController::from_config(HttpUserDirectory::new(config), confirmer, config)
}

/// Loads `page`: the regular initial load for page 1, a navigation otherwise.
#[instrument(skip_all, name = "load_page", fields(page = page))]
pub async fn load_page<C: ConfirmationService>(
    controller: &Controller<C>,
    page: u32,
) -> TransportResult<()> {
    if page <= 1 {
        controller.initialize().await
    } else {
        controller.navigate_to_page(PageDescriptor::new(page)).await
    }
}
