//! List users command.

use admin_users_business::BusinessConfig;
use anyhow::{Context as _, Result};
use tracing::instrument;

use crate::confirm::InquireConfirm;
use crate::context::{build_controller, load_page};
use crate::output::Output;

#[instrument(skip_all, name = "list", fields(page = page, per_page = config.default_per_page))]
pub async fn run_list(config: &BusinessConfig, page: u32) -> Result<()> {
    let out = Output::new();
    let controller = build_controller(config, InquireConfirm);

    load_page(&controller, page)
        .await
        .with_context(|| format!("Failed to load users page {page}"))?;

    out.page(&controller.snapshot());
    Ok(())
}
