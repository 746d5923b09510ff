//! Config command: show or update the saved configuration.

use anyhow::{Result, bail};
use tracing::instrument;

use crate::cli::ConfigAction;
use crate::config::Config;
use crate::output::Output;

#[instrument(skip_all, name = "config")]
pub fn run_config(
    action: ConfigAction,
    mut file: Config,
    api_url_flag: Option<&str>,
) -> Result<()> {
    let out = Output::new();

    match action {
        ConfigAction::Show => {
            out.labeled("Config file", Config::config_path()?.display());
            let effective = file.resolve(api_url_flag, None, std::env::vars())?;
            out.labeled("API URL", effective.api_url());
            out.labeled("Per page", effective.default_per_page);
        }
        ConfigAction::SetUrl { url } => {
            file.api.base_url = Some(url.trim_end_matches('/').to_owned());
            let path = file.save()?;
            out.success(format!("Saved API URL to {}", path.display()));
        }
        ConfigAction::SetPerPage { per_page } => {
            if per_page == 0 {
                bail!("per-page size must be at least 1");
            }
            file.api.per_page = Some(per_page);
            let path = file.save()?;
            out.success(format!("Saved page size {per_page} to {}", path.display()));
        }
    }
    Ok(())
}
