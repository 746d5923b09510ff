mod cli;
mod commands;
mod config;
mod confirm;
mod context;
mod output;
mod timing;

use admin_users_business::BusinessConfig;
use anyhow::{Context as _, Result};
use clap::Parser as _;

use crate::cli::{Cli, Commands};
use crate::commands::{generate_completions, run_browse, run_config, run_delete, run_list};
use crate::config::Config;

/// Effective settings for the commands that talk to the backend.
fn resolve_config(api_url: Option<&str>, per_page: Option<u32>) -> Result<BusinessConfig> {
    let config = Config::load()
        .context("Failed to load configuration")?
        .resolve(api_url, per_page, std::env::vars())?;
    tracing::debug!(
        api_url = %config.api_url(),
        per_page = config.default_per_page,
        "Resolved configuration"
    );
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with timing support
    timing::init_tracing(cli.verbose, cli.timing);

    let api_url = cli.api_url.as_deref();
    match cli.command {
        Commands::List { page, per_page } => {
            run_list(&resolve_config(api_url, per_page)?, page).await
        }
        Commands::Delete {
            user,
            page,
            per_page,
            yes,
        } => run_delete(&resolve_config(api_url, per_page)?, &user, page, yes).await,
        Commands::Browse { per_page } => run_browse(&resolve_config(api_url, per_page)?).await,
        // Runs from the raw file so a broken setting can still be repaired.
        Commands::Config { action } => {
            let file = Config::load().context("Failed to load configuration")?;
            run_config(action, file, api_url)
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    }
}
