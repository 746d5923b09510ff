use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "admin-users")]
#[command(about = "List and delete user accounts through the admin users API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend origin, e.g. https://grafana.example.com (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one page of users
    List {
        /// Page number (starting at 1)
        #[arg(long, short = 'p', default_value = "1")]
        page: u32,

        /// Users per page (defaults to the configured page size)
        #[arg(long, short = 'n')]
        per_page: Option<u32>,
    },
    /// Delete a user shown on the given page, after confirmation
    Delete {
        /// User ID or login
        user: String,

        /// Page the user is listed on
        #[arg(long, short = 'p', default_value = "1")]
        page: u32,

        /// Users per page (defaults to the configured page size)
        #[arg(long, short = 'n')]
        per_page: Option<u32>,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Page through users interactively and delete from the list
    Browse {
        /// Users per page (defaults to the configured page size)
        #[arg(long, short = 'n')]
        per_page: Option<u32>,
    },
    /// Show or change the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration and where it is stored
    Show,
    /// Save the backend origin
    SetUrl {
        /// Backend origin, e.g. https://grafana.example.com
        url: String,
    },
    /// Save the default page size
    SetPerPage {
        /// Users per page (at least 1)
        per_page: u32,
    },
}
