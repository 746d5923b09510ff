//! Configuration file handling for the CLI.
//!
//! Stores settings in `$XDG_CONFIG_HOME/admin-users/config.toml` following
//! the XDG Base Directory Specification.

use std::fs;
use std::path::{Path, PathBuf};

use admin_users_business::BusinessConfig;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// CLI configuration stored on disk
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// API section
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend settings
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend origin, e.g. `https://grafana.example.com`
    pub base_url: Option<String>,
    /// Default page size
    pub per_page: Option<u32>,
}

impl Config {
    /// Get the configuration file path.
    ///
    /// Returns `$XDG_CONFIG_HOME/admin-users/config.toml` on Linux,
    /// appropriate paths on other platforms.
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "admin-users", "admin-users")
            .context("Failed to determine config directory")?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Builds the business config.
    ///
    /// Precedence, highest first: command-line flags, `ADMIN_USERS_*`
    /// environment variables, this file, built-in defaults.
    pub fn resolve(
        &self,
        api_url_flag: Option<&str>,
        per_page_flag: Option<u32>,
        env: impl IntoIterator<Item = (String, String)>,
    ) -> Result<BusinessConfig> {
        let mut config = BusinessConfig::default();
        if let Some(url) = &self.api.base_url {
            config.api_base_url = url.clone();
        }
        if let Some(per_page) = self.api.per_page {
            config = config
                .with_per_page(per_page)
                .context("Invalid per_page in config file")?;
        }

        let mut config = config
            .overlay_vars(env)
            .context("Invalid ADMIN_USERS_* environment")?;

        if let Some(url) = api_url_flag {
            config.api_base_url = url.to_owned();
        }
        if let Some(per_page) = per_page_flag {
            config = config
                .with_per_page(per_page)
                .context("Invalid --per-page")?;
        }

        Ok(config)
    }
}
