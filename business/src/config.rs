use serde::Deserialize;

use crate::error::ConfigError;

/// Prefix for environment variables read by [`BusinessConfig::from_env`].
pub const ENV_PREFIX: &str = "ADMIN_USERS_";

/// Page size used when nothing else is configured.
pub const DEFAULT_PER_PAGE: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Backend origin, e.g. `https://grafana.example.com`. Empty means same-origin.
    pub api_base_url: String,
    /// Page size requested by the first fetch of a new controller.
    pub default_per_page: u32,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
    per_page: Option<u32>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            default_per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn with_per_page(mut self, per_page: u32) -> Result<Self, ConfigError> {
        if per_page == 0 {
            return Err(ConfigError::InvalidPerPage(per_page));
        }
        self.default_per_page = per_page;
        Ok(self)
    }

    /// Root of the API, without a trailing slash.
    pub fn api_url(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        if base.is_empty() {
            "/api".to_owned()
        } else {
            format!("{base}/api")
        }
    }

    /// Defaults overridden by `ADMIN_USERS_API_BASE_URL` and `ADMIN_USERS_PER_PAGE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().overlay_vars(std::env::vars())
    }

    /// Applies `ADMIN_USERS_*` entries of `vars` on top of `self`; others are ignored.
    pub fn overlay_vars<I, K, V>(mut self, vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let scoped: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(ENV_PREFIX)
                    .map(|name| (name.to_owned(), value.into()))
            })
            .collect();

        let raw: RawConfig =
            serde_env::from_iter(scoped).map_err(|e| ConfigError::Env(e.to_string()))?;

        if let Some(url) = raw.api_base_url {
            log::debug!("Using {ENV_PREFIX}API_BASE_URL={url}");
            self.api_base_url = url;
        }
        match raw.per_page {
            Some(per_page) => self.with_per_page(per_page),
            None => Ok(self),
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
