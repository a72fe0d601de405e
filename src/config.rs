use std::time::Duration;

use anyhow::{Context, Result};

/// Public TheMealDB endpoint (free test key "1").
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Number of meals shown in the daily rotation.
pub const DAILY_ROTATION_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, without trailing slash.
    pub base_url: String,

    /// Transport timeouts
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,

    pub user_agent: String,

    /// How many random meals the rotation fetches at startup.
    pub rotation_size: usize,
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn load() -> Result<Self> {
        Self::load_with_base_url(None)
    }

    /// Like [`ClientConfig::load`], but `base_url` (when given) replaces
    /// `MEALDB_BASE_URL` before anything is validated.
    pub fn load_with_base_url(base_url: Option<&str>) -> Result<Self> {
        let base_url = match base_url {
            Some(url) => url.to_string(),
            None => std::env::var("MEALDB_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        };

        let mut config = Self {
            base_url,

            timeout_secs: std::env::var("MEALDB_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
                .parse()
                .context("MEALDB_TIMEOUT_SECS must be a valid number")?,

            connect_timeout_secs: std::env::var("MEALDB_CONNECT_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_CONNECT_TIMEOUT_SECS.to_string())
                .parse()
                .context("MEALDB_CONNECT_TIMEOUT_SECS must be a valid number")?,

            user_agent: default_user_agent(),

            rotation_size: std::env::var("MEALDB_ROTATION_SIZE")
                .unwrap_or_else(|_| DAILY_ROTATION_SIZE.to_string())
                .parse()
                .context("MEALDB_ROTATION_SIZE must be a valid number")?,
        };

        config.base_url = config.base_url.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    /// Same defaults, pointed at another API root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("Base URL cannot be empty");
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            anyhow::bail!("Base URL must start with http:// or https://");
        }

        if self.timeout_secs == 0 || self.connect_timeout_secs == 0 {
            anyhow::bail!("Timeouts must be greater than 0");
        }

        if self.rotation_size == 0 {
            anyhow::bail!("Rotation size must be greater than 0");
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
            rotation_size: DAILY_ROTATION_SIZE,
        }
    }
}

fn default_user_agent() -> String {
    format!("meal-finder/{}", env!("CARGO_PKG_VERSION"))
}
