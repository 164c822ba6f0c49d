// Runtime configuration.
// Resolved from parsed CLI flags (which already carry their environment fallbacks).

use std::path::PathBuf;
use std::time::Duration;

use crate::cache::{DEFAULT_TTL, default_storage_path, storage_path};
use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::github::{GITHUB_API_BASE, GITHUB_COLORS_URL};
use crate::state::DEFAULT_SIDEBAR_WIDTH;

#[derive(Debug, Clone)]
pub struct Config {
    /// File backing the persisted store.
    pub storage_path: PathBuf,
    pub ttl: Duration,
    pub api_base: String,
    pub colors_url: String,
    pub token: Option<String>,
    pub sidebar_width: u32,
    pub timeout: Duration,
}

impl Config {
    /// Defaults with the store under `cache_dir`.
    pub fn with_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: storage_path(&cache_dir.into()),
            ttl: DEFAULT_TTL,
            api_base: GITHUB_API_BASE.to_string(),
            colors_url: GITHUB_COLORS_URL.to_string(),
            token: None,
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            timeout: Duration::from_secs(30),
        }
    }

    /// Build a validated configuration from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let storage_path = match &cli.cache_dir {
            Some(dir) => storage_path(dir),
            None => default_storage_path()
                .ok_or_else(|| Error::Config("no cache directory available".to_string()))?,
        };

        let config = Self {
            storage_path,
            ttl: Duration::from_millis(cli.ttl_ms),
            api_base: cli.api_base.clone(),
            colors_url: cli.colors_url.clone(),
            token: cli.token.clone().filter(|t| !t.trim().is_empty()),
            sidebar_width: cli.sidebar_width,
            timeout: Duration::from_secs(cli.timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_base.trim().is_empty() {
            return Err(Error::Config("api base URL is empty".to_string()));
        }
        if self.colors_url.trim().is_empty() {
            return Err(Error::Config("colors URL is empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(Error::Config("timeout must be positive".to_string()));
        }
        Ok(())
    }
}
