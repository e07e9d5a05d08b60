use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

use crate::common::constants::DEFAULT_CACHE_TTL_SECS;
use crate::common::error::{CatalogError, Result};
use crate::pipeline::normalize::ImageOverrides;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub cache: CacheConfig,
    /// Exact art form name -> image URL
    pub image_overrides: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Snowflake account identifier, e.g. `xy12345.ap-south-1`
    pub account: String,
    /// Overrides the URL derived from `account`
    pub base_url: Option<String>,
    pub database: Option<String>,
    pub schema: Option<String>,
    pub warehouse: Option<String>,
    pub role: Option<String>,
    pub timeout_seconds: u64,
    /// Environment variable holding the access token
    pub token_env: String,
    pub token_type: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            account: String::new(),
            base_url: None,
            database: None,
            schema: None,
            warehouse: None,
            role: None,
            timeout_seconds: 60,
            token_env: "SNOWFLAKE_TOKEN".to_string(),
            token_type: "PROGRAMMATIC_ACCESS_TOKEN".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            CatalogError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        debug!(
            "Loaded config from {} ({} image overrides)",
            config_path.display(),
            config.image_overrides.len()
        );
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults
    pub fn load_or_default(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            Self::load(config_path)
        } else {
            warn!("Config file {} not found, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    /// Store access token from the environment. Unset or blank is `None`;
    /// a value that is not valid unicode is an error.
    pub fn store_token(&self) -> Result<Option<String>> {
        match std::env::var(&self.store.token_env) {
            Ok(token) if token.trim().is_empty() => Ok(None),
            Ok(token) => Ok(Some(token)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn image_overrides(&self) -> ImageOverrides {
        ImageOverrides::from(self.image_overrides.clone())
    }
}
