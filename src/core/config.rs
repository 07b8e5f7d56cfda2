use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

use super::currency::{CurrencyCode, CurrencySet};

/// Environment variable holding the default API key.
pub const API_KEY_ENV: &str = "API_KEY_CURRENCIES";

pub const DEFAULT_BASE_URL: &str = "https://api.freecurrencyapi.com";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProviderConfig {
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default = "default_currencies")]
    pub currencies: Vec<CurrencyCode>,
}

fn default_currencies() -> Vec<CurrencyCode> {
    CurrencySet::default().codes().to_vec()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            provider: ProviderConfig::default(),
            currencies: default_currencies(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults
    /// when no file has been set up.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "fxconv", "fxconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn currency_set(&self) -> Result<CurrencySet> {
        CurrencySet::new(self.currencies.iter().cloned()).context("Invalid `currencies` setting")
    }
}

/// Everything the form needs at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub default_api_key: Option<String>,
    pub currencies: CurrencySet,
    pub base_url: String,
}

impl StartupConfig {
    /// Combines the loaded config with a default API key, typically read from
    /// [`API_KEY_ENV`]. The key is trimmed the same way typed keys are, and
    /// a blank key counts as absent.
    pub fn new(config: &AppConfig, default_api_key: Option<String>) -> Result<Self> {
        Ok(StartupConfig {
            default_api_key: default_api_key
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            currencies: config.currency_set()?,
            base_url: config.provider.base_url.clone(),
        })
    }
}

impl Default for StartupConfig {
    fn default() -> Self {
        StartupConfig {
            default_api_key: None,
            currencies: CurrencySet::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
