//! Runtime configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. Built-in defaults
//! 2. `catalog.toml` in the working directory (optional)
//! 3. Environment variables: `CATALOG_*`
//!
//! ```toml
//! log_filter = "catalog=debug"
//! seed_file = "seed.json"
//!
//! [default_listing]
//! per_page = 5
//! sort = "name"
//! ```

use std::ops::Deref;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::application::dto::SearchInput;

/// Default config file, looked up relative to the working directory.
pub const CONFIG_FILE: &str = "catalog.toml";

/// Prefix for environment overrides, e.g. `CATALOG_LOG_FILTER=debug`.
pub const ENV_PREFIX: &str = "CATALOG_";

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `info` or `catalog=debug`.
    pub log_filter: String,
    /// JSON array of categories to create at startup.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
    /// Listing used when the binary is given no search input.
    #[serde(default)]
    pub default_listing: Option<SearchInput>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: "info".to_string(),
            seed_file: None,
            default_listing: None,
        }
    }
}

impl Config {
    /// Load config with layered resolution (defaults → `catalog.toml` → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Same as [`Config::load`] with an explicit config file path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_figment(
            Self::base_figment(path).merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    /// Defaults overlaid with the TOML file; a missing file is skipped.
    fn base_figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Toml::file(path.as_ref()))
    }

    fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        figment.extract().map_err(ConfigError::from)
    }
}
