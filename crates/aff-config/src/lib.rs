//! # aff-config
//!
//! Layered configuration loading for the affiliate client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AFILIADOS_*` prefix, `__` as separator)
//! 2. Project-level `.afiliados/config.toml`
//! 3. User-level `~/.config/afiliados/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AFILIADOS_API__BASE_URL` -> `api.base_url`,
//! `AFILIADOS_STORAGE__BACKEND` -> `storage.backend`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use aff_config::AffConfig;
//!
//! let config = AffConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod links;
mod postal;
mod storage;

pub use api::{ApiConfig, DEFAULT_API_BASE_URL};
pub use error::ConfigError;
pub use links::LinkConfig;
pub use postal::PostalConfig;
pub use storage::{StorageBackend, StorageConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AffConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub postal: PostalConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub links: LinkConfig,
}

impl AffConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".afiliados/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("AFILIADOS_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("afiliados").join("config.toml"))
    }

    /// Load `.env` from the current directory or the nearest ancestor.
    /// Silently does nothing if none is found.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = AffConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.links.utm_medium, "afiliado");
        assert!(config.links.utm_campaign.is_empty());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: AffConfig = AffConfig::figment().extract()?;
            assert_eq!(config.postal.base_url, "https://viacep.com.br");
            assert_eq!(config.postal.timeout_secs, 10);
            Ok(())
        });
    }
}
