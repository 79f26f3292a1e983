//! Postal-code (CEP) lookup configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_timeout_secs() -> u64 {
    10
}

fn default_base_url() -> String {
    "https://viacep.com.br".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PostalConfig {
    /// Lookup service root; `/ws/{cep}/json/` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PostalConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PostalConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` unless the URL is `http(s)`.
    pub fn normalized_base_url(&self) -> Result<String, ConfigError> {
        crate::api::normalize_http_url("postal.base_url", &self.base_url)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `timeout_secs` is zero.
    pub fn timeout(&self) -> Result<Duration, ConfigError> {
        crate::api::positive_timeout("postal.timeout_secs", self.timeout_secs)
    }
}
