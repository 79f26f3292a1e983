//! Remote affiliate API configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Production API base, including the `/api` prefix.
pub const DEFAULT_API_BASE_URL: &str = "https://painel-afiliados-production.up.railway.app/api";

const fn default_timeout_secs() -> u64 {
    30
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL that `/auth/...` paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Base URL without a trailing slash.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` unless the URL is `http(s)`.
    pub fn normalized_base_url(&self) -> Result<String, ConfigError> {
        normalize_http_url("api.base_url", &self.base_url)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `timeout_secs` is zero.
    pub fn timeout(&self) -> Result<Duration, ConfigError> {
        positive_timeout("api.timeout_secs", self.timeout_secs)
    }
}

pub(crate) fn positive_timeout(field: &str, secs: u64) -> Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidValue {
            field: field.into(),
            reason: "timeout must be at least one second".into(),
        });
    }
    Ok(Duration::from_secs(secs))
}

pub(crate) fn normalize_http_url(field: &str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        return Err(ConfigError::InvalidValue {
            field: field.into(),
            reason: format!("expected an http(s) URL, got '{value}'"),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:8080/api/".into(),
            ..Default::default()
        };
        assert_eq!(
            config.normalized_base_url().unwrap(),
            "http://127.0.0.1:8080/api"
        );
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.timeout(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "api.timeout_secs"
        ));
        assert_eq!(ApiConfig::default().timeout().unwrap(), Duration::from_secs(30));
    }

    #[test]
    fn non_http_url_is_rejected() {
        let config = ApiConfig {
            base_url: "ftp://example.com".into(),
            ..Default::default()
        };
        assert!(config.normalized_base_url().is_err());
    }
}
