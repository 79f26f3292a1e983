//! Session storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const DEFAULT_KEYRING_SERVICE: &str = "afiliados-cli";

/// Where the session slot and pending marker are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// One file per key under `storage.dir`.
    #[default]
    File,
    /// OS keychain entries under `storage.keyring_service`.
    Keyring,
    /// Process memory only; nothing survives the process.
    Memory,
}

fn default_keyring_service() -> String {
    DEFAULT_KEYRING_SERVICE.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for the file backend. Empty means `~/.afiliados`.
    #[serde(default)]
    pub dir: String,

    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            dir: String::new(),
            keyring_service: default_keyring_service(),
        }
    }
}

impl StorageConfig {
    /// Resolve the file-backend directory.
    #[must_use]
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        if self.dir.trim().is_empty() {
            return dirs::home_dir().map(|home| home.join(".afiliados"));
        }
        Some(PathBuf::from(self.dir.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_file_backend() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::File);
        assert_eq!(config.keyring_service, "afiliados-cli");
    }

    #[test]
    fn explicit_dir_wins() {
        let config = StorageConfig {
            dir: "/tmp/afl".into(),
            ..Default::default()
        };
        assert_eq!(config.resolved_dir(), Some(PathBuf::from("/tmp/afl")));
    }
}
