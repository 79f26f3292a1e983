use super::{FileStore, SessionStore, validate_key};
use crate::error::AuthError;

/// OS keychain store, one entry per key under a fixed service name.
///
/// When a file fallback is configured, keychain failures degrade to the file
/// store instead of failing the operation.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
    fallback: Option<FileStore>,
}

impl KeyringStore {
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            fallback: None,
        }
    }

    #[must_use]
    pub fn with_file_fallback(mut self, fallback: FileStore) -> Self {
        self.fallback = Some(fallback);
        self
    }

    fn entry(&self, key: &str) -> Result<keyring::Entry, keyring::Error> {
        keyring::Entry::new(&self.service, key)
    }

    fn fallback_or(&self, error: String) -> Result<&FileStore, AuthError> {
        self.fallback.as_ref().ok_or(AuthError::Store(error))
    }
}

impl SessionStore for KeyringStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        validate_key(key)?;
        // A file copy only exists after a failed keyring write, so it is newer
        // than anything the keyring still holds.
        let file_copy = match &self.fallback {
            Some(file) => file.get(key)?,
            None => None,
        };
        if file_copy.is_some() {
            return Ok(file_copy);
        }
        let keyring_read = self.entry(key).and_then(|entry| entry.get_password());
        interpret_read(key, keyring_read, self.fallback.is_some())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        validate_key(key)?;
        match self.entry(key).and_then(|entry| entry.set_password(value)) {
            Ok(()) => {
                // Drop any copy left behind by an earlier fallback write.
                if let Some(file) = &self.fallback {
                    file.clear(key)?;
                }
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, key, "keyring store failed; falling back to file");
                self.fallback_or(format!("keyring write: {error}"))?
                    .set(key, value)?;
                match self.entry(key).and_then(|entry| entry.delete_credential()) {
                    Ok(()) | Err(keyring::Error::NoEntry) => {}
                    Err(error) => tracing::debug!(%error, key, "stale keyring entry kept"),
                }
                Ok(())
            }
        }
    }

    fn clear(&self, key: &str) -> Result<(), AuthError> {
        validate_key(key)?;
        let keyring_result = match self.entry(key).and_then(|entry| entry.delete_credential()) {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(format!("keyring delete: {error}")),
        };
        if let Some(file) = &self.fallback {
            file.clear(key)?;
        }
        match keyring_result {
            Ok(()) => Ok(()),
            Err(message) if self.fallback.is_some() => {
                tracing::warn!(key, "{message}");
                Ok(())
            }
            Err(message) => Err(AuthError::Store(message)),
        }
    }

    fn backend_name(&self) -> &'static str {
        "keyring"
    }
}

fn interpret_read(
    key: &str,
    keyring_read: Result<String, keyring::Error>,
    has_fallback: bool,
) -> Result<Option<String>, AuthError> {
    match keyring_read {
        Ok(value) if !value.is_empty() => Ok(Some(value)),
        Ok(_) | Err(keyring::Error::NoEntry) => Ok(None),
        Err(error) if has_fallback => {
            tracing::warn!(%error, key, "keyring read failed");
            Ok(None)
        }
        Err(error) => Err(AuthError::Store(format!("keyring read: {error}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locked() -> keyring::Error {
        keyring::Error::NoStorageAccess("locked".into())
    }

    #[test]
    fn fallback_copy_wins_over_keyring() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let file = FileStore::new(tmp.path().join("afl"));
        file.set("pending_user_id", "42").unwrap();

        let store = KeyringStore::new("afiliados-test").with_file_fallback(file);
        assert_eq!(store.get("pending_user_id").unwrap().as_deref(), Some("42"));
    }

    #[test]
    fn keyring_reads() {
        assert_eq!(
            interpret_read("k", Ok("kept".into()), false).unwrap().as_deref(),
            Some("kept")
        );
        assert_eq!(interpret_read("k", Ok(String::new()), false).unwrap(), None);
        assert_eq!(
            interpret_read("k", Err(keyring::Error::NoEntry), false).unwrap(),
            None
        );
    }

    #[test]
    fn keyring_failure_is_an_error_only_without_fallback() {
        assert_eq!(interpret_read("k", Err(locked()), true).unwrap(), None);
        let error = interpret_read("k", Err(locked()), false).unwrap_err();
        assert!(matches!(error, AuthError::Store(_)));
    }
}
