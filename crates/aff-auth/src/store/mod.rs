//! Key/value slot storage for the session blob and the pending marker.
//!
//! Every write replaces a whole slot; there is no partial-field patching at
//! this layer. Reads and writes are synchronous.

mod file;
mod keychain;
mod memory;

use std::sync::Arc;

pub use self::file::FileStore;
pub use self::keychain::KeyringStore;
pub use self::memory::MemoryStore;

use crate::error::AuthError;

/// Fixed key of the single persisted session slot.
pub const SESSION_KEY: &str = "painel_afiliado_session";

/// Fixed key of the forced-password-change marker (a bare user id).
pub const PENDING_USER_KEY: &str = "pending_user_id";

/// Storage capability handed to the session manager.
pub trait SessionStore: Send + Sync {
    /// Read a slot. `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, AuthError>;

    /// Replace a slot atomically.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), AuthError>;

    /// Remove a slot. Removing a missing slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the backend refuses the removal.
    fn clear(&self, key: &str) -> Result<(), AuthError>;

    /// Short backend name for status output.
    fn backend_name(&self) -> &'static str;
}

impl<T: SessionStore + ?Sized> SessionStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        (**self).set(key, value)
    }

    fn clear(&self, key: &str) -> Result<(), AuthError> {
        (**self).clear(key)
    }

    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }
}

impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        (**self).set(key, value)
    }

    fn clear(&self, key: &str) -> Result<(), AuthError> {
        (**self).clear(key)
    }

    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }
}

/// Keys become file names and keychain accounts, so keep them boring.
pub(crate) fn validate_key(key: &str) -> Result<(), AuthError> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(AuthError::Store(format!("invalid storage key '{key}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_keys_are_valid() {
        assert!(validate_key(SESSION_KEY).is_ok());
        assert!(validate_key(PENDING_USER_KEY).is_ok());
    }

    #[test]
    fn path_like_keys_are_rejected() {
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("").is_err());
    }
}
