use std::collections::HashMap;

use parking_lot::Mutex;

use super::{SessionStore, validate_key};
use crate::error::AuthError;

/// In-process store. Backs tests and `storage.backend = "memory"`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with raw content, bypassing validation of the value.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.slots.lock().insert(key.to_string(), value.to_string());
        self
    }

    /// Raw slot content, for assertions.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.lock().get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        validate_key(key)?;
        Ok(self.slots.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        validate_key(key)?;
        self.slots.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), AuthError> {
        validate_key(key)?;
        self.slots.lock().remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_whole_slot() {
        let store = MemoryStore::new();
        store.set("slot", "first").unwrap();
        store.set("slot", "second").unwrap();
        assert_eq!(store.get("slot").unwrap().as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_missing_slot_is_ok() {
        let store = MemoryStore::new();
        store.clear("absent").unwrap();
        assert!(store.is_empty());
    }
}
