use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use super::{SessionStore, validate_key};
use crate::error::AuthError;

/// One file per key under a private directory (`0700`, files `0600`).
///
/// Writes go to a sibling temp file and are renamed into place, so a reader
/// sees either the old slot or the new one.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, AuthError> {
        validate_key(key)?;
        Ok(self.dir.join(key))
    }

    fn ensure_dir(&self) -> Result<(), AuthError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AuthError::Store(format!("mkdir {}: {e}", self.dir.display()))
        })?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.dir.display());
            }
        }
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(None),
            Err(e) => Err(AuthError::Store(format!("read {}: {e}", path.display()))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        let path = self.slot_path(key)?;
        self.ensure_dir()?;

        let tmp = self.dir.join(format!(".{key}.tmp"));
        fs::write(&tmp, value)
            .map_err(|e| AuthError::Store(format!("write {}: {e}", tmp.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::Store(format!("chmod {}: {e}", tmp.display())))?;
        }
        fs::rename(&tmp, &path).map_err(|e| {
            AuthError::Store(format!("rename {} -> {}: {e}", tmp.display(), path.display()))
        })
    }

    fn clear(&self, key: &str) -> Result<(), AuthError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::Store(format!(
                "failed to delete {}: {e}",
                path.display()
            ))),
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_load_clear_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileStore::new(tmp.path().join("afl"));

        assert_eq!(store.get("slot").unwrap(), None);
        store.set("slot", r#"{"a":1}"#).unwrap();
        assert_eq!(store.get("slot").unwrap().as_deref(), Some(r#"{"a":1}"#));

        store.clear("slot").unwrap();
        assert_eq!(store.get("slot").unwrap(), None);
        store.clear("slot").unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn slot_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileStore::new(tmp.path());
        store.set("slot", "x").unwrap();

        let mode = fs::metadata(tmp.path().join("slot"))
            .expect("metadata")
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(mode, 0o600, "slot file should be 0600");
    }

    #[test]
    fn whitespace_only_slot_reads_as_empty() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        fs::write(tmp.path().join("slot"), "  \n ").expect("write");
        let store = FileStore::new(tmp.path());
        assert_eq!(store.get("slot").unwrap(), None);
    }

    #[test]
    fn no_temp_file_left_behind() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileStore::new(tmp.path());
        store.set("slot", "value").unwrap();
        assert!(!tmp.path().join(".slot.tmp").exists());
    }
}
