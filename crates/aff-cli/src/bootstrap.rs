use aff_auth::{FileStore, KeyringStore, MemoryStore, SessionStore};
use aff_config::{AffConfig, StorageBackend, StorageConfig};
use anyhow::Context;

pub fn load_config() -> anyhow::Result<AffConfig> {
    AffConfig::load_with_dotenv().context("failed to load configuration")
}

/// Open the session store selected by `storage.backend`.
pub fn open_store(config: &StorageConfig) -> anyhow::Result<Box<dyn SessionStore>> {
    let store: Box<dyn SessionStore> = match config.backend {
        StorageBackend::File => Box::new(FileStore::new(storage_dir(config)?)),
        StorageBackend::Keyring => Box::new(
            KeyringStore::new(config.keyring_service.clone())
                .with_file_fallback(FileStore::new(storage_dir(config)?)),
        ),
        StorageBackend::Memory => {
            tracing::warn!("memory session store selected; the session ends with this process");
            Box::new(MemoryStore::new())
        }
    };
    tracing::debug!(backend = store.backend_name(), "session store opened");
    Ok(store)
}

fn storage_dir(config: &StorageConfig) -> anyhow::Result<std::path::PathBuf> {
    config
        .resolved_dir()
        .context("cannot determine a home directory; set AFILIADOS_STORAGE__DIR")
}
