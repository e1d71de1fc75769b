//! Local persistence for the last dashboard selection.
//!
//! Web builds use `window.localStorage`; desktop builds keep one JSON file
//! per key under the platform data directory. Callers treat every failure
//! as "persistence unavailable" and carry on in memory.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use super::selection::{PersistedSelection, Selection};

/// Fixed key the selection is stored under.
pub const SELECTION_KEY: &str = "pulseboard-selection-v1";

#[derive(Debug, Error)]
pub enum StorageUnavailable {
    #[error("no storage backend: {0}")]
    Missing(&'static str),
    #[error("storage access denied: {0}")]
    Denied(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode selection: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Minimal string key-value store.
pub trait SelectionStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageUnavailable>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageUnavailable>;
}

/// Read the stored selection. Malformed payloads come back as `Ok(None)`;
/// only backend failures are errors.
pub fn load_selection<S: SelectionStore + ?Sized>(
    store: &S,
) -> Result<Option<PersistedSelection>, StorageUnavailable> {
    let raw = store.read(SELECTION_KEY)?;
    Ok(raw.as_deref().and_then(PersistedSelection::from_json))
}

pub fn save_selection<S: SelectionStore + ?Sized>(
    store: &S,
    selection: &Selection,
) -> Result<(), StorageUnavailable> {
    let payload = serde_json::to_string(selection)?;
    store.write(SELECTION_KEY, &payload)
}

/// Process-local store backed by a map. Nothing is kept across restarts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageUnavailable> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageUnavailable> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore as PlatformStore;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore as PlatformStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

/// Per-user application data directory on desktop platforms.
#[cfg(not(target_arch = "wasm32"))]
pub fn data_dir() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("com", "Pulseboard", "Pulseboard")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

/// Open the store for the current platform.
pub fn platform_store() -> Result<PlatformStore, StorageUnavailable> {
    PlatformStore::open()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{SelectionStore, StorageUnavailable};

    /// `window.localStorage` wrapper.
    pub struct BrowserStore {
        storage: web_sys::Storage,
    }

    impl BrowserStore {
        pub fn open() -> Result<Self, StorageUnavailable> {
            let window = web_sys::window().ok_or(StorageUnavailable::Missing("window"))?;
            // Throws in some privacy modes.
            let storage = window
                .local_storage()
                .map_err(|err| StorageUnavailable::Denied(format!("{err:?}")))?
                .ok_or(StorageUnavailable::Missing("localStorage"))?;
            Ok(Self { storage })
        }
    }

    impl SelectionStore for BrowserStore {
        fn read(&self, key: &str) -> Result<Option<String>, StorageUnavailable> {
            self.storage
                .get_item(key)
                .map_err(|err| StorageUnavailable::Denied(format!("{err:?}")))
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageUnavailable> {
            self.storage
                .set_item(key, value)
                .map_err(|err| StorageUnavailable::Denied(format!("{err:?}")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::PathBuf;

    use super::{SelectionStore, StorageUnavailable};

    /// One `<key>.json` file per entry inside `dir`.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        dir: PathBuf,
    }

    impl FileStore {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        /// `<data dir>/state` for the current user.
        pub fn open() -> Result<Self, StorageUnavailable> {
            let root = super::data_dir().ok_or(StorageUnavailable::Missing("home directory"))?;
            Ok(Self::new(root.join("state")))
        }

        fn path_for(&self, key: &str) -> PathBuf {
            self.dir.join(format!("{key}.json"))
        }
    }

    impl SelectionStore for FileStore {
        fn read(&self, key: &str) -> Result<Option<String>, StorageUnavailable> {
            match fs::read_to_string(self.path_for(key)) {
                Ok(raw) => Ok(Some(raw)),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            }
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageUnavailable> {
            fs::create_dir_all(&self.dir)?;
            fs::write(self.path_for(key), value)?;
            Ok(())
        }
    }
}
