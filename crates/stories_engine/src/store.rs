use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use stories_logging::{stories_info, stories_warn};
use thiserror::Error;

use crate::persist::{AtomicFileWriter, PersistError};

/// Default durable store, relative to the current working directory.
pub const DEFAULT_STATE_FILE: &str = ".hacker_stories_state.ron";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse store {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize store: {0}")]
    Serialize(#[from] ron::Error),
    #[error("failed to write store: {0}")]
    Persist(#[from] PersistError),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Key-value store kept in a RON map on disk and rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    writer: AtomicFileWriter,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store, starting empty when the file is missing or unusable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::load(&path) {
            Ok(store) => store,
            Err(err) => {
                stories_warn!("Ignoring persisted state: {}", err);
                Self::empty(path)
            }
        }
    }

    /// Opens the store, reporting unreadable or unparsable files.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::empty(path.to_path_buf()));
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let entries = ron::from_str(&content).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        stories_info!("Loaded persisted state from {:?}", path);
        Ok(Self {
            writer: AtomicFileWriter::new(path),
            entries,
        })
    }

    fn empty(path: PathBuf) -> Self {
        Self {
            writer: AtomicFileWriter::new(path),
            entries: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        self.writer.target()
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(&self.entries, pretty)?;
        self.writer.write(&content)?;
        Ok(())
    }
}

/// Process-local store; nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), value.into());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
