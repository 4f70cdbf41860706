use stories_logging::{stories_error, stories_warn};

use crate::KeyValueStore;

/// One named value mirrored into a [`KeyValueStore`].
///
/// Store failures are logged and otherwise ignored; the in-memory value stays
/// authoritative for the rest of the process.
#[derive(Debug)]
pub struct PersistedField<S> {
    store: S,
    key: String,
    value: String,
}

impl<S: KeyValueStore> PersistedField<S> {
    /// Reads `key` from the store, falling back to `default` when it is absent or empty.
    pub fn create(store: S, key: impl Into<String>, default: impl Into<String>) -> Self {
        let key = key.into();
        let value = match store.get(&key) {
            Ok(Some(stored)) if !stored.is_empty() => stored,
            Ok(_) => default.into(),
            Err(err) => {
                stories_warn!("Could not read {:?} from store: {}", key, err);
                default.into()
            }
        };
        Self { store, key, value }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Updates the value and writes it through to the store before returning.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if let Err(err) = self.store.set(&self.key, &self.value) {
            stories_error!("Could not persist {:?}: {}", self.key, err);
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
