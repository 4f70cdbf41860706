use std::fs;

use stories_core::SEARCH_KEY;
use stories_engine::{FileStore, KeyValueStore, MemoryStore, PersistedField, StoreError};
use tempfile::TempDir;

fn init_logging() {
    stories_logging::initialize_for_tests();
}

/// A store whose medium is gone: every call fails.
struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("disk detached".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk detached".to_string()))
    }
}

#[test]
fn field_uses_default_when_key_absent_or_empty() {
    init_logging();
    let field = PersistedField::create(MemoryStore::new(), SEARCH_KEY, "React");
    assert_eq!(field.value(), "React");

    let field = PersistedField::create(MemoryStore::with_entry(SEARCH_KEY, ""), SEARCH_KEY, "React");
    assert_eq!(field.value(), "React");
}

#[test]
fn field_writes_through_on_every_set() {
    init_logging();
    let mut field = PersistedField::create(MemoryStore::new(), SEARCH_KEY, "");
    field.set("Re");
    assert_eq!(field.store().get(SEARCH_KEY).unwrap().as_deref(), Some("Re"));
    field.set("Redux");
    assert_eq!(field.value(), "Redux");
    assert_eq!(field.store().get(SEARCH_KEY).unwrap().as_deref(), Some("Redux"));
}

#[test]
fn persisted_term_survives_restart() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".hacker_stories_state.ron");

    let mut field = PersistedField::create(FileStore::open(&path), SEARCH_KEY, "");
    field.set("Redux");
    drop(field);

    let restarted = PersistedField::create(FileStore::open(&path), SEARCH_KEY, "");
    assert_eq!(restarted.value(), "Redux");
}

#[test]
fn unavailable_store_degrades_to_memory() {
    init_logging();
    let mut field = PersistedField::create(UnavailableStore, SEARCH_KEY, "React");
    assert_eq!(field.value(), "React");

    field.set("Redux");
    assert_eq!(field.value(), "Redux");
}

#[test]
fn unwritable_file_store_keeps_working_in_memory() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let mut store = FileStore::open(blocker.join("state.ron"));
    assert!(store.set(SEARCH_KEY, "Redux").is_err());

    let mut field = PersistedField::create(store, SEARCH_KEY, "");
    assert_eq!(field.value(), "Redux");
    field.set("Rust");
    assert_eq!(field.value(), "Rust");
}

#[test]
fn corrupt_state_file_is_reported_and_ignored() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state.ron");
    fs::write(&path, "{ this is not ron").unwrap();

    assert!(matches!(FileStore::load(&path), Err(StoreError::Parse { .. })));

    let store = FileStore::open(&path);
    assert_eq!(store.get(SEARCH_KEY).unwrap(), None);
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn file_store_writes_ron_map() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state.ron");

    let mut store = FileStore::open(&path);
    store.set(SEARCH_KEY, "Redux").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"search\""));
    assert!(content.contains("\"Redux\""));
}
