//! Hacker stories engine: search transport, request orchestration and durable state.
mod engine;
mod fetch;
mod field;
mod persist;
mod response;
mod store;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use field::PersistedField;
pub use persist::{ensure_dir, AtomicFileWriter, PersistError};
pub use response::decode_search_response;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, DEFAULT_STATE_FILE};
pub use types::{EngineEvent, FailureKind, FetchError, RequestId};
