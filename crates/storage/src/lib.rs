//! `syncstudy-storage` — durable key-value persistence boundary.
//!
//! The session layer persists a small tuple of strings across restarts.
//! This crate defines the store abstraction and two implementations: an
//! in-memory map (tests, storage-disabled degradation) and a JSON file
//! store (the durable default).

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::InMemoryStore;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage payload corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Origin-scoped key-value store surviving restarts.
///
/// Contract:
/// - `get` of an absent key is `Ok(None)`, never an error.
/// - `remove` of an absent key is a no-op.
/// - Writes are last-write-wins across concurrent users of the same
///   backing store; no cross-process coordination is provided.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
