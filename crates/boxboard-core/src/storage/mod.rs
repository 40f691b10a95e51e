//! Storage abstraction for persistence.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Slot not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for key-value byte storage backends.
///
/// The editor treats persistence as a synchronous byte-array get/set on a
/// named slot. A browser host backs this with local storage; native hosts
/// use files or memory.
pub trait SlotStorage {
    /// Write the bytes stored under a key, replacing any previous value.
    fn put(&mut self, key: &str, bytes: &[u8]) -> StorageResult<()>;

    /// Read the bytes stored under a key. An absent key is `Err(NotFound)`.
    fn get(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Remove a key. Removing an absent key is not an error.
    fn delete(&mut self, key: &str) -> StorageResult<()>;

    /// Check whether a key is present.
    fn exists(&self, key: &str) -> StorageResult<bool>;
}
