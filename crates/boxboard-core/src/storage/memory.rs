//! In-memory storage implementation.

use super::{SlotStorage, StorageError, StorageResult};
use std::collections::HashMap;

/// In-memory storage for testing and ephemeral use.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStorage for MemoryStorage {
    fn put(&mut self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        self.slots.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn get(&self, key: &str) -> StorageResult<Vec<u8>> {
        self.slots
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    fn delete(&mut self, key: &str) -> StorageResult<()> {
        self.slots.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(self.slots.contains_key(key))
    }
}
