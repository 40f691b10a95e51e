//! File-based storage implementation for native platforms.

use super::{SlotStorage, StorageError, StorageResult};
use std::fs;
use std::path::PathBuf;

/// File-based storage for native platforms.
///
/// Stores each slot as a JSON file in a base directory.
pub struct FileStorage {
    /// Base directory for slot storage.
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with the given base directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create file storage in the default location.
    ///
    /// On Unix: `~/.local/share/boxboard/slots/`
    /// On Windows: `%LOCALAPPDATA%\boxboard\slots\`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;

        let path = base.join("boxboard").join("slots");
        Self::new(path)
    }

    /// Get the file path for a slot key.
    fn slot_path(&self, key: &str) -> PathBuf {
        // Sanitize the key to be safe for filenames
        let safe_key: String = key
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_path.join(format!("{}.json", safe_key))
    }

    /// Get the base path.
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }
}

impl SlotStorage for FileStorage {
    fn put(&mut self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        let path = self.slot_path(key);
        fs::write(&path, bytes)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    fn get(&self, key: &str) -> StorageResult<Vec<u8>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Err(StorageError::NotFound(key.to_string()));
        }
        fs::read(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn delete(&mut self, key: &str) -> StorageResult<()> {
        let path = self.slot_path(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                StorageError::Io(format!("Failed to delete {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }

    fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(self.slot_path(key).exists())
    }
}
