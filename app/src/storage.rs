//! Storage adapter: one keyed UTF-8 text blob, read and written whole.
//!
//! The persisted layout is a single JSON array of `{id, name, completed}`
//! objects under one fixed key. There is no version field and no migration
//! path; the list is replaced entirely on load and rewritten entirely on
//! every change.

use crate::types::TodoItem;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use std::{fs, io};
use thiserror::Error;

/// The single storage key holding the serialized todo list
pub const STORAGE_KEY: &str = "TODOS";

/// Storage adapter failures
///
/// These are not handled anywhere in the application; they propagate to
/// the binary edge and fail the invoking operation.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure while reading or writing the blob
    #[error("storage i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// Synchronous key-to-blob store consumed by the application
///
/// Implementations hold exactly one blob. `load` distinguishes an absent
/// blob from an empty one; `store` replaces any previous content and
/// completes before returning.
pub trait TodoStorage: Send + Sync {
    /// Read the blob, or `None` if nothing was ever stored
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Write the blob, replacing any previous content
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store cannot be written.
    fn store(&self, blob: &str) -> Result<(), StorageError>;
}

/// File-backed storage: the browser's key/value slot becomes one file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates storage backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this storage reads and writes
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TodoStorage for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, blob: &str) -> Result<(), StorageError> {
        fs::write(&self.path, blob)?;
        Ok(())
    }
}

/// In-memory storage for tests and examples
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blob: Mutex<Option<String>>,
}

impl MemoryStorage {
    /// Creates empty storage: `load` reports an absent blob
    #[must_use]
    pub const fn new() -> Self {
        Self {
            blob: Mutex::new(None),
        }
    }

    /// Creates storage pre-filled with a blob, as if from a previous run
    #[must_use]
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
        }
    }

    /// The currently stored blob, for observing write-through behavior
    #[must_use]
    pub fn snapshot(&self) -> Option<String> {
        self.blob
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TodoStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.snapshot())
    }

    fn store(&self, blob: &str) -> Result<(), StorageError> {
        *self.blob.lock().unwrap_or_else(PoisonError::into_inner) = Some(blob.to_string());
        Ok(())
    }
}

/// Serialize the list into the persisted blob layout
///
/// # Errors
///
/// Returns a `serde_json` error if the list cannot be serialized; with
/// plain string and boolean fields this does not happen in practice.
pub fn encode(todos: &[TodoItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string(todos)
}

/// Parse a persisted blob back into the list
///
/// No schema validation happens beyond what the layout itself demands; a
/// malformed blob is an error for the caller to treat as fatal.
///
/// # Errors
///
/// Returns a `serde_json` error if the blob is not a valid todo list.
pub fn decode(blob: &str) -> Result<Vec<TodoItem>, serde_json::Error> {
    serde_json::from_str(blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoId;
    use uuid::Uuid;

    fn item(n: u128, name: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: TodoId::from_uuid(Uuid::from_u128(n)),
            name: name.to_string(),
            completed,
        }
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let todos = vec![item(1, "Buy milk", false), item(2, "Buy eggs", true)];
        let blob = encode(&todos).unwrap();
        assert_eq!(decode(&blob).unwrap(), todos);
    }

    #[test]
    fn empty_list_encodes_to_an_empty_array() {
        assert_eq!(encode(&[]).unwrap(), "[]");
        assert_eq!(decode("[]").unwrap(), Vec::<TodoItem>::new());
    }

    #[test]
    fn decode_rejects_malformed_blobs() {
        assert!(decode("not json").is_err());
        assert!(decode("{\"oops\":true}").is_err());
        assert!(decode("[{\"name\":\"missing the rest\"}]").is_err());
    }

    #[test]
    fn file_storage_reports_absent_blob_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join(STORAGE_KEY));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn file_storage_round_trips_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join(STORAGE_KEY));

        storage.store("[]").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("[]"));

        storage.store("[1]").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn memory_storage_round_trips() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        storage.store("hello").unwrap();
        assert_eq!(storage.snapshot().as_deref(), Some("hello"));
        assert_eq!(storage.load().unwrap().as_deref(), Some("hello"));
    }
}
