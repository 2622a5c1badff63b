//! The durable key-value slot layer.
//!
//! A slot store is the local, origin-scoped key-value layer the todo list
//! persists into: named UTF-8 string slots surviving across sessions on the
//! same device. The trait is deliberately minimal - read a slot, overwrite a
//! slot - because that is the entire contract the adapter needs.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from the slot layer.
#[derive(Error, Debug)]
pub enum SlotError {
    /// Reading or writing the underlying storage failed.
    #[error("slot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored bytes were not valid UTF-8.
    #[error("slot {key} holds invalid UTF-8")]
    InvalidUtf8 {
        /// The slot that held the bad value.
        key: String,
    },
}

/// A named durable string slot store.
///
/// Implementations must be `Send + Sync`; the autosave task writes from a
/// background tokio task.
pub trait SlotStore: Send + Sync {
    /// Reads the value of `key`, or `None` when the slot has never been
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] when the storage layer cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, SlotError>;

    /// Overwrites the value of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] when the value cannot be written durably.
    fn write(&self, key: &str, value: &str) -> Result<(), SlotError>;
}

/// Slot store backed by one file per key under a base directory.
///
/// Writes are atomic: the value lands in a temporary file in the same
/// directory and is renamed over the slot file, so a crashed write never
/// leaves a half-written slot behind.
#[derive(Clone, Debug)]
pub struct FileSlotStore {
    base_dir: PathBuf,
}

impl FileSlotStore {
    /// Creates a store rooted at `base_dir`. The directory is created on
    /// first write, not here.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
        match fs::read(self.slot_path(key)) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(value) => Ok(Some(value)),
                Err(_) => Err(SlotError::InvalidUtf8 {
                    key: key.to_string(),
                }),
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SlotError> {
        fs::create_dir_all(&self.base_dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.base_dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.persist(self.slot_path(key)).map_err(|err| err.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_slot_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSlotStore::new(dir.path());
        assert!(store.read("todos").unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSlotStore::new(dir.path());

        store.write("todos", "[]").unwrap();
        assert_eq!(store.read("todos").unwrap().as_deref(), Some("[]"));

        store.write("todos", r#"[{"text":"a"}]"#).unwrap();
        assert_eq!(
            store.read("todos").unwrap().as_deref(),
            Some(r#"[{"text":"a"}]"#)
        );
    }

    #[test]
    fn keys_are_independent_slots() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSlotStore::new(dir.path());

        store.write("todos", "[1]").unwrap();
        store.write("other", "[2]").unwrap();

        assert_eq!(store.read("todos").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.read("other").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn invalid_utf8_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSlotStore::new(dir.path());
        fs::write(dir.path().join("todos.json"), [0xff, 0xfe]).unwrap();

        assert!(matches!(
            store.read("todos"),
            Err(SlotError::InvalidUtf8 { .. })
        ));
    }
}
