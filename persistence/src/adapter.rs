//! The persistence adapter: JSON serialization of the item collection into
//! the `todos` slot, plus the autosave subscription task.

use crate::slot::{SlotError, SlotStore};
use thiserror::Error;
use todo_store_core::item::TodoItem;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Name of the durable slot holding the serialized collection.
pub const TODOS_SLOT: &str = "todos";

/// Errors from saving the collection.
///
/// Load failures never surface as errors - [`PersistenceAdapter::load`]
/// fails soft to an empty collection.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The slot layer rejected the write.
    #[error(transparent)]
    Slot(#[from] SlotError),

    /// The collection could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Serializes the todo collection to the `todos` slot and loads it back at
/// session start.
///
/// The persisted value is a UTF-8 JSON array of `{text, completed, addedAt}`
/// objects in display order (newest first). Every save overwrites the whole
/// slot with the entire current snapshot; there is no diffing, transaction,
/// retry, or rollback.
#[derive(Clone, Debug)]
pub struct PersistenceAdapter<S> {
    slots: S,
}

impl<S: SlotStore> PersistenceAdapter<S> {
    /// Creates an adapter over the given slot store.
    #[must_use]
    pub const fn new(slots: S) -> Self {
        Self { slots }
    }

    /// Loads the persisted collection.
    ///
    /// Fails soft: an absent slot, an unreadable slot, or unparsable content
    /// all produce an empty collection. The failure is logged, never raised -
    /// a corrupt slot must not prevent the session from starting.
    #[must_use]
    pub fn load(&self) -> Vec<TodoItem> {
        let raw = match self.slots.read(TODOS_SLOT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read todos slot, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(error = %err, "todos slot held unparsable JSON, starting empty");
                Vec::new()
            }
        }
    }

    /// Serializes `items` and overwrites the `todos` slot.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when serialization or the slot write
    /// fails. The in-memory state stays authoritative either way; callers on
    /// the autosave path log and continue.
    pub fn save(&self, items: &[TodoItem]) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(items)?;
        self.slots.write(TODOS_SLOT, &json)?;
        Ok(())
    }
}

/// Spawns the autosave task: writes every snapshot received on `snapshots`
/// to the `todos` slot.
///
/// The task runs until the snapshot channel closes (all store handles
/// dropped). Failed writes are logged and the task keeps going; a lagged
/// receiver skips the missed snapshots and persists the next full one, which
/// is safe because every snapshot carries the entire collection.
///
/// Callers wanting the first-render write of the initial state perform one
/// [`PersistenceAdapter::save`] of the loaded collection before sending any
/// action.
pub fn spawn_autosave<S>(
    adapter: PersistenceAdapter<S>,
    mut snapshots: broadcast::Receiver<Vec<TodoItem>>,
) -> JoinHandle<()>
where
    S: SlotStore + 'static,
{
    tokio::spawn(async move {
        loop {
            match snapshots.recv().await {
                Ok(items) => {
                    if let Err(err) = adapter.save(&items) {
                        tracing::warn!(error = %err, "autosave failed, keeping in-memory state");
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "autosave lagged behind snapshot stream");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        tracing::debug!("snapshot stream closed, autosave task exiting");
    })
}
