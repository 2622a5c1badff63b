//! # Todo Store Persistence
//!
//! Durable persistence for the todo collection: a named key-value slot
//! holding a UTF-8 JSON array of `{text, completed, addedAt}` objects.
//!
//! Two pieces:
//!
//! - [`SlotStore`] / [`FileSlotStore`] - the durable slot layer (one file
//!   per slot, atomic overwrite)
//! - [`PersistenceAdapter`] - JSON (de)serialization of the `todos` slot,
//!   with a fail-soft [`PersistenceAdapter::load`] and the
//!   [`spawn_autosave`] subscription task that writes every snapshot the
//!   store publishes
//!
//! ## Session wiring
//!
//! ```no_run
//! use todo_store_core::{TodoEnvironment, TodoReducer, TodoState};
//! use todo_store_persistence::{spawn_autosave, FileSlotStore, PersistenceAdapter};
//! use todo_store_runtime::Store;
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let adapter = PersistenceAdapter::new(FileSlotStore::new("./data"));
//!
//! // Load once at startup, then write the initial state back, mirroring
//! // the first render.
//! let items = adapter.load();
//! let _ = adapter.save(&items);
//!
//! let store = Store::new(
//!     TodoState::with_items(items),
//!     TodoReducer::new(),
//!     TodoEnvironment::default(),
//! );
//! let autosave = spawn_autosave(adapter, store.subscribe_snapshots());
//! # drop(autosave);
//! # }
//! ```

pub mod adapter;
pub mod slot;

pub use adapter::{spawn_autosave, PersistenceAdapter, PersistenceError, TODOS_SLOT};
pub use slot::{FileSlotStore, SlotError, SlotStore};
