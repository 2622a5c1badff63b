//! # Todo Store Core
//!
//! Domain model, actions, and reducer for the todo store.
//!
//! This crate holds the entire state-transition logic of the todo list,
//! independent of any runtime or rendering concern:
//!
//! - **State**: [`TodoState`] - the ordered item collection plus transient
//!   input and editing buffers
//! - **Action**: [`TodoAction`] - every operation a UI surface can invoke
//! - **Reducer**: [`TodoReducer`] - pure function
//!   `(State, Action, Environment) → Result<Effects, Error>`
//! - **Effect**: [`Effect`] - observable outputs (notifications, snapshot
//!   publication) as values, executed by the store runtime
//! - **Environment**: [`Clock`] - injected dependencies
//!
//! ## Example
//!
//! ```
//! use todo_store_core::{Reducer, TodoAction, TodoEnvironment, TodoReducer, TodoState};
//!
//! let reducer = TodoReducer::new();
//! let env = TodoEnvironment::default();
//! let mut state = TodoState::new();
//!
//! reducer
//!     .reduce(
//!         &mut state,
//!         TodoAction::SetPendingInput { text: "Buy milk".to_string() },
//!         &env,
//!     )
//!     .unwrap();
//! let effects = reducer.reduce(&mut state, TodoAction::AddTodo, &env).unwrap();
//!
//! assert_eq!(state.items[0].text, "Buy milk");
//! assert_eq!(effects.len(), 2);
//! ```

pub mod action;
pub mod effect;
pub mod environment;
pub mod error;
pub mod item;
pub mod notification;
pub mod reducer;
pub mod state;

pub use action::TodoAction;
pub use effect::{Effect, Effects};
pub use environment::{Clock, SystemClock, TodoEnvironment};
pub use error::TodoError;
pub use item::{display_timestamp, TodoItem};
pub use notification::{Notification, NotificationKind};
pub use reducer::{Reducer, TodoReducer};
pub use state::{EditingState, SnapshotSource, TodoState};

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use smallvec::{smallvec, SmallVec};
