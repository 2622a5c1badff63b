//! State of the todo list: the ordered item collection plus the transient
//! input and editing buffers.

use crate::item::TodoItem;

/// Transient state of an in-progress edit.
///
/// `index` is `None` when no edit is open. `text` is the working buffer for
/// the item at `index` and is meaningless while `index` is `None`. Neither
/// field is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditingState {
    /// Position of the item being edited, if any.
    pub index: Option<usize>,
    /// Working buffer for the edited text.
    pub text: String,
}

/// State of the todo list.
///
/// `items` is an ordered sequence with the newest item at the front; order is
/// user-visible and never implicitly re-sorted. `pending_input` and `editing`
/// are session-transient and excluded from persistence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoState {
    /// The ordered todo collection, newest first.
    pub items: Vec<TodoItem>,
    /// Not-yet-submitted text for a new todo.
    pub pending_input: String,
    /// In-progress edit, if any.
    pub editing: EditingState,
}

impl TodoState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state seeded with an already-loaded collection, as at
    /// session start.
    #[must_use]
    pub fn with_items(items: Vec<TodoItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.items.get(index)
    }
}

/// State that can publish a point-in-time snapshot to observers.
///
/// The store broadcasts a fresh snapshot to subscribers after every mutation
/// that produced a publish effect. Observers always receive the entire
/// current value, never a diff.
pub trait SnapshotSource {
    /// The snapshot value handed to observers.
    type Snapshot: Clone + Send + 'static;

    /// Captures the current snapshot.
    fn snapshot(&self) -> Self::Snapshot;
}

impl SnapshotSource for TodoState {
    type Snapshot = Vec<TodoItem>;

    fn snapshot(&self) -> Self::Snapshot {
        self.items.clone()
    }
}
