//! Inputs to the todo reducer.

use serde::{Deserialize, Serialize};

/// All operations on the todo list.
///
/// A UI surface maps user events 1:1 onto these actions: typing into the add
/// input becomes `SetPendingInput`, Enter on the add input becomes `AddTodo`,
/// Enter on the edit input becomes `CommitEdit`, and so on. Actions carrying
/// an `index` address the live collection positionally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Replace the pending new-todo text buffer.
    SetPendingInput {
        /// The new buffer contents.
        text: String,
    },

    /// Submit the pending text as a new item at the front of the list.
    ///
    /// A blank (whitespace-only) buffer makes this a no-op.
    AddTodo,

    /// Open an edit on the item at `index`, seeding the edit buffer with its
    /// current text.
    BeginEdit {
        /// Position of the item to edit.
        index: usize,
    },

    /// Replace the in-progress edit buffer. No-op when no edit is open.
    SetEditingText {
        /// The new buffer contents.
        text: String,
    },

    /// Commit the in-progress edit back onto the edited item.
    ///
    /// A blank edit buffer abandons nothing: the item stays unchanged and
    /// the edit remains open.
    CommitEdit,

    /// Flip the completion flag of the item at `index`.
    ToggleComplete {
        /// Position of the item to toggle.
        index: usize,
    },

    /// Remove the item at `index`; later items shift down by one.
    DeleteTodo {
        /// Position of the item to remove.
        index: usize,
    },
}
