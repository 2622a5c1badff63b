//! The `Reducer` trait and the todo list reducer.
//!
//! The reducer holds every state-transition rule of the todo list: add,
//! edit, toggle, delete, and the two transient buffer assignments. It is a
//! pure synchronous function of `(state, action, environment)`; all
//! observable outputs are returned as [`Effect`] values for the store to
//! execute.

use crate::action::TodoAction;
use crate::effect::{Effect, Effects};
use crate::environment::TodoEnvironment;
use crate::error::TodoError;
use crate::item::{display_timestamp, TodoItem};
use crate::notification::Notification;
use crate::state::TodoState;
use smallvec::smallvec;

/// The Reducer trait - core abstraction for state-transition logic.
///
/// Reducers are pure functions: they validate the action, update state in
/// place, and return effect descriptions for the runtime to execute. They
/// run synchronously, never block, and never panic; precondition violations
/// are reported through the `Error` type.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State;

    /// The action type this reducer processes.
    type Action;

    /// The environment type with injected dependencies.
    type Environment;

    /// The precondition-violation error type.
    type Error: std::error::Error;

    /// Reduce an action into state changes and effects.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` when the action violates a precondition; in
    /// that case the state is left untouched.
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Result<Effects, Self::Error>;
}

/// Reducer for the todo list.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Checks that `index` addresses a live item.
    fn check_index(state: &TodoState, index: usize) -> Result<(), TodoError> {
        if index < state.items.len() {
            Ok(())
        } else {
            Err(TodoError::IndexOutOfRange {
                index,
                len: state.items.len(),
            })
        }
    }

    fn add_todo(state: &mut TodoState, env: &TodoEnvironment) -> Effects {
        if state.pending_input.trim().is_empty() {
            // Blank input: skip, not an error. The caller sees zero effects.
            return Effects::new();
        }

        // Store the text exactly as entered; trimming is validation only.
        let item = TodoItem::new(
            state.pending_input.clone(),
            display_timestamp(env.clock.now()),
        );
        state.items.insert(0, item);
        state.pending_input.clear();

        smallvec![
            Effect::Notify(Notification::success("Todo added successfully")),
            Effect::Publish,
        ]
    }

    fn commit_edit(state: &mut TodoState) -> Effects {
        let Some(index) = state.editing.index else {
            return Effects::new();
        };

        if state.editing.text.trim().is_empty() {
            // Abandoned silently; the edit stays open so the user can keep
            // typing. Pinned by a regression test.
            return Effects::new();
        }

        // A stale index that fell out of range replaces nothing, but the
        // edit is still closed and reported as committed.
        if let Some(item) = state.items.get_mut(index) {
            item.text = state.editing.text.clone();
        }
        state.editing.index = None;
        state.editing.text.clear();

        smallvec![
            Effect::Notify(Notification::success("Todo updated successfully")),
            Effect::Publish,
        ]
    }

    fn toggle_complete(state: &mut TodoState, index: usize) -> Result<Effects, TodoError> {
        Self::check_index(state, index)?;
        let completed = state.items[index].toggle();

        let message = if completed {
            "Marked as complete"
        } else {
            "Marked as incomplete"
        };
        Ok(smallvec![
            Effect::Notify(Notification::success(message)),
            Effect::Publish,
        ])
    }

    fn delete_todo(state: &mut TodoState, index: usize) -> Result<Effects, TodoError> {
        Self::check_index(state, index)?;
        state.items.remove(index);
        // A stale editing.index is deliberately not reconciled here; see the
        // stale-edit tests for the observable consequences.

        Ok(smallvec![
            Effect::Notify(Notification::success("Todo deleted successfully")),
            Effect::Publish,
        ])
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;
    type Error = TodoError;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Result<Effects, Self::Error> {
        match action {
            TodoAction::SetPendingInput { text } => {
                state.pending_input = text;
                Ok(Effects::new())
            }

            TodoAction::AddTodo => Ok(Self::add_todo(state, env)),

            TodoAction::BeginEdit { index } => {
                Self::check_index(state, index)?;
                state.editing.index = Some(index);
                state.editing.text = state.items[index].text.clone();
                Ok(Effects::new())
            }

            TodoAction::SetEditingText { text } => {
                // Meaningless without an open edit; dropped on the floor.
                if state.editing.index.is_some() {
                    state.editing.text = text;
                }
                Ok(Effects::new())
            }

            TodoAction::CommitEdit => Ok(Self::commit_edit(state)),

            TodoAction::ToggleComplete { index } => Self::toggle_complete(state, index),

            TodoAction::DeleteTodo { index } => Self::delete_todo(state, index),
        }
    }
}
