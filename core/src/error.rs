//! Error taxonomy for todo operations.

use thiserror::Error;

/// Errors returned by the todo reducer.
///
/// The taxonomy is deliberately narrow. Blank input on add or commit-edit is
/// NOT an error - those reductions succeed with zero effects. The only true
/// precondition violation is addressing the collection out of range, which
/// cannot happen through a UI enumerating the live list and is therefore
/// reported rather than silently swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// An index-addressed operation pointed outside the current collection.
    #[error("todo index {index} out of range for collection of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The collection length at the time of the call.
        len: usize,
    },
}
