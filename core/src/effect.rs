//! Effect values describing the observable outputs of a reduction.

use crate::notification::Notification;
use smallvec::SmallVec;

/// The effects a single reduction may return.
pub type Effects = SmallVec<[Effect; 4]>;

/// Describes an observable output of a reduction.
///
/// Effects are NOT executed by the reducer. They are values returned from
/// [`crate::reducer::Reducer::reduce`] and executed by the store, which
/// forwards them to its subscribers. A reduction returning no effects was a
/// no-op (or touched only transient state) and triggers neither a
/// notification nor a persistence write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// No-op effect.
    None,

    /// Emit a notification to the notification stream.
    Notify(Notification),

    /// Publish a snapshot of the item collection to the snapshot stream.
    ///
    /// Exactly one `Publish` is returned per successful collection mutation,
    /// which is what bounds persistence at one write per mutation.
    Publish,
}

impl Effect {
    /// Returns `true` for [`Effect::Publish`].
    #[must_use]
    pub const fn is_publish(&self) -> bool {
        matches!(self, Self::Publish)
    }

    /// Returns the notification carried by [`Effect::Notify`], if any.
    #[must_use]
    pub const fn as_notification(&self) -> Option<&Notification> {
        match self {
            Self::Notify(notification) => Some(notification),
            Self::None | Self::Publish => None,
        }
    }
}
