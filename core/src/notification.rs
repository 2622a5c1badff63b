//! Notification values emitted towards an external display collaborator.

/// Severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    /// An operation completed.
    Success,
    /// An operation failed.
    ///
    /// Supported by the sink, but the reducer currently only ever emits
    /// `Success` notifications.
    Error,
}

/// A transient user-facing message.
///
/// The store broadcasts these to whatever display layer subscribes; it never
/// waits on delivery or display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Severity of the message.
    pub kind: NotificationKind,
    /// Human-readable message text.
    pub message: String,
}

impl Notification {
    /// Creates a success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    /// Creates an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}
