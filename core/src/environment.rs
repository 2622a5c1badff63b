//! Injected dependencies for the todo reducer.

use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Clock trait - abstracts time operations for testability.
///
/// Production code injects [`SystemClock`]; tests inject a fixed or stepping
/// clock so creation timestamps are deterministic.
pub trait Clock: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Environment dependencies for the todo reducer.
///
/// The clock is the reducer's only external dependency; it is consulted once
/// per added item to capture the creation timestamp.
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for generating creation timestamps.
    pub clock: Arc<dyn Clock>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Default for TodoEnvironment {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
