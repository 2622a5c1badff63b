//! # Todo Store Testing
//!
//! Testing utilities and helpers for the todo store.
//!
//! This crate provides:
//! - Mock implementations of environment and storage traits
//! - A fluent [`ReducerTest`] harness with Given-When-Then syntax
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```
//! use todo_store_testing::{mocks::FixedClock, ReducerTest};
//! use todo_store_core::{TodoAction, TodoEnvironment, TodoReducer, TodoState};
//! use std::sync::Arc;
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::new(Arc::new(FixedClock::default())))
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::SetPendingInput { text: "Buy milk".to_string() })
//!     .then_state(|state| assert_eq!(state.pending_input, "Buy milk"))
//!     .run();
//! ```

use chrono::{DateTime, TimeZone, Utc};


pub use reducer_test::{assertions, ReducerTest};

/// Mock implementations for testing.
pub mod mocks {
    use super::{DateTime, TimeZone, Utc};
    use chrono::Duration;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex, PoisonError};
    use todo_store_core::environment::Clock;
    use todo_store_persistence::slot::{SlotError, SlotStore};

    /// Fixed clock for deterministic tests.
    ///
    /// Always returns the same time, making creation timestamps
    /// reproducible.
    #[derive(Clone, Copy, Debug)]
    pub struct FixedClock {
        at: DateTime<Utc>,
    }

    impl FixedClock {
        /// Creates a clock frozen at `at`.
        #[must_use]
        pub const fn new(at: DateTime<Utc>) -> Self {
            Self { at }
        }
    }

    impl Default for FixedClock {
        /// Frozen at 2025-01-02 10:30:00 UTC.
        fn default() -> Self {
            Self::new(default_test_time())
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.at
        }
    }

    /// Clock that advances by a fixed step on every reading.
    ///
    /// Useful when a test needs distinct creation timestamps, e.g. to show
    /// that re-adding a deleted item never recycles the old `added_at`.
    #[derive(Debug)]
    pub struct SteppingClock {
        next: Mutex<DateTime<Utc>>,
        step: Duration,
    }

    impl SteppingClock {
        /// Creates a clock starting at `start`, advancing by `step` per call.
        #[must_use]
        pub const fn new(start: DateTime<Utc>, step: Duration) -> Self {
            Self {
                next: Mutex::new(start),
                step,
            }
        }
    }

    impl Default for SteppingClock {
        /// Starts at the [`FixedClock`] default time, stepping one second.
        fn default() -> Self {
            Self::new(default_test_time(), Duration::seconds(1))
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
            let now = *next;
            *next = now + self.step;
            now
        }
    }

    /// In-memory slot store with controllable write failures.
    ///
    /// Plays the role of the durable key-value layer in tests: fast,
    /// deterministic, and inspectable. Clones share the same slots.
    #[derive(Clone, Debug, Default)]
    pub struct MemorySlotStore {
        slots: Arc<Mutex<HashMap<String, String>>>,
        fail_writes: Arc<AtomicBool>,
    }

    impl MemorySlotStore {
        /// Creates an empty store.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes subsequent writes fail (or succeed again), to exercise
        /// best-effort persistence paths.
        pub fn set_fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }

        /// Returns the raw value of `key`, if written.
        #[must_use]
        pub fn raw(&self, key: &str) -> Option<String> {
            self.slots
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .get(key)
                .cloned()
        }
    }

    impl SlotStore for MemorySlotStore {
        fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
            Ok(self.raw(key))
        }

        fn write(&self, key: &str, value: &str) -> Result<(), SlotError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(SlotError::Io(std::io::Error::other(
                    "simulated write failure",
                )));
            }
            self.slots
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn default_test_time() -> DateTime<Utc> {
        // Unwrap-free construction of a fixed valid instant.
        Utc.timestamp_opt(1_735_813_800, 0)
            .single()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::{FixedClock, MemorySlotStore, SteppingClock};
    use todo_store_core::environment::Clock;
    use todo_store_persistence::slot::SlotStore;

    #[test]
    fn fixed_clock_is_frozen() {
        let clock = FixedClock::default();
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn stepping_clock_advances() {
        let clock = SteppingClock::default();
        let first = clock.now();
        let second = clock.now();
        assert!(second > first);
    }

    #[test]
    fn memory_slots_round_trip_and_fail_on_demand() {
        let store = MemorySlotStore::new();
        assert_eq!(store.read("todos").unwrap(), None);

        store.write("todos", "[]").unwrap();
        assert_eq!(store.read("todos").unwrap().as_deref(), Some("[]"));

        store.set_fail_writes(true);
        assert!(store.write("todos", "[1]").is_err());
        // The old value survives a failed write.
        assert_eq!(store.read("todos").unwrap().as_deref(), Some("[]"));
    }
}
