//! # Todo Store Runtime
//!
//! The [`Store`]: the single explicitly-owned state object of a session.
//!
//! The store owns the state behind a [`tokio::sync::RwLock`], funnels every
//! action through the reducer (serializing writers at the lock), and executes
//! the returned effects by broadcasting to subscribers:
//!
//! - **snapshots** - the full item collection after every mutation, observed
//!   by the persistence adapter and any display layer independently
//! - **notifications** - transient user-facing messages for whatever sink
//!   subscribes
//!
//! The store never waits on its subscribers; a broadcast with no live
//! receivers is dropped.
//!
//! ## Example
//!
//! ```
//! use todo_store_core::{TodoAction, TodoEnvironment, TodoReducer, TodoState};
//! use todo_store_runtime::Store;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = Store::new(TodoState::new(), TodoReducer::new(), TodoEnvironment::default());
//! let mut snapshots = store.subscribe_snapshots();
//!
//! store
//!     .send(TodoAction::SetPendingInput { text: "Buy milk".to_string() })
//!     .await
//!     .unwrap();
//! store.send(TodoAction::AddTodo).await.unwrap();
//!
//! let items = snapshots.recv().await.unwrap();
//! assert_eq!(items[0].text, "Buy milk");
//! # }
//! ```

use std::sync::Arc;
use todo_store_core::effect::{Effect, Effects};
use todo_store_core::notification::Notification;
use todo_store_core::reducer::Reducer;
use todo_store_core::state::SnapshotSource;
use tokio::sync::{broadcast, RwLock};

/// Default capacity of the snapshot and notification broadcast channels.
const DEFAULT_BROADCAST_CAPACITY: usize = 16;

/// The Store - owned state plus observer subscriptions.
///
/// The Store manages:
/// 1. State (behind `RwLock`, one logical writer at a time)
/// 2. Reducer (state-transition logic)
/// 3. Environment (injected dependencies)
/// 4. Effect execution (broadcast fan-out to subscribers)
///
/// # Type Parameters
///
/// - `S`: State type (must expose a snapshot for observers)
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    S: SnapshotSource,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
    snapshot_tx: broadcast::Sender<S::Snapshot>,
    notification_tx: broadcast::Sender<Notification>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
    S: SnapshotSource + Send + Sync + 'static,
    A: Send + 'static,
    E: Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment.
    ///
    /// The broadcast channels buffer 16 values; increase with
    /// [`Store::with_broadcast_capacity`] if observers frequently lag.
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_broadcast_capacity(initial_state, reducer, environment, DEFAULT_BROADCAST_CAPACITY)
    }

    /// Create a new store with a custom broadcast channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero (broadcast channels require a non-zero
    /// buffer).
    #[must_use]
    pub fn with_broadcast_capacity(
        initial_state: S,
        reducer: R,
        environment: E,
        capacity: usize,
    ) -> Self {
        let (snapshot_tx, _) = broadcast::channel(capacity);
        let (notification_tx, _) = broadcast::channel(capacity);

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
            snapshot_tx,
            notification_tx,
        }
    }

    /// Send an action to the store.
    ///
    /// This is the primary way to interact with the store:
    /// 1. Acquires the write lock on state
    /// 2. Calls the reducer with `(state, action, environment)`
    /// 3. Executes the returned effects by broadcasting to subscribers
    ///
    /// Concurrent `send` calls serialize at the reducer; snapshots are
    /// broadcast in commit order.
    ///
    /// # Returns
    ///
    /// The effects that were executed. An empty list means the action was a
    /// no-op (blank input) or touched only transient state; in either case
    /// nothing was broadcast and nothing will be persisted.
    ///
    /// # Errors
    ///
    /// Propagates the reducer's precondition violations (for the todo
    /// reducer, an out-of-range index). The state is untouched on error.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> Result<Effects, R::Error> {
        let mut state = self.state.write().await;

        let effects = match self.reducer.reduce(&mut state, action, &self.environment) {
            Ok(effects) => effects,
            Err(err) => {
                tracing::error!(error = %err, "action rejected");
                return Err(err);
            }
        };

        // Broadcast while still holding the lock so observers see snapshots
        // in commit order. Sends are non-blocking; missing receivers are
        // fine.
        for effect in &effects {
            match effect {
                Effect::None => {}
                Effect::Notify(notification) => {
                    tracing::debug!(message = %notification.message, "notify");
                    let _ = self.notification_tx.send(notification.clone());
                }
                Effect::Publish => {
                    let _ = self.snapshot_tx.send(state.snapshot());
                }
            }
        }

        Ok(effects)
    }

    /// Read the current state through a closure, under the read lock.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let len = store.state(|s| s.items.len()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Subscribe to collection snapshots.
    ///
    /// Every mutation that changed the collection broadcasts the entire new
    /// collection to all snapshot subscribers.
    #[must_use]
    pub fn subscribe_snapshots(&self) -> broadcast::Receiver<S::Snapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Subscribe to notifications.
    #[must_use]
    pub fn subscribe_notifications(&self) -> broadcast::Receiver<Notification> {
        self.notification_tx.subscribe()
    }
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    S: SnapshotSource,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
            snapshot_tx: self.snapshot_tx.clone(),
            notification_tx: self.notification_tx.clone(),
        }
    }
}
