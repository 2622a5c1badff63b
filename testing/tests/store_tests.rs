//! Store-level behavior: action serialization, snapshot and notification
//! fan-out, and the full user scenario end to end.

use std::sync::Arc;
use todo_store_core::{
    NotificationKind, TodoAction, TodoEnvironment, TodoError, TodoReducer, TodoState,
};
use todo_store_runtime::Store;
use todo_store_testing::mocks::FixedClock;
use tokio::sync::broadcast::error::TryRecvError;
use tokio_test::assert_ok;

type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

fn test_store() -> TodoStore {
    init_tracing();
    let env = TodoEnvironment::new(Arc::new(FixedClock::default()));
    Store::new(TodoState::new(), TodoReducer::new(), env)
}

async fn send(store: &TodoStore, action: TodoAction) {
    tokio_test::assert_ok!(store.send(action).await);
}

#[tokio::test]
async fn full_user_scenario() {
    let store = test_store();

    // Start empty, add "Buy milk".
    send(
        &store,
        TodoAction::SetPendingInput {
            text: "Buy milk".to_string(),
        },
    )
    .await;
    send(&store, TodoAction::AddTodo).await;

    let added_at = store
        .state(|s| {
            assert_eq!(s.len(), 1);
            assert_eq!(s.items[0].text, "Buy milk");
            assert!(!s.items[0].completed);
            s.items[0].added_at.clone()
        })
        .await;

    // Edit to "Buy oat milk"; completed and added_at are untouched.
    send(&store, TodoAction::BeginEdit { index: 0 }).await;
    send(
        &store,
        TodoAction::SetEditingText {
            text: "Buy oat milk".to_string(),
        },
    )
    .await;
    send(&store, TodoAction::CommitEdit).await;

    store
        .state(|s| {
            assert_eq!(s.items[0].text, "Buy oat milk");
            assert!(!s.items[0].completed);
            assert_eq!(s.items[0].added_at, added_at);
        })
        .await;

    // Toggle complete.
    send(&store, TodoAction::ToggleComplete { index: 0 }).await;
    assert!(store.state(|s| s.items[0].completed).await);

    // Delete back to empty.
    send(&store, TodoAction::DeleteTodo { index: 0 }).await;
    assert!(store.state(TodoState::is_empty).await);
}

#[tokio::test]
async fn one_snapshot_per_mutation_and_none_for_transients() {
    let store = test_store();
    let mut snapshots = store.subscribe_snapshots();

    send(
        &store,
        TodoAction::SetPendingInput {
            text: "A".to_string(),
        },
    )
    .await;
    send(&store, TodoAction::AddTodo).await;
    send(&store, TodoAction::BeginEdit { index: 0 }).await;
    send(
        &store,
        TodoAction::SetEditingText {
            text: "A2".to_string(),
        },
    )
    .await;
    send(&store, TodoAction::CommitEdit).await;
    send(&store, TodoAction::ToggleComplete { index: 0 }).await;

    // Exactly three mutations: add, commit, toggle.
    for expected_text in ["A", "A2", "A2"] {
        let snapshot = snapshots.recv().await.unwrap();
        assert_eq!(snapshot[0].text, expected_text);
    }
    assert!(matches!(snapshots.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn independent_subscribers_see_every_snapshot() {
    let store = test_store();
    let mut persistence_side = store.subscribe_snapshots();
    let mut display_side = store.subscribe_snapshots();

    send(
        &store,
        TodoAction::SetPendingInput {
            text: "A".to_string(),
        },
    )
    .await;
    send(&store, TodoAction::AddTodo).await;

    assert_eq!(persistence_side.recv().await.unwrap().len(), 1);
    assert_eq!(display_side.recv().await.unwrap().len(), 1);
}

#[tokio::test]
async fn notifications_are_success_only_and_in_order() {
    let store = test_store();
    let mut notifications = store.subscribe_notifications();

    send(
        &store,
        TodoAction::SetPendingInput {
            text: "A".to_string(),
        },
    )
    .await;
    send(&store, TodoAction::AddTodo).await;
    send(&store, TodoAction::BeginEdit { index: 0 }).await;
    send(
        &store,
        TodoAction::SetEditingText {
            text: "A2".to_string(),
        },
    )
    .await;
    send(&store, TodoAction::CommitEdit).await;
    send(&store, TodoAction::ToggleComplete { index: 0 }).await;
    send(&store, TodoAction::ToggleComplete { index: 0 }).await;
    send(&store, TodoAction::DeleteTodo { index: 0 }).await;

    let expected = [
        "Todo added successfully",
        "Todo updated successfully",
        "Marked as complete",
        "Marked as incomplete",
        "Todo deleted successfully",
    ];
    for message in expected {
        let notification = notifications.recv().await.unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.message, message);
    }
    assert!(matches!(notifications.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn rejected_actions_reach_no_subscriber() {
    let store = test_store();
    let mut snapshots = store.subscribe_snapshots();
    let mut notifications = store.subscribe_notifications();

    let err = store
        .send(TodoAction::ToggleComplete { index: 9 })
        .await
        .unwrap_err();

    assert_eq!(err, TodoError::IndexOutOfRange { index: 9, len: 0 });
    assert!(matches!(snapshots.try_recv(), Err(TryRecvError::Empty)));
    assert!(matches!(notifications.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn session_starts_from_loaded_items() {
    init_tracing();
    let env = TodoEnvironment::new(Arc::new(FixedClock::default()));
    let loaded = vec![
        todo_store_core::TodoItem::new("B", "ts-b"),
        todo_store_core::TodoItem::new("A", "ts-a"),
    ];
    let store: TodoStore = Store::new(TodoState::with_items(loaded), TodoReducer::new(), env);

    // New items still go to the front of the restored list.
    send(
        &store,
        TodoAction::SetPendingInput {
            text: "C".to_string(),
        },
    )
    .await;
    send(&store, TodoAction::AddTodo).await;

    let order = store
        .state(|s| s.items.iter().map(|i| i.text.clone()).collect::<Vec<_>>())
        .await;
    assert_eq!(order, ["C", "B", "A"]);
}
