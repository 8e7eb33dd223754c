//! Integration tests demonstrating how to use a blackboard WITHOUT the macro.
//!
//! This shows the manual implementation approach, which gives you full control
//! over where the board's statics live. This is useful when you need custom behavior
//! or want to understand how the macro works under the hood.
//!
//! NOTE: All tests use #[serial] because they share the same static board (MY_BOARD).
//! Running them in parallel would cause interference and non-deterministic failures.

use serial_test::serial;
use std::sync::{Arc, Mutex};
use typed_blackboard::{
    empty_board_slot, empty_trace_slot, BlackboardApi, BlackboardError, BoardStorage,
    Subscriber, TraceStorage,
};

// ============================================================================
// Manual Blackboard Implementation (Without Macro)
// ============================================================================

/// Define the static storage for our blackboard
static MY_STORAGE: BoardStorage = BoardStorage::new(empty_board_slot);

/// Define the static trace callback storage
static MY_TRACE: TraceStorage = TraceStorage::new(empty_trace_slot);

/// Our custom blackboard API implementation
struct MyBoard;

impl BlackboardApi for MyBoard {
    fn storage() -> &'static BoardStorage {
        &MY_STORAGE
    }

    fn trace() -> &'static TraceStorage {
        &MY_TRACE
    }
}

/// Constant instance of our blackboard
const MY_BOARD: MyBoard = MyBoard;

// ============================================================================
// Tests Using Manual Implementation
// ============================================================================

#[test]
#[serial]
fn test_basic_write_and_read() {
    assert!(MY_BOARD.create());

    MY_BOARD.write("answer", 42i32);
    assert_eq!(MY_BOARD.read::<i32>("answer"), 42);

    MY_BOARD.destroy();
}

#[test]
#[serial]
fn test_not_ready_without_create() {
    MY_BOARD.destroy();

    assert!(!MY_BOARD.is_ready());
    assert_eq!(
        MY_BOARD.get::<i32>("answer"),
        Err(BlackboardError::NotReady { operation: "get" })
    );
}

#[test]
#[serial]
fn test_strict_get() -> Result<(), BlackboardError> {
    MY_BOARD.create();

    MY_BOARD.write("name", "manual".to_string());
    assert_eq!(MY_BOARD.get::<String>("name")?, "manual");

    let err = MY_BOARD.get::<String>("nope").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Key 'nope' not found on the blackboard for type: alloc::string::String"
    );

    MY_BOARD.destroy();
    Ok(())
}

#[test]
#[serial]
fn test_subscribe_with_explicit_subscriber() {
    MY_BOARD.create();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let s = seen.clone();
    MY_BOARD.subscribe("k", Subscriber::<u32>::pair(move |k, v| {
        s.lock().unwrap().push(format!("{k}={v}"))
    }));

    MY_BOARD.write("k", 1u32);
    MY_BOARD.write("k", 2u32);

    assert_eq!(*seen.lock().unwrap(), vec!["k=1", "k=2"]);

    MY_BOARD.destroy();
}

#[test]
#[serial]
fn test_trace_callback() {
    MY_BOARD.create();

    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();
    MY_BOARD.set_trace_callback(move |e| events_clone.lock().unwrap().push(e.to_string()));

    MY_BOARD.write("k", true);

    MY_BOARD.clear_trace_callback();
    MY_BOARD.destroy();

    assert_eq!(
        *events.lock().unwrap(),
        vec!["write { type_name: bool, key: k, raise_callbacks: true }"]
    );
}

#[test]
#[serial]
fn test_manual_board_is_isolated_from_global() {
    MY_BOARD.create();
    typed_blackboard::destroy();

    MY_BOARD.write("k", 1i32);
    assert!(!typed_blackboard::is_ready());

    typed_blackboard::create();
    assert_eq!(typed_blackboard::read::<i32>("k"), 0);
    typed_blackboard::destroy();

    MY_BOARD.destroy();
}
