//! Integration tests for the process-wide blackboard exposed at the crate root.
//!
//! NOTE: All tests use #[serial] because they share the single global board.
//! Running them in parallel would cause interference and non-deterministic failures.

use serial_test::serial;
use std::sync::{Arc, Mutex};
use typed_blackboard as blackboard;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

#[test]
#[serial]
fn test_lifecycle() {
    blackboard::destroy();
    assert!(!blackboard::is_ready());

    assert!(blackboard::create());
    assert!(blackboard::is_ready());

    blackboard::destroy();
    blackboard::destroy();
    assert!(!blackboard::is_ready());
}

#[test]
#[serial]
fn test_write_and_read_user_values() {
    blackboard::create();

    blackboard::write("UserInteger", 7i32);
    blackboard::write("UserFloat", 2.5f32);
    blackboard::write("UserValue", "hello".to_string());
    blackboard::write(
        "UserValue",
        Color {
            r: 10,
            g: 20,
            b: 30,
            a: 255,
        },
    );

    assert_eq!(blackboard::read::<i32>("UserInteger"), 7);
    assert_eq!(blackboard::read::<f32>("UserFloat"), 2.5);
    // Same key, different types: both values survive
    assert_eq!(blackboard::read::<String>("UserValue"), "hello");
    assert_eq!(
        blackboard::read::<Color>("UserValue"),
        Color {
            r: 10,
            g: 20,
            b: 30,
            a: 255
        }
    );

    blackboard::destroy();
}

#[test]
#[serial]
fn test_destroy_drops_values() {
    blackboard::create();
    blackboard::write("k", 5i32);
    blackboard::destroy();

    blackboard::create();
    assert_eq!(blackboard::read::<i32>("k"), 0);
    assert!(!blackboard::contains::<i32>("k").unwrap());
    blackboard::destroy();
}

#[test]
#[serial]
fn test_destroy_drops_subscriptions() {
    let hits = Arc::new(Mutex::new(0));

    blackboard::create();
    let h = hits.clone();
    blackboard::subscribe_key::<i32>("k", move |_| *h.lock().unwrap() += 1);
    blackboard::destroy();

    blackboard::create();
    blackboard::write("k", 1i32);
    assert_eq!(*hits.lock().unwrap(), 0);
    blackboard::destroy();
}

#[test]
#[serial]
fn test_recreate_while_ready_starts_empty() {
    blackboard::create();
    blackboard::write("k", 1u8);

    assert!(blackboard::create());
    assert!(blackboard::get::<u8>("k").is_err());

    blackboard::destroy();
}

#[test]
#[serial]
#[should_panic(expected = "Blackboard is not ready: call create() before wipe_board")]
fn test_wipe_board_before_create_panics() {
    blackboard::destroy();
    blackboard::wipe_board(false);
}

#[test]
#[serial]
#[should_panic(expected = "Blackboard is not ready: call create() before subscribe")]
fn test_subscribe_before_create_panics() {
    blackboard::destroy();
    blackboard::subscribe_value::<i32>("k", |_| {});
}

#[test]
#[serial]
#[should_panic(expected = "Blackboard is not ready: call create() before unsubscribe_all")]
fn test_unsubscribe_all_before_create_panics() {
    blackboard::destroy();
    blackboard::unsubscribe_all("k");
}

#[test]
#[serial]
fn test_global_api_constant() {
    use typed_blackboard::BlackboardApi;

    blackboard::create();
    blackboard::global::API.write("via_api", 3i64);
    assert_eq!(blackboard::read::<i64>("via_api"), 3);
    blackboard::destroy();
}
