//! Change notification example for typed-blackboard.
//!
//! Demonstrates:
//! - The three callback shapes and the order they fire in
//! - Silent writes that skip callbacks
//! - A callback that writes back into the blackboard
//! - Unsubscribing, per type and across all types
//! - Observing every operation with a trace callback
//!
//! Run with: `cargo run --example change_notification`

use tracing_subscriber::EnvFilter;
use typed_blackboard as blackboard;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== typed-blackboard: Change Notification ===\n");

    blackboard::create();

    // -------------------------------------------------------------------------
    // 1. Subscribe with all three shapes
    // -------------------------------------------------------------------------
    println!("1. Subscribing to \"health\" (i32) with every callback shape...");

    blackboard::subscribe_key::<i32>("health", |key| println!("   [key]   {key} changed"));
    blackboard::subscribe_value::<i32>("health", |value| println!("   [value] new value {value}"));
    blackboard::subscribe_pair::<i32>("health", |key, value| {
        println!("   [pair]  {key} = {value}")
    });

    println!("\n2. Writing health = 100...");
    blackboard::write("health", 100i32);

    println!("\n3. Writing health = 90 without callbacks...");
    blackboard::write_with("health", 90i32, false);
    println!("   (nothing fired, stored value is {})", blackboard::read::<i32>("health"));

    // -------------------------------------------------------------------------
    // 2. Re-entrant callbacks
    // -------------------------------------------------------------------------
    println!("\n4. Deriving \"alive\" (bool) from \"health\" inside a callback (replaces the [value] printer)...");

    blackboard::subscribe_value::<i32>("health", |value| blackboard::write("alive", *value > 0));
    blackboard::subscribe_value::<bool>("alive", |alive| println!("   [alive] {alive}"));

    blackboard::write("health", 0i32);

    // -------------------------------------------------------------------------
    // 3. Unsubscribing
    // -------------------------------------------------------------------------
    println!("\n5. Unsubscribing i32 callbacks from \"health\"...");
    blackboard::unsubscribe::<i32>("health");
    blackboard::write("health", 50i32);
    println!("   (nothing fired)");

    println!("\n6. Unsubscribing every type from \"alive\"...");
    blackboard::unsubscribe_all("alive");
    blackboard::write("alive", true);
    println!("   (nothing fired)");

    // -------------------------------------------------------------------------
    // 4. Tracing
    // -------------------------------------------------------------------------
    println!("\n7. Tracing every operation...");

    blackboard::set_trace_callback(|event| println!("   [trace] {event}"));
    blackboard::write("health", 75i32);
    let _ = blackboard::read::<i32>("health");
    blackboard::wipe_board(true);
    blackboard::clear_trace_callback();

    blackboard::destroy();

    println!("\n=== Done ===");
}
