//! Basic usage example for typed-blackboard.
//!
//! Demonstrates:
//! - The explicit create/destroy lifecycle
//! - Writing primitives, strings and custom structs
//! - Reading with `read()` (defaults when absent) and `get()` (errors when absent)
//! - Same key, different types
//! - Wiping values
//!
//! Run with: `RUST_LOG=typed_blackboard=debug cargo run --example basic_usage`

use tracing_subscriber::EnvFilter;
use typed_blackboard as blackboard;

#[derive(Debug, Clone, Default, PartialEq)]
struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== typed-blackboard: Basic Usage ===\n");

    // -------------------------------------------------------------------------
    // 1. Create the blackboard
    // -------------------------------------------------------------------------
    println!("1. Creating the blackboard...");

    if !blackboard::create() {
        eprintln!("   The blackboard failed to create");
        return;
    }

    println!("   Ready: {}", blackboard::is_ready());

    // -------------------------------------------------------------------------
    // 2. Write values
    // -------------------------------------------------------------------------
    println!("\n2. Writing values...");

    blackboard::write("UserInteger", 42i32);
    blackboard::write("UserFloat", 3.5f32);
    blackboard::write("UserValue", "Hello, blackboard!".to_string());
    blackboard::write(
        "UserValue",
        Color {
            r: 255,
            g: 128,
            b: 0,
            a: 255,
        },
    );

    println!("   Wrote: i32, f32, and both a String and a Color under \"UserValue\"");

    // -------------------------------------------------------------------------
    // 3. Read them back
    // -------------------------------------------------------------------------
    println!("\n3. Reading values...");

    println!("   UserInteger as i32:   {}", blackboard::read::<i32>("UserInteger"));
    println!("   UserFloat as f32:     {}", blackboard::read::<f32>("UserFloat"));
    println!("   UserValue as String:  {}", blackboard::read::<String>("UserValue"));
    println!("   UserValue as Color:   {:?}", blackboard::read::<Color>("UserValue"));

    // -------------------------------------------------------------------------
    // 4. Missing keys
    // -------------------------------------------------------------------------
    println!("\n4. Reading keys that were never written...");

    println!("   read::<i32>(\"nope\") = {}", blackboard::read::<i32>("nope"));
    match blackboard::get::<i32>("nope") {
        Ok(value) => println!("   get::<i32>(\"nope\") = {value}"),
        Err(e) => println!("   get::<i32>(\"nope\") failed: {e}"),
    }

    // -------------------------------------------------------------------------
    // 5. Wiping
    // -------------------------------------------------------------------------
    println!("\n5. Wiping values...");

    blackboard::wipe_type_key::<String>("UserValue");
    println!(
        "   After wipe_type_key::<String>: String present = {}, Color present = {}",
        blackboard::contains::<String>("UserValue").unwrap_or(false),
        blackboard::contains::<Color>("UserValue").unwrap_or(false),
    );

    blackboard::wipe_key("UserValue");
    println!(
        "   After wipe_key: Color present = {}",
        blackboard::contains::<Color>("UserValue").unwrap_or(false),
    );

    blackboard::wipe_board(false);
    println!(
        "   After wipe_board: UserInteger = {}",
        blackboard::read::<i32>("UserInteger")
    );

    // -------------------------------------------------------------------------
    // 6. Destroy
    // -------------------------------------------------------------------------
    println!("\n6. Destroying the blackboard...");

    blackboard::destroy();
    println!("   Ready: {}", blackboard::is_ready());

    println!("\n=== Done ===");
}
