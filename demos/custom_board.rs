//! Custom blackboard example for typed-blackboard.
//!
//! Demonstrates:
//! - Isolated blackboards with `define_blackboard!`
//! - Implementing `BlackboardApi` by hand
//! - Passing a blackboard to code that only knows the trait
//!
//! Run with: `cargo run --example custom_board`

use typed_blackboard::{
    define_blackboard, empty_board_slot, empty_trace_slot, BlackboardApi, BoardStorage,
    TraceStorage,
};

// Two isolated boards generated by the macro
define_blackboard!(world);
define_blackboard!(hud);

// A board wired up by hand
static SAVE_STORAGE: BoardStorage = BoardStorage::new(empty_board_slot);
static SAVE_TRACE: TraceStorage = TraceStorage::new(empty_trace_slot);

struct SaveGame;

impl BlackboardApi for SaveGame {
    fn storage() -> &'static BoardStorage {
        &SAVE_STORAGE
    }

    fn trace() -> &'static TraceStorage {
        &SAVE_TRACE
    }
}

/// Works against any blackboard.
fn record_score(board: &impl BlackboardApi, score: u32) {
    let best = board.read::<u32>("best");
    if score > best {
        board.write("best", score);
    }
}

fn main() {
    println!("=== typed-blackboard: Custom Boards ===\n");

    world::create();
    hud::create();
    SaveGame.create();

    // The HUD mirrors the world's score without the world knowing about it
    world::subscribe_value::<u32>("score", |score| hud::write("score_label", format!("Score: {score}")));

    for score in [10, 40, 25] {
        world::write("score", score);
        record_score(&world::API, score);
        record_score(&SaveGame, score);
    }

    println!("world best:      {}", world::read::<u32>("best"));
    println!("save-game best:  {}", SaveGame.read::<u32>("best"));
    println!("hud label:       {}", hud::read::<String>("score_label"));
    println!("hud has \"best\": {}", hud::contains::<u32>("best").unwrap_or(false));

    SaveGame.destroy();
    hud::destroy();
    world::destroy();

    println!("\n=== Done ===");
}
