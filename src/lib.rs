//! # Typed Blackboard
//!
//! A thread-safe, in-process key-value blackboard indexed by value type, with per-key
//! change notification.
//!
//! Any component can publish a value under a string key and any other component can
//! read the latest value by key and expected type, or subscribe to be told when it
//! changes. Values of unrelated types never share storage: writing an `i32` and a
//! `String` under the same key fills two independent slots.
//!
//! ## Quick Start
//!
//! ```rust
//! use typed_blackboard as blackboard;
//!
//! blackboard::create();
//!
//! blackboard::subscribe_value::<u32>("score", |score| println!("score is now {score}"));
//! blackboard::write("score", 10u32);
//!
//! assert_eq!(blackboard::read::<u32>("score"), 10);
//! assert_eq!(blackboard::read::<u32>("never-written"), 0);
//!
//! blackboard::destroy();
//! ```
//!
//! ## Features
//!
//! - **Explicit lifecycle**: nothing works until `create()`; `destroy()` drops everything
//! - **Type-indexed**: one bucket per value type, created lazily on first use
//! - **Change notification**: key-only, value-only and key+value callbacks per key
//! - **Re-entrant**: callbacks may read and write the blackboard they were raised from
//! - **Isolated boards**: `define_blackboard!` creates independent blackboards
//! - **Tracing support**: `tracing` events plus an optional trace callback
//!
//! ## Main Functions
//!
//! - [`create`] / [`destroy`] / [`is_ready`] - lifecycle
//! - [`write`] / [`write_with`] - store a value, optionally raising callbacks
//! - [`read`] - read a value, defaulting when absent
//! - [`get`] / [`contains`] - strict reads that tell absence apart from a default
//! - [`wipe_type_key`] / [`wipe_key`] / [`wipe_board`] - remove values
//! - [`subscribe`] / [`unsubscribe`] / [`unsubscribe_all`] - manage callbacks
//! - [`set_trace_callback`] - observe every operation

#[macro_use]
mod macros;

mod blackboard_error;
mod blackboard_event;
mod blackboard_trait;
mod board;
mod bucket;
mod callbacks;

pub use blackboard_error::BlackboardError;
pub use blackboard_event::BlackboardEvent;
pub use blackboard_trait::{BlackboardApi, BoardStorage, TraceCallback, TraceStorage};
#[doc(hidden)]
pub use blackboard_trait::{empty_board_slot, empty_trace_slot};
pub use board::Board;
pub use callbacks::{CallbackShape, KeyCallback, PairCallback, Subscriber, ValueCallback};

define_blackboard!(global);

// The process-wide blackboard
pub use global::{
    clear_trace_callback, contains, create, destroy, get, is_ready, read, set_trace_callback,
    subscribe, subscribe_key, subscribe_pair, subscribe_value, unsubscribe, unsubscribe_all,
    wipe_board, wipe_key, wipe_type_key, write, write_with,
};
