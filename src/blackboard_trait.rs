//! Core trait defining blackboard behavior.
//!
//! This module provides the `BlackboardApi` trait with default implementations for the
//! whole blackboard surface: lifecycle, typed reads and writes, wiping, subscriptions
//! and tracing.
//!
//! A blackboard is keyed twice: first by value type (`TypeId`), then by string key.
//! Writing an `i32` and an `f32` under the same key addresses two unrelated slots.

use std::cell::RefCell;
use std::sync::{Arc, LazyLock, Mutex};

use parking_lot::ReentrantMutex;

use crate::board::Board;
use crate::bucket::{ErasedBucket, TypedBucket};
use crate::{BlackboardError, BlackboardEvent, Subscriber};

/// Type alias for the board storage static.
///
/// The lock is re-entrant so a subscriber callback running inside `write` can call
/// back into the same blackboard on the same thread. The `RefCell` is never borrowed
/// while user callbacks run.
pub type BoardStorage = LazyLock<ReentrantMutex<RefCell<Option<Board>>>>;

/// Type alias for the user-supplied tracing callback.
pub type TraceCallback = dyn Fn(&BlackboardEvent<'_>) + Send + Sync + 'static;

/// Type alias for the trace callback storage static.
pub type TraceStorage = LazyLock<Mutex<Option<Arc<TraceCallback>>>>;

/// Initializer for a [`BoardStorage`] static. Used by `define_blackboard!`.
#[doc(hidden)]
pub fn empty_board_slot() -> ReentrantMutex<RefCell<Option<Board>>> {
    ReentrantMutex::new(RefCell::new(None))
}

/// Initializer for a [`TraceStorage`] static. Used by `define_blackboard!`.
#[doc(hidden)]
pub fn empty_trace_slot() -> Mutex<Option<Arc<TraceCallback>>> {
    Mutex::new(None)
}

fn ready_board<'a>(
    slot: &'a mut Option<Board>,
    operation: &'static str,
) -> Result<&'a mut Board, BlackboardError> {
    slot.as_mut().ok_or(BlackboardError::NotReady { operation })
}

/// Runs `f` against the existing bucket for `T`. Yields `None` once the board is gone
/// or the bucket was never created, which happens when a callback destroys the board.
fn with_bucket<T: Send + 'static, R>(
    cell: &RefCell<Option<Board>>,
    f: impl FnOnce(&TypedBucket<T>) -> Option<R>,
) -> Option<R> {
    let slot = cell.borrow();
    let bucket = slot.as_ref()?.bucket::<T>().ok().flatten()?;
    f(bucket)
}

/// The value callbacks see: whatever is stored under `key` now, or the value this
/// write stored if an earlier callback wiped it.
fn stored_or<T: Clone>(bucket: &TypedBucket<T>, key: &str, written: &T) -> T {
    bucket.get(key).unwrap_or(written).clone()
}

/// Misuse of the data-plane API is a caller bug, not a runtime condition.
#[track_caller]
fn fail(err: BlackboardError) -> ! {
    panic!("{}", err)
}

/// Core trait defining blackboard behavior.
///
/// Provides default implementations for all operations, requiring only two accessor
/// methods (`storage` and `trace`) to be implemented by the implementor.
///
/// Every operation takes the board-wide lock for its full duration, including while
/// subscriber callbacks run. Operations on unrelated types therefore serialize against
/// each other.
///
/// # Panics
///
/// All data-plane operations (`write`, `read`, `wipe_*`, `subscribe*`, `unsubscribe*`)
/// panic when the board is not ready, i.e. before `create()` or after `destroy()`.
/// Use `is_ready`, `get` or `contains` for non-panicking checks.
pub trait BlackboardApi {
    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback static.
    fn trace() -> &'static TraceStorage;

    /// Set a tracing callback for blackboard operations.
    ///
    /// The callback will be invoked for every operation, after the operation has
    /// updated the board and before any subscriber callbacks run. It is called with the
    /// trace lock released, so it may call back into the blackboard.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the trace lock is poisoned, this method automatically recovers by extracting
    /// the inner value. Trace operations are non-critical and idempotent.
    fn set_trace_callback(&self, callback: impl Fn(&BlackboardEvent<'_>) + Send + Sync + 'static) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    ///
    /// Values and subscriptions are not affected.
    fn clear_trace_callback(&self) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    /// Logs `event` and forwards it to the tracing callback, if one is set.
    fn emit_event(&self, event: &BlackboardEvent<'_>) {
        tracing::trace!(
            key = event.key(),
            type_name = event.type_name(),
            %event,
            "blackboard event"
        );

        let callback = Self::trace()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone();

        if let Some(callback) = callback {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------------------------------

    /// Access the board storage static.
    fn storage() -> &'static BoardStorage;

    /// Install a fresh, empty board.
    ///
    /// If a board already exists it is destroyed first (values and subscriptions are
    /// dropped). Returns `true` once the new board is in place.
    fn create(&self) -> bool {
        let guard = Self::storage().lock();

        let replaced = guard.borrow().is_some();
        if replaced {
            self.destroy();
        }

        *guard.borrow_mut() = Some(Board::new());
        tracing::debug!(replaced, "blackboard created");

        self.emit_event(&BlackboardEvent::Create { replaced });
        true
    }

    /// Drop every bucket and reset readiness. A no-op when the board is not ready.
    fn destroy(&self) {
        let guard = Self::storage().lock();

        let board = guard.borrow_mut().take();
        let was_ready = board.is_some();
        if let Some(board) = board {
            tracing::debug!(types = board.type_count(), "blackboard destroyed");
            drop(board);
        }

        self.emit_event(&BlackboardEvent::Destroy { was_ready });
        drop(guard);
    }

    /// Whether a board currently exists. Safe to call at any time.
    fn is_ready(&self) -> bool {
        Self::storage().lock().borrow().is_some()
    }

    // -------------------------------------------------------------------------------------------------
    // Values
    // -------------------------------------------------------------------------------------------------

    /// Write `value` under `key` and notify subscribers.
    ///
    /// Equivalent to `write_with(key, value, true)`.
    fn write<T: Clone + Send + 'static>(&self, key: &str, value: T) {
        self.write_with(key, value, true)
    }

    /// Write `value` under `key`, replacing the previous value of the same type.
    ///
    /// When `raise_callbacks` is true, the callbacks attached to `key` for type `T` run
    /// synchronously on the calling thread in the order key-only, value-only, key+value.
    /// Callbacks may call back into the blackboard. Each callback is looked up just
    /// before it runs, so one removed by an earlier callback of the same write does not
    /// fire. Value-taking callbacks receive the value stored under `key` at that moment.
    fn write_with<T: Clone + Send + 'static>(&self, key: &str, value: T, raise_callbacks: bool) {
        let guard = Self::storage().lock();

        let written = {
            let mut slot = guard.borrow_mut();
            let bucket = ready_board(&mut slot, "write")
                .and_then(|board| board.bucket_mut::<T>())
                .unwrap_or_else(|e| fail(e));

            let written = (raise_callbacks && bucket.has_callbacks(key)).then(|| value.clone());
            bucket.insert(key, value);
            written
        };

        self.emit_event(&BlackboardEvent::Write {
            type_name: std::any::type_name::<T>(),
            key,
            raise_callbacks,
        });

        let Some(written) = written else {
            return;
        };

        // Each slot is looked up right before it runs: an earlier callback may have
        // replaced, removed or destroyed what comes after it.
        if let Some(callback) = with_bucket::<T, _>(&guard, |bucket| bucket.key_callback(key)) {
            callback(key);
        }

        let value_call = with_bucket::<T, _>(&guard, |bucket| {
            Some((bucket.value_callback(key)?, stored_or(bucket, key, &written)))
        });
        if let Some((callback, value)) = value_call {
            callback(&value);
        }

        let pair_call = with_bucket::<T, _>(&guard, |bucket| {
            Some((bucket.pair_callback(key)?, stored_or(bucket, key, &written)))
        });
        if let Some((callback, value)) = pair_call {
            callback(key, &value);
        }

        drop(guard);
    }

    /// Read a clone of the value stored under `key`.
    ///
    /// Returns `T::default()` when nothing of type `T` was written under `key`, so a
    /// missing key cannot be told apart from a stored default. Use `get` or `contains`
    /// when that matters.
    fn read<T: Clone + Default + Send + 'static>(&self, key: &str) -> T {
        let guard = Self::storage().lock();

        let found = {
            let mut slot = guard.borrow_mut();
            let bucket = ready_board(&mut slot, "read")
                .and_then(|board| board.bucket_mut::<T>())
                .unwrap_or_else(|e| fail(e));
            bucket.get(key).cloned()
        };

        self.emit_event(&BlackboardEvent::Read {
            type_name: std::any::type_name::<T>(),
            key,
            found: found.is_some(),
        });

        drop(guard);
        found.unwrap_or_default()
    }

    /// Read a clone of the value stored under `key`, failing when there is none.
    ///
    /// # Errors
    ///
    /// - `NotReady` if the board was not created
    /// - `KeyNotFound` if no value of type `T` was written under `key`
    fn get<T: Clone + Send + 'static>(&self, key: &str) -> Result<T, BlackboardError> {
        let guard = Self::storage().lock();

        let found = {
            let slot = guard.borrow();
            let board = slot
                .as_ref()
                .ok_or(BlackboardError::NotReady { operation: "get" })?;
            let bucket = board.bucket::<T>()?;
            bucket.and_then(|bucket| bucket.get(key).cloned())
        };

        self.emit_event(&BlackboardEvent::Get {
            type_name: std::any::type_name::<T>(),
            key,
            found: found.is_some(),
        });

        drop(guard);
        found.ok_or_else(|| BlackboardError::KeyNotFound {
            key: key.to_owned(),
            type_name: std::any::type_name::<T>(),
        })
    }

    /// Check whether a value of type `T` is stored under `key`.
    ///
    /// # Errors
    ///
    /// - `NotReady` if the board was not created
    fn contains<T: Send + 'static>(&self, key: &str) -> Result<bool, BlackboardError> {
        let guard = Self::storage().lock();

        let found = {
            let slot = guard.borrow();
            let board = slot
                .as_ref()
                .ok_or(BlackboardError::NotReady {
                    operation: "contains",
                })?;
            let bucket = board.bucket::<T>()?;
            bucket.is_some_and(|bucket| bucket.contains(key))
        };

        self.emit_event(&BlackboardEvent::Contains {
            type_name: std::any::type_name::<T>(),
            key,
            found,
        });

        drop(guard);
        Ok(found)
    }

    /// Remove the value of type `T` stored under `key`. Subscriptions are kept.
    fn wipe_type_key<T: Send + 'static>(&self, key: &str) {
        let guard = Self::storage().lock();

        {
            let mut slot = guard.borrow_mut();
            ready_board(&mut slot, "wipe_type_key")
                .and_then(|board| board.bucket_mut::<T>())
                .unwrap_or_else(|e| fail(e))
                .wipe_key(key);
        }

        self.emit_event(&BlackboardEvent::WipeTypeKey {
            type_name: std::any::type_name::<T>(),
            key,
        });
        drop(guard);
    }

    /// Remove the value stored under `key` for every type. Subscriptions are kept.
    fn wipe_key(&self, key: &str) {
        let guard = Self::storage().lock();

        {
            let mut slot = guard.borrow_mut();
            ready_board(&mut slot, "wipe_key")
                .unwrap_or_else(|e| fail(e))
                .wipe_key(key);
        }

        self.emit_event(&BlackboardEvent::WipeKey { key });
        drop(guard);
    }

    /// Remove every value of every type, and every subscription too if `wipe_callbacks`.
    fn wipe_board(&self, wipe_callbacks: bool) {
        let guard = Self::storage().lock();

        {
            let mut slot = guard.borrow_mut();
            ready_board(&mut slot, "wipe_board")
                .unwrap_or_else(|e| fail(e))
                .wipe_board(wipe_callbacks);
        }

        self.emit_event(&BlackboardEvent::WipeBoard { wipe_callbacks });
        drop(guard);
    }

    // -------------------------------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------------------------------

    /// Attach a callback to `key` for values of type `T`.
    ///
    /// Each key holds at most one callback of each shape per type; a new callback
    /// silently replaces the previous one of the same shape.
    fn subscribe<T: Send + 'static>(&self, key: &str, subscriber: Subscriber<T>) {
        let shape = subscriber.shape();
        let guard = Self::storage().lock();

        {
            let mut slot = guard.borrow_mut();
            ready_board(&mut slot, "subscribe")
                .and_then(|board| board.bucket_mut::<T>())
                .unwrap_or_else(|e| fail(e))
                .subscribe(key, subscriber);
        }

        self.emit_event(&BlackboardEvent::Subscribe {
            type_name: std::any::type_name::<T>(),
            key,
            shape,
        });
        drop(guard);
    }

    /// Attach a callback that receives the key written for type `T`.
    fn subscribe_key<T: Send + 'static>(
        &self,
        key: &str,
        callback: impl Fn(&str) + Send + Sync + 'static,
    ) {
        self.subscribe::<T>(key, Subscriber::key(callback))
    }

    /// Attach a callback that receives the value written.
    fn subscribe_value<T: Send + 'static>(
        &self,
        key: &str,
        callback: impl Fn(&T) + Send + Sync + 'static,
    ) {
        self.subscribe(key, Subscriber::value(callback))
    }

    /// Attach a callback that receives both the key and the value written.
    fn subscribe_pair<T: Send + 'static>(
        &self,
        key: &str,
        callback: impl Fn(&str, &T) + Send + Sync + 'static,
    ) {
        self.subscribe(key, Subscriber::pair(callback))
    }

    /// Detach every callback attached to `key` for type `T`.
    fn unsubscribe<T: Send + 'static>(&self, key: &str) {
        let guard = Self::storage().lock();

        {
            let mut slot = guard.borrow_mut();
            ready_board(&mut slot, "unsubscribe")
                .and_then(|board| board.bucket_mut::<T>())
                .unwrap_or_else(|e| fail(e))
                .unsubscribe(key);
        }

        self.emit_event(&BlackboardEvent::Unsubscribe {
            type_name: std::any::type_name::<T>(),
            key,
        });
        drop(guard);
    }

    /// Detach every callback attached to `key`, for every type.
    fn unsubscribe_all(&self, key: &str) {
        let guard = Self::storage().lock();

        {
            let mut slot = guard.borrow_mut();
            ready_board(&mut slot, "unsubscribe_all")
                .unwrap_or_else(|e| fail(e))
                .unsubscribe_all(key);
        }

        self.emit_event(&BlackboardEvent::UnsubscribeAll { key });
        drop(guard);
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
