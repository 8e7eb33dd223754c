//! Per-type storage.
//!
//! Every value type used with a board gets exactly one [`TypedBucket`]. The board only
//! sees buckets through the object-safe [`ErasedBucket`] trait, which carries the
//! operations that do not need to know `T` (the untyped fan-out operations), plus the
//! `Any` accessors used for the checked downcast in typed entry points.

use std::any::Any;
use std::collections::HashMap;

use crate::callbacks::{KeyCallback, PairCallback, Subscriber, ValueCallback};

/// Type-independent view of a bucket.
pub(crate) trait ErasedBucket: Send {
    /// Removes the value stored under `key`, callbacks are kept.
    fn wipe_key(&mut self, key: &str);

    /// Removes every value, callbacks are kept.
    fn wipe_all(&mut self);

    /// Removes all three callback shapes attached to `key`.
    fn unsubscribe(&mut self, key: &str);

    /// Removes every callback of every shape.
    fn clear_callbacks(&mut self);

    fn value_type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Values and callbacks for one value type, keyed by string.
///
/// Values and callbacks live in independent maps: a key may hold a value with no
/// subscriber, or subscribers with no value yet.
pub(crate) struct TypedBucket<T> {
    values: HashMap<String, T>,
    key_callbacks: HashMap<String, KeyCallback>,
    value_callbacks: HashMap<String, ValueCallback<T>>,
    pair_callbacks: HashMap<String, PairCallback<T>>,
}

impl<T> TypedBucket<T> {
    pub(crate) fn new() -> Self {
        Self {
            values: HashMap::new(),
            key_callbacks: HashMap::new(),
            value_callbacks: HashMap::new(),
            pair_callbacks: HashMap::new(),
        }
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub(crate) fn insert(&mut self, key: &str, value: T) -> Option<T> {
        self.values.insert(key.to_owned(), value)
    }

    pub(crate) fn get(&self, key: &str) -> Option<&T> {
        self.values.get(key)
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Attaches a callback, replacing any previous callback of the same shape on `key`.
    pub(crate) fn subscribe(&mut self, key: &str, subscriber: Subscriber<T>) {
        let key = key.to_owned();
        match subscriber {
            Subscriber::Key(callback) => {
                self.key_callbacks.insert(key, callback);
            }
            Subscriber::Value(callback) => {
                self.value_callbacks.insert(key, callback);
            }
            Subscriber::Pair(callback) => {
                self.pair_callbacks.insert(key, callback);
            }
        }
    }

    pub(crate) fn has_callbacks(&self, key: &str) -> bool {
        self.key_callbacks.contains_key(key)
            || self.value_callbacks.contains_key(key)
            || self.pair_callbacks.contains_key(key)
    }

    pub(crate) fn key_callback(&self, key: &str) -> Option<KeyCallback> {
        self.key_callbacks.get(key).cloned()
    }

    pub(crate) fn value_callback(&self, key: &str) -> Option<ValueCallback<T>> {
        self.value_callbacks.get(key).cloned()
    }

    pub(crate) fn pair_callback(&self, key: &str) -> Option<PairCallback<T>> {
        self.pair_callbacks.get(key).cloned()
    }

    #[cfg(test)]
    fn callback_count(&self) -> usize {
        self.key_callbacks.len() + self.value_callbacks.len() + self.pair_callbacks.len()
    }
}

impl<T: Send + 'static> ErasedBucket for TypedBucket<T> {
    fn wipe_key(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn wipe_all(&mut self) {
        self.values.clear();
    }

    fn unsubscribe(&mut self, key: &str) {
        self.key_callbacks.remove(key);
        self.value_callbacks.remove(key);
        self.pair_callbacks.remove(key);
    }

    fn clear_callbacks(&mut self) {
        self.key_callbacks.clear();
        self.value_callbacks.clear();
        self.pair_callbacks.clear();
    }

    fn value_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
