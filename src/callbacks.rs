//! Change-notification callbacks.
//!
//! A key can carry up to three callbacks per value type, one of each shape:
//! key-only, value-only and key+value. Callbacks are shared (`Arc`) so the board
//! can clone one out and release its inner borrow before running user code.

use std::fmt;
use std::sync::Arc;

/// Callback receiving only the key that changed.
pub type KeyCallback = Arc<dyn Fn(&str) + Send + Sync + 'static>;

/// Callback receiving only the value that was just written.
pub type ValueCallback<T> = Arc<dyn Fn(&T) + Send + Sync + 'static>;

/// Callback receiving both the key and the value that was just written.
pub type PairCallback<T> = Arc<dyn Fn(&str, &T) + Send + Sync + 'static>;

/// The three notification shapes a key can be subscribed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackShape {
    Key,
    Value,
    Pair,
}

impl fmt::Display for CallbackShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackShape::Key => write!(f, "key"),
            CallbackShape::Value => write!(f, "value"),
            CallbackShape::Pair => write!(f, "pair"),
        }
    }
}

/// A callback of one of the three shapes, ready to be attached to a key.
///
/// # Examples
///
/// ```rust
/// use typed_blackboard::{CallbackShape, Subscriber};
///
/// let on_change = Subscriber::<i32>::value(|v| println!("new value {v}"));
/// assert_eq!(on_change.shape(), CallbackShape::Value);
/// ```
pub enum Subscriber<T> {
    Key(KeyCallback),
    Value(ValueCallback<T>),
    Pair(PairCallback<T>),
}

impl<T> Subscriber<T> {
    /// Wraps a closure that only wants to know which key changed.
    pub fn key(callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Subscriber::Key(Arc::new(callback))
    }

    /// Wraps a closure that only wants the new value.
    pub fn value(callback: impl Fn(&T) + Send + Sync + 'static) -> Self {
        Subscriber::Value(Arc::new(callback))
    }

    /// Wraps a closure that wants both the key and the new value.
    pub fn pair(callback: impl Fn(&str, &T) + Send + Sync + 'static) -> Self {
        Subscriber::Pair(Arc::new(callback))
    }

    pub fn shape(&self) -> CallbackShape {
        match self {
            Subscriber::Key(_) => CallbackShape::Key,
            Subscriber::Value(_) => CallbackShape::Value,
            Subscriber::Pair(_) => CallbackShape::Pair,
        }
    }
}

impl<T> fmt::Debug for Subscriber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Subscriber").field(&self.shape()).finish()
    }
}
