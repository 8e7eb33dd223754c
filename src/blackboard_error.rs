/// Errors reported by the non-panicking blackboard operations.
///
/// The data-plane operations (`write`, `read`, `wipe_*`, `subscribe`, ...) treat a
/// board that was never created as a caller bug and panic with this error's
/// `Display` text instead of returning it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BlackboardError {
    /// The board was used before `create()` or after `destroy()`.
    #[error("Blackboard is not ready: call create() before {operation}")]
    NotReady { operation: &'static str },

    /// No value of the requested type was written under the key.
    #[error("Key '{key}' not found on the blackboard for type: {type_name}")]
    KeyNotFound { key: String, type_name: &'static str },

    /// A bucket was stored under the wrong `TypeId`.
    #[error("Type mismatch on the blackboard for type: {type_name}")]
    TypeMismatch { type_name: &'static str },
}
