use crate::CallbackShape;

/// Events emitted by a blackboard during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`
/// and are also logged at `TRACE` level through the `tracing` facade. Keys are
/// borrowed from the operation that produced the event, so a callback that wants
/// to keep an event around should format it or copy the fields it needs.
///
/// # Examples
///
/// ```rust
/// use typed_blackboard::BlackboardEvent;
///
/// let event = BlackboardEvent::WipeKey { key: "speed" };
/// assert_eq!(event.to_string(), "wipe_key { key: speed }");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum BlackboardEvent<'a> {
    /// A fresh board was installed. `replaced` is true if a previous one was destroyed first.
    Create { replaced: bool },

    /// The board was destroyed. `was_ready` is false when the call was a no-op.
    Destroy { was_ready: bool },

    /// A value was written.
    Write {
        type_name: &'static str,
        key: &'a str,
        /// Whether subscriber callbacks were requested for this write
        raise_callbacks: bool,
    },

    /// A value was read with the default-on-missing `read`.
    Read {
        type_name: &'static str,
        key: &'a str,
        found: bool,
    },

    /// A value was requested with the strict `get`.
    Get {
        type_name: &'static str,
        key: &'a str,
        found: bool,
    },

    /// A presence check was performed.
    Contains {
        type_name: &'static str,
        key: &'a str,
        found: bool,
    },

    /// One key was wiped from one type's bucket.
    WipeTypeKey { type_name: &'static str, key: &'a str },

    /// One key was wiped from every bucket.
    WipeKey { key: &'a str },

    /// Every value was wiped, and every callback too if `wipe_callbacks` is set.
    WipeBoard { wipe_callbacks: bool },

    /// A callback was attached to a key.
    Subscribe {
        type_name: &'static str,
        key: &'a str,
        shape: CallbackShape,
    },

    /// All callbacks of one type were detached from a key.
    Unsubscribe { type_name: &'static str, key: &'a str },

    /// All callbacks of every type were detached from a key.
    UnsubscribeAll { key: &'a str },
}

impl<'a> BlackboardEvent<'a> {
    /// The key the operation addressed, if it addressed one.
    pub fn key(&self) -> Option<&'a str> {
        match self {
            BlackboardEvent::Write { key, .. }
            | BlackboardEvent::Read { key, .. }
            | BlackboardEvent::Get { key, .. }
            | BlackboardEvent::Contains { key, .. }
            | BlackboardEvent::WipeTypeKey { key, .. }
            | BlackboardEvent::WipeKey { key }
            | BlackboardEvent::Subscribe { key, .. }
            | BlackboardEvent::Unsubscribe { key, .. }
            | BlackboardEvent::UnsubscribeAll { key } => Some(*key),
            BlackboardEvent::Create { .. }
            | BlackboardEvent::Destroy { .. }
            | BlackboardEvent::WipeBoard { .. } => None,
        }
    }

    /// The value type the operation addressed, if it was a typed operation.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            BlackboardEvent::Write { type_name, .. }
            | BlackboardEvent::Read { type_name, .. }
            | BlackboardEvent::Get { type_name, .. }
            | BlackboardEvent::Contains { type_name, .. }
            | BlackboardEvent::WipeTypeKey { type_name, .. }
            | BlackboardEvent::Subscribe { type_name, .. }
            | BlackboardEvent::Unsubscribe { type_name, .. } => Some(*type_name),
            _ => None,
        }
    }
}

impl std::fmt::Display for BlackboardEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlackboardEvent::Create { replaced } => {
                write!(f, "create {{ replaced: {} }}", replaced)
            }
            BlackboardEvent::Destroy { was_ready } => {
                write!(f, "destroy {{ was_ready: {} }}", was_ready)
            }
            BlackboardEvent::Write {
                type_name,
                key,
                raise_callbacks,
            } => write!(
                f,
                "write {{ type_name: {}, key: {}, raise_callbacks: {} }}",
                type_name, key, raise_callbacks
            ),
            BlackboardEvent::Read {
                type_name,
                key,
                found,
            } => write!(
                f,
                "read {{ type_name: {}, key: {}, found: {} }}",
                type_name, key, found
            ),
            BlackboardEvent::Get {
                type_name,
                key,
                found,
            } => write!(
                f,
                "get {{ type_name: {}, key: {}, found: {} }}",
                type_name, key, found
            ),
            BlackboardEvent::Contains {
                type_name,
                key,
                found,
            } => write!(
                f,
                "contains {{ type_name: {}, key: {}, found: {} }}",
                type_name, key, found
            ),
            BlackboardEvent::WipeTypeKey { type_name, key } => {
                write!(f, "wipe_type_key {{ type_name: {}, key: {} }}", type_name, key)
            }
            BlackboardEvent::WipeKey { key } => write!(f, "wipe_key {{ key: {} }}", key),
            BlackboardEvent::WipeBoard { wipe_callbacks } => {
                write!(f, "wipe_board {{ wipe_callbacks: {} }}", wipe_callbacks)
            }
            BlackboardEvent::Subscribe {
                type_name,
                key,
                shape,
            } => write!(
                f,
                "subscribe {{ type_name: {}, key: {}, shape: {} }}",
                type_name, key, shape
            ),
            BlackboardEvent::Unsubscribe { type_name, key } => {
                write!(f, "unsubscribe {{ type_name: {}, key: {} }}", type_name, key)
            }
            BlackboardEvent::UnsubscribeAll { key } => {
                write!(f, "unsubscribe_all {{ key: {} }}", key)
            }
        }
    }
}
