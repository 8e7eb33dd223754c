//! Macros for creating blackboards.
//!
//! `define_blackboard!` produces an isolated blackboard with its own storage, lock and
//! trace slot. The crate's default process-wide board is itself defined with it.

/// Creates a complete blackboard with a single macro invocation.
///
/// The macro generates a module containing:
/// - Board storage static (hidden)
/// - Trace callback static (hidden)
/// - An `Api` struct that implements `BlackboardApi`, and an `API` constant
/// - Free functions for every operation
///
/// # Examples
///
/// ```rust
/// use typed_blackboard::define_blackboard;
///
/// define_blackboard!(sensors);
///
/// sensors::create();
///
/// sensors::write("temperature", 21.5f32);
/// sensors::write("temperature", 42u8);
///
/// assert_eq!(sensors::read::<f32>("temperature"), 21.5);
/// assert_eq!(sensors::read::<u8>("temperature"), 42);
///
/// sensors::destroy();
/// ```
///
/// # Multiple Blackboards
///
/// Each defined blackboard is isolated, including its lifecycle:
///
/// ```rust
/// use typed_blackboard::define_blackboard;
///
/// define_blackboard!(ui);
/// define_blackboard!(physics);
///
/// ui::create();
/// ui::write("frame", 1u64);
///
/// assert!(ui::is_ready());
/// assert!(!physics::is_ready());
/// ```
///
/// # Trait-Based Usage
///
/// ```rust
/// use typed_blackboard::{define_blackboard, BlackboardApi};
///
/// define_blackboard!(app);
///
/// app::API.create();
/// app::API.write("answer", 42i32);
/// assert_eq!(app::API.read::<i32>("answer"), 42);
/// ```
#[macro_export]
macro_rules! define_blackboard {
    ($name:ident) => {
        pub mod $name {
            #![allow(dead_code)]

            // Board storage (module-private)
            static STORAGE: $crate::BoardStorage =
                $crate::BoardStorage::new($crate::empty_board_slot);

            // Trace callback storage (module-private)
            static TRACE: $crate::TraceStorage =
                $crate::TraceStorage::new($crate::empty_trace_slot);

            /// Zero-sized type that implements the blackboard API.
            ///
            /// All operations are provided by the `BlackboardApi` trait's default
            /// implementations. This struct only provides access to the statics.
            pub struct Api;

            impl $crate::BlackboardApi for Api {
                fn storage() -> &'static $crate::BoardStorage {
                    &STORAGE
                }

                fn trace() -> &'static $crate::TraceStorage {
                    &TRACE
                }
            }

            /// Convenient constant for accessing the blackboard API.
            pub const API: Api = Api;

            // Free functions for ergonomic usage - they delegate to API

            /// Install a fresh, empty board, destroying any existing one first.
            pub fn create() -> bool {
                use $crate::BlackboardApi;
                API.create()
            }

            /// Drop every value and subscription. A no-op when not ready.
            pub fn destroy() {
                use $crate::BlackboardApi;
                API.destroy()
            }

            /// Whether the board currently exists.
            pub fn is_ready() -> bool {
                use $crate::BlackboardApi;
                API.is_ready()
            }

            /// Write a value and notify the key's subscribers.
            pub fn write<T: Clone + Send + 'static>(key: &str, value: T) {
                use $crate::BlackboardApi;
                API.write(key, value)
            }

            /// Write a value, notifying subscribers only if `raise_callbacks` is set.
            pub fn write_with<T: Clone + Send + 'static>(key: &str, value: T, raise_callbacks: bool) {
                use $crate::BlackboardApi;
                API.write_with(key, value, raise_callbacks)
            }

            /// Read a value, or `T::default()` when the key was never written for `T`.
            pub fn read<T: Clone + Default + Send + 'static>(key: &str) -> T {
                use $crate::BlackboardApi;
                API.read(key)
            }

            /// Read a value, failing when the key was never written for `T`.
            pub fn get<T: Clone + Send + 'static>(key: &str) -> Result<T, $crate::BlackboardError> {
                use $crate::BlackboardApi;
                API.get(key)
            }

            /// Check whether the key holds a value of type `T`.
            pub fn contains<T: Send + 'static>(key: &str) -> Result<bool, $crate::BlackboardError> {
                use $crate::BlackboardApi;
                API.contains::<T>(key)
            }

            /// Remove the value of type `T` stored under `key`.
            pub fn wipe_type_key<T: Send + 'static>(key: &str) {
                use $crate::BlackboardApi;
                API.wipe_type_key::<T>(key)
            }

            /// Remove the value stored under `key` for every type.
            pub fn wipe_key(key: &str) {
                use $crate::BlackboardApi;
                API.wipe_key(key)
            }

            /// Remove every value, and every subscription if `wipe_callbacks` is set.
            pub fn wipe_board(wipe_callbacks: bool) {
                use $crate::BlackboardApi;
                API.wipe_board(wipe_callbacks)
            }

            /// Attach a callback of any shape to `key` for type `T`.
            pub fn subscribe<T: Send + 'static>(key: &str, subscriber: $crate::Subscriber<T>) {
                use $crate::BlackboardApi;
                API.subscribe(key, subscriber)
            }

            /// Attach a key-only callback to `key` for type `T`.
            pub fn subscribe_key<T: Send + 'static>(
                key: &str,
                callback: impl Fn(&str) + Send + Sync + 'static,
            ) {
                use $crate::BlackboardApi;
                API.subscribe_key::<T>(key, callback)
            }

            /// Attach a value-only callback to `key` for type `T`.
            pub fn subscribe_value<T: Send + 'static>(
                key: &str,
                callback: impl Fn(&T) + Send + Sync + 'static,
            ) {
                use $crate::BlackboardApi;
                API.subscribe_value::<T>(key, callback)
            }

            /// Attach a key+value callback to `key` for type `T`.
            pub fn subscribe_pair<T: Send + 'static>(
                key: &str,
                callback: impl Fn(&str, &T) + Send + Sync + 'static,
            ) {
                use $crate::BlackboardApi;
                API.subscribe_pair::<T>(key, callback)
            }

            /// Detach every callback on `key` for type `T`.
            pub fn unsubscribe<T: Send + 'static>(key: &str) {
                use $crate::BlackboardApi;
                API.unsubscribe::<T>(key)
            }

            /// Detach every callback on `key` for every type.
            pub fn unsubscribe_all(key: &str) {
                use $crate::BlackboardApi;
                API.unsubscribe_all(key)
            }

            /// Set a tracing callback for blackboard operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::BlackboardEvent<'_>) + Send + Sync + 'static,
            ) {
                use $crate::BlackboardApi;
                API.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                use $crate::BlackboardApi;
                API.clear_trace_callback()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_define_blackboard_macro() {
        define_blackboard!(test_board);

        assert!(!test_board::is_ready());
        assert!(test_board::create());

        test_board::write("k", 100i32);
        assert_eq!(test_board::read::<i32>("k"), 100);
        assert!(test_board::contains::<i32>("k").unwrap());
        assert!(!test_board::contains::<f64>("k").unwrap());

        test_board::destroy();
        assert!(!test_board::is_ready());
    }

    #[test]
    fn test_multiple_blackboards() {
        define_blackboard!(board_a);
        define_blackboard!(board_b);

        board_a::create();
        board_b::create();

        board_a::write("k", 1i32);
        board_b::write("k", 2i32);

        assert_eq!(board_a::read::<i32>("k"), 1);
        assert_eq!(board_b::read::<i32>("k"), 2);

        board_a::destroy();
        assert!(board_b::is_ready());
        board_b::destroy();
    }

    #[test]
    fn test_tracing() {
        define_blackboard!(trace_test);

        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();

        trace_test::set_trace_callback(move |event| {
            events_clone.lock().unwrap().push(format!("{}", event));
        });

        trace_test::create();
        trace_test::write("k", 42i32);
        let _ = trace_test::read::<i32>("k");
        let _ = trace_test::contains::<i32>("k");

        let recorded = events.lock().unwrap();
        assert_eq!(recorded.len(), 4);
        assert!(recorded[0].contains("create"));
        assert!(recorded[1].contains("write"));
        assert!(recorded[2].contains("read"));
        assert!(recorded[3].contains("contains"));
    }
}
