use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;

use crate::bucket::{ErasedBucket, TypedBucket};
use crate::BlackboardError;

/// The state behind a created blackboard: one bucket per value type ever used.
///
/// A `Board` only exists between `create()` and `destroy()`. It is never handed out
/// directly; all access goes through [`BlackboardApi`](crate::BlackboardApi), which
/// holds the board-wide lock around every call.
pub struct Board {
    buckets: HashMap<TypeId, Box<dyn ErasedBucket>>,
}

impl Board {
    pub(crate) fn new() -> Self {
        Self {
            buckets: HashMap::new(),
        }
    }

    /// Returns the bucket for `T`, creating an empty one on first use.
    pub(crate) fn bucket_mut<T: Send + 'static>(
        &mut self,
    ) -> Result<&mut TypedBucket<T>, BlackboardError> {
        self.buckets
            .entry(TypeId::of::<T>())
            .or_insert_with(|| {
                tracing::debug!(type_name = std::any::type_name::<T>(), "created bucket");
                Box::new(TypedBucket::<T>::new())
            })
            .as_any_mut()
            .downcast_mut::<TypedBucket<T>>()
            .ok_or(BlackboardError::TypeMismatch {
                type_name: std::any::type_name::<T>(),
            })
    }

    /// Returns the bucket for `T` if one was ever created.
    pub(crate) fn bucket<T: Send + 'static>(
        &self,
    ) -> Result<Option<&TypedBucket<T>>, BlackboardError> {
        match self.buckets.get(&TypeId::of::<T>()) {
            Some(bucket) => bucket
                .as_any()
                .downcast_ref::<TypedBucket<T>>()
                .map(Some)
                .ok_or(BlackboardError::TypeMismatch {
                    type_name: std::any::type_name::<T>(),
                }),
            None => Ok(None),
        }
    }

    pub(crate) fn wipe_key(&mut self, key: &str) {
        for bucket in self.buckets.values_mut() {
            bucket.wipe_key(key);
        }
    }

    pub(crate) fn wipe_board(&mut self, wipe_callbacks: bool) {
        for bucket in self.buckets.values_mut() {
            bucket.wipe_all();
            if wipe_callbacks {
                bucket.clear_callbacks();
            }
        }
    }

    pub(crate) fn unsubscribe_all(&mut self, key: &str) {
        for bucket in self.buckets.values_mut() {
            bucket.unsubscribe(key);
        }
    }

    /// Number of distinct value types that have a bucket.
    pub(crate) fn type_count(&self) -> usize {
        self.buckets.len()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.buckets.values().map(|b| b.value_type_name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Subscriber;

    #[test]
    fn test_bucket_created_lazily_once_per_type() {
        let mut board = Board::new();
        assert_eq!(board.type_count(), 0);
        assert!(board.bucket::<i32>().unwrap().is_none());

        board.bucket_mut::<i32>().unwrap().insert("a", 1);
        board.bucket_mut::<i32>().unwrap().insert("b", 2);
        board.bucket_mut::<f32>().unwrap();

        assert_eq!(board.type_count(), 2);
        let ints = board.bucket::<i32>().unwrap().unwrap();
        assert_eq!(ints.get("a"), Some(&1));
        assert_eq!(ints.get("b"), Some(&2));
    }

    #[test]
    fn test_wipe_key_fans_out_across_types() {
        let mut board = Board::new();
        board.bucket_mut::<i32>().unwrap().insert("k", 1);
        board.bucket_mut::<f32>().unwrap().insert("k", 2.0);
        board.bucket_mut::<f32>().unwrap().insert("other", 3.0);

        board.wipe_key("k");

        assert!(!board.bucket::<i32>().unwrap().unwrap().contains("k"));
        let floats = board.bucket::<f32>().unwrap().unwrap();
        assert!(!floats.contains("k"));
        assert!(floats.contains("other"));
    }

    #[test]
    fn test_wipe_board_callback_flag() {
        let mut board = Board::new();
        let ints = board.bucket_mut::<i32>().unwrap();
        ints.insert("k", 1);
        ints.subscribe("k", Subscriber::key(|_| {}));

        board.wipe_board(false);
        let ints = board.bucket::<i32>().unwrap().unwrap();
        assert!(!ints.contains("k"));
        assert!(ints.has_callbacks("k"));

        board.wipe_board(true);
        assert!(!board.bucket::<i32>().unwrap().unwrap().has_callbacks("k"));
    }

    #[test]
    fn test_unsubscribe_all_fans_out_across_types() {
        let mut board = Board::new();
        board
            .bucket_mut::<i32>()
            .unwrap()
            .subscribe("k", Subscriber::value(|_| {}));
        board
            .bucket_mut::<String>()
            .unwrap()
            .subscribe("k", Subscriber::pair(|_, _| {}));

        board.unsubscribe_all("k");

        assert!(!board.bucket::<i32>().unwrap().unwrap().has_callbacks("k"));
        assert!(!board.bucket::<String>().unwrap().unwrap().has_callbacks("k"));
    }

    #[test]
    fn test_debug_lists_value_types() {
        let mut board = Board::new();
        board.bucket_mut::<u16>().unwrap();
        assert_eq!(format!("{:?}", board), "{\"u16\"}");
    }
}
