//! SyncDeque: thread-safe double-ended queue over a ring buffer. Same
//! surface as [`SyncList`](crate::SyncList), different backing storage.

use parking_lot::RwLock;
use std::collections::VecDeque;

/// Double-ended queue behind a single reader/writer lock, with O(1)
/// amortized access at both ends and contiguous storage.
pub struct SyncDeque<T> {
    inner: RwLock<VecDeque<T>>,
}

impl<T> SyncDeque<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(VecDeque::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn push_front(&self, value: T) {
        self.inner.write().push_front(value);
    }

    pub fn push_back(&self, value: T) {
        self.inner.write().push_back(value);
    }

    pub fn pop_front(&self) -> Option<T> {
        self.inner.write().pop_front()
    }

    pub fn pop_back(&self) -> Option<T> {
        self.inner.write().pop_back()
    }

    pub fn front(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.read().front().cloned()
    }

    pub fn back(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.read().back().cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Front-to-back snapshot, O(n), independent of later mutation.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.read().iter().cloned().collect()
    }
}

impl<T> Default for SyncDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}
