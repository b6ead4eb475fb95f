//! SyncList: thread-safe doubly-linked sequence with O(1) access at both
//! ends. Insertion order is the only ordering; no sorting invariant.

use parking_lot::RwLock;
use std::collections::LinkedList;

/// Linked sequence behind a single reader/writer lock. Reads (`front`,
/// `back`, `len`, `to_vec`) take shared access and return copies; pushes and
/// pops take exclusive access for the whole operation.
pub struct SyncList<T> {
    inner: RwLock<LinkedList<T>>,
}

impl<T> SyncList<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(LinkedList::new()),
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

    /// Copy of the front element, `None` when empty.
    pub fn front(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.read().front().cloned()
    }

    /// Copy of the back element, `None` when empty.
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

    /// Front-to-back snapshot of the whole sequence, O(n). Independent of
    /// later mutation.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.read().iter().cloned().collect()
    }
}

impl<T> Default for SyncList<T> {
    fn default() -> Self {
        Self::new()
    }
}
