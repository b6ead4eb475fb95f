//! sync-collections: generic, thread-safe collection primitives built on
//! whole-structure reader/writer locking.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: small, obviously-correct concurrent containers where every
//!   operation is linearized by one lock acquisition, so each structure
//!   can be reasoned about as if it were single-threaded.
//! - Components:
//!   - SortedMap<K, V>: key-ordered map over two parallel `Vec`s kept in
//!     strict index correspondence; binary search for lookup, ordered
//!     shift-insert/remove for mutation.
//!   - SyncList<T>: doubly-linked sequence with O(1) push/pop at both
//!     ends, insertion order only.
//!   - SyncDeque<T>: same surface as SyncList over a ring buffer.
//!   - Semaphore: counting semaphore modeled as a fixed-capacity blocking
//!     slot pool, with caller-visible cancellation.
//!
//! Constraints
//! - One `parking_lot::RwLock` per container, held for the whole operation
//!   (search plus shift), so no partially mutated state is observable.
//! - Snapshot-on-read: `keys()`/`values()`/`to_vec()` return independent
//!   copies, never borrows into locked storage.
//! - Absence is an explicit `Option::None`/`bool`, never a sentinel value;
//!   the only error type is the semaphore's cancellation.
//! - SortedMap trades O(n) insert/remove for O(log n) lookup and a flat
//!   representation; suited to read-heavy, modest-size workloads.
//!
//! Why this split?
//! - SortedMap is the only component with a non-trivial cross-mutation
//!   invariant (global key order over parallel vectors); keeping the
//!   others on std containers localizes the interesting code.
//! - The semaphore is a concurrency primitive, not a container; it shares
//!   only the "explicit outcome, no sentinel" contract.
//!
//! Notes and non-goals
//! - No range queries, cursors, persistence, or balancing in SortedMap;
//!   it is a sorted flat array, not a tree.
//! - No lock-free or lock-striped variants; that would change the
//!   consistency model callers can assume.
//! - Lock acquisition is unconditional and blocking; no timeouts.

mod deque;
mod list;
mod semaphore;
mod sorted_map;
mod sorted_map_proptest;

// Public surface
pub use deque::SyncDeque;
pub use list::SyncList;
pub use semaphore::{AcquireError, Semaphore};
pub use sorted_map::SortedMap;
