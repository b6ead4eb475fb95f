//! SortedMap: flat key-ordered map with binary-search lookup, guarded by
//! a single reader/writer lock.

use core::borrow::Borrow;
use parking_lot::RwLock;

/// Parallel key/value storage. Both vectors are always the same length and
/// `keys` is strictly ascending; every mutation goes through one write-lock
/// acquisition so the pair is only ever observed in a consistent state.
struct Inner<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K: Ord, V> Inner<K, V> {
    /// Binary search over `keys`. `Ok(i)` means `keys[i]` equals the query;
    /// `Err(i)` is the insertion point that keeps `keys` ascending
    /// (`0 <= i <= len`, valid on an empty map and at both boundaries).
    fn find_index<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.keys.binary_search_by(|k| k.borrow().cmp(key))
    }
}

/// A key-ordered map over parallel `Vec`s, optimized for read-heavy,
/// modest-size workloads: O(log n) lookup, O(n) ordered insert/remove.
///
/// Not a tree: there are no range queries or balancing guarantees, just a
/// sorted flat array. All methods take `&self` and synchronize internally
/// through a `RwLock` spanning the whole operation (search plus shift), so
/// concurrent callers are linearized and never see a half-shifted state.
/// `keys()`/`values()` hand out independent copies, never views into the
/// locked storage.
pub struct SortedMap<K, V> {
    inner: RwLock<Inner<K, V>>,
}

impl<K: Ord, V> SortedMap<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                keys: Vec::new(),
                values: Vec::new(),
            }),
        }
    }

    /// Create an empty map with room for `capacity` entries in both vectors.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(Inner {
                keys: Vec::with_capacity(capacity),
                values: Vec::with_capacity(capacity),
            }),
        }
    }

    /// Upsert. If `key` is present its value is overwritten in place (the
    /// stored key is left untouched); otherwise the pair is inserted at the
    /// position that keeps the key order ascending, shifting later entries
    /// right. Returns the previous value on overwrite.
    pub fn set(&self, key: K, value: V) -> Option<V> {
        let mut inner = self.inner.write();
        match inner.find_index(&key) {
            Ok(i) => Some(core::mem::replace(&mut inner.values[i], value)),
            Err(i) => {
                inner.keys.insert(i, key);
                inner.values.insert(i, value);
                None
            }
        }
    }

    /// Look up `key` and return a copy of its value, or `None` when absent.
    /// Absence is always an explicit `None`, never a sentinel value.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
        V: Clone,
    {
        let inner = self.inner.read();
        let i = inner.find_index(key).ok()?;
        Some(inner.values[i].clone())
    }

    /// Remove `key` and return its value, or `None` (and no mutation) when
    /// the key is absent. Later entries shift left by one.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut inner = self.inner.write();
        let i = inner.find_index(key).ok()?;
        inner.keys.remove(i);
        Some(inner.values.remove(i))
    }

    /// Existence check without copying the value.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.inner.read().find_index(key).is_ok()
    }

    /// Snapshot of the keys in ascending order. Fully independent copy:
    /// mutating the map afterward never affects a returned snapshot.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.inner.read().keys.clone()
    }

    /// Snapshot of the values, index-aligned with `keys()` taken at the same
    /// instant (both are read under one lock acquisition per call).
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.inner.read().values.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().keys.is_empty()
    }

    /// Drop every entry. Subsequent lookups miss until the map is
    /// repopulated.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.keys.clear();
        inner.values.clear();
    }
}

impl<K: Ord, V> Default for SortedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SortedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = Self::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: keys come back strictly ascending regardless of insertion
    /// order, and values follow their keys.
    #[test]
    fn out_of_order_inserts_sort() {
        let m = SortedMap::new();
        m.set(3, "three");
        m.set(1, "one");
        m.set(2, "two");
        assert_eq!(m.keys(), vec![1, 2, 3]);
        assert_eq!(m.values(), vec!["one", "two", "three"]);
    }

    /// Invariant: misses on an empty map are explicit and mutation-free.
    #[test]
    fn empty_map_misses() {
        let m: SortedMap<i32, String> = SortedMap::new();
        assert_eq!(m.get(&5), None);
        assert_eq!(m.remove(&5), None);
        assert!(!m.contains_key(&5));
        assert_eq!(m.len(), 0);
        assert!(m.is_empty());
    }

    /// Invariant: equal-key set replaces the value, never grows the map.
    #[test]
    fn upsert_replaces_value() {
        let m = SortedMap::new();
        assert_eq!(m.set(2, "two"), None);
        assert_eq!(m.set(2, "deux"), Some("two"));
        assert_eq!(m.len(), 1);
        assert_eq!(m.get(&2), Some("deux"));
    }

    /// Invariant: removal shifts later entries left and leaves order intact.
    #[test]
    fn remove_middle_keeps_order() {
        let m = SortedMap::new();
        m.set("b", 2);
        m.set("a", 1);
        m.set("c", 3);
        assert_eq!(m.remove("b"), Some(2));
        assert_eq!(m.keys(), vec!["a", "c"]);
        assert_eq!(m.len(), 2);
        assert!(!m.contains_key("b"));
    }

    /// Invariant: insert-then-remove of an absent key restores the exact
    /// prior snapshots.
    #[test]
    fn insert_remove_round_trip() {
        let m = SortedMap::new();
        for (k, v) in [(10, "a"), (30, "c"), (50, "e")] {
            m.set(k, v);
        }
        let keys_before = m.keys();
        let values_before = m.values();

        m.set(20, "b");
        assert_eq!(m.keys(), vec![10, 20, 30, 50]);
        assert_eq!(m.remove(&20), Some("b"));

        assert_eq!(m.keys(), keys_before);
        assert_eq!(m.values(), values_before);
    }

    /// Invariant: insertion at both boundaries never reads out of bounds and
    /// lands at index 0 / index len.
    #[test]
    fn boundary_inserts() {
        let m = SortedMap::new();
        m.set(5, "five");
        m.set(1, "one"); // below min
        m.set(9, "nine"); // above max
        assert_eq!(m.keys(), vec![1, 5, 9]);
        assert_eq!(m.remove(&1), Some("one"));
        assert_eq!(m.remove(&9), Some("nine"));
        assert_eq!(m.keys(), vec![5]);
    }

    /// Invariant: snapshots are copies; later mutation does not leak into a
    /// previously taken snapshot.
    #[test]
    fn snapshots_are_independent() {
        let m = SortedMap::new();
        m.set(1, "one");
        let snap = m.keys();
        m.set(0, "zero");
        m.remove(&1);
        assert_eq!(snap, vec![1]);
        assert_eq!(m.keys(), vec![0]);
    }

    /// Invariant: clear empties the map and lookups miss until repopulated.
    #[test]
    fn clear_then_repopulate() {
        let m = SortedMap::new();
        m.set(1, "one");
        m.set(2, "two");
        m.clear();
        assert!(m.is_empty());
        assert_eq!(m.get(&1), None);
        m.set(1, "uno");
        assert_eq!(m.get(&1), Some("uno"));
        assert_eq!(m.len(), 1);
    }

    /// Invariant: borrowed lookup works (store `String`, query with `&str`).
    #[test]
    fn borrowed_lookup_with_str() {
        let m: SortedMap<String, i32> = SortedMap::new();
        m.set("hello".to_string(), 1);
        assert!(m.contains_key("hello"));
        assert_eq!(m.get("hello"), Some(1));
        assert!(!m.contains_key("world"));
        assert_eq!(m.remove("hello"), Some(1));
        assert!(m.is_empty());
    }

    /// Invariant: index alignment — `get(keys()[i]) == values()[i]` for all i.
    #[test]
    fn keys_values_index_aligned() {
        let m = SortedMap::new();
        for k in [7, 3, 9, 1, 5] {
            m.set(k, k * 10);
        }
        let keys = m.keys();
        let values = m.values();
        assert_eq!(keys.len(), values.len());
        for (k, v) in keys.iter().zip(values.iter()) {
            assert_eq!(m.get(k), Some(*v));
        }
    }

    /// Invariant: FromIterator applies upsert semantics, last value wins.
    #[test]
    fn from_iter_upserts() {
        let m: SortedMap<i32, &str> =
            [(2, "two"), (1, "one"), (2, "deux")].into_iter().collect();
        assert_eq!(m.len(), 2);
        assert_eq!(m.get(&2), Some("deux"));
        assert_eq!(m.keys(), vec![1, 2]);
    }
}
