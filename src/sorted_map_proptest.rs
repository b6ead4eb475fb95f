#![cfg(test)]

// Property tests for SortedMap kept inside the crate so they can assert the
// internal invariants (sorted keys, parallel-vec alignment) after every
// operation, not just the public contract.

use crate::sorted_map::SortedMap;
use proptest::prelude::*;
use std::collections::BTreeMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum Op {
    Set(usize, i64),
    Get(usize),
    Remove(usize),
    Contains(usize),
    Clear,
}

fn op_strategy(pool: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..pool, any::<i64>()).prop_map(|(i, v)| Op::Set(i, v)),
        2 => (0..pool).prop_map(Op::Get),
        2 => (0..pool).prop_map(Op::Remove),
        1 => (0..pool).prop_map(Op::Contains),
        1 => Just(Op::Clear),
    ]
}

fn check_invariants(m: &SortedMap<String, i64>, model: &BTreeMap<String, i64>) {
    let keys = m.keys();
    let values = m.values();

    // I1/I3: strictly ascending, so no duplicates either.
    assert!(keys.windows(2).all(|w| w[0] < w[1]), "keys not strictly ascending");
    // I2/I4: same length, index-aligned.
    assert_eq!(keys.len(), values.len());
    for (k, v) in keys.iter().zip(values.iter()) {
        assert_eq!(m.get(k.as_str()), Some(*v));
    }

    // Contents match the model exactly.
    let expected: Vec<(&String, &i64)> = model.iter().collect();
    let actual: Vec<(&String, &i64)> = keys.iter().zip(values.iter()).collect();
    assert_eq!(actual, expected);
    assert_eq!(m.len(), model.len());
    assert_eq!(m.is_empty(), model.is_empty());
}

proptest! {
    // Random op sequences against a BTreeMap model. After every op the map
    // must agree with the model and hold its ordering invariants.
    #[test]
    fn prop_matches_btreemap_model(
        pool in 1usize..=12,
        ops in proptest::collection::vec(op_strategy(12), 1..200),
    ) {
        let m: SortedMap<String, i64> = SortedMap::new();
        let mut model: BTreeMap<String, i64> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Set(i, v) => {
                    let k = format!("k{:02}", i % pool);
                    let prev = m.set(k.clone(), v);
                    prop_assert_eq!(prev, model.insert(k, v));
                }
                Op::Get(i) => {
                    let k = format!("k{:02}", i % pool);
                    prop_assert_eq!(m.get(k.as_str()), model.get(&k).copied());
                }
                Op::Remove(i) => {
                    let k = format!("k{:02}", i % pool);
                    prop_assert_eq!(m.remove(k.as_str()), model.remove(&k));
                }
                Op::Contains(i) => {
                    let k = format!("k{:02}", i % pool);
                    prop_assert_eq!(m.contains_key(k.as_str()), model.contains_key(&k));
                }
                Op::Clear => {
                    m.clear();
                    model.clear();
                }
            }
            check_invariants(&m, &model);
        }
    }

    // Insert-then-remove of a fresh key restores the prior snapshots exactly,
    // for arbitrary starting contents and probe keys.
    #[test]
    fn prop_insert_remove_round_trip(
        seed in proptest::collection::btree_map(0i64..1000, any::<i64>(), 0..32),
        probe in 0i64..1000,
    ) {
        let m: SortedMap<i64, i64> = seed.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assume!(!seed.contains_key(&probe));

        let keys_before = m.keys();
        let values_before = m.values();

        m.set(probe, -1);
        prop_assert_eq!(m.len(), seed.len() + 1);
        prop_assert_eq!(m.remove(&probe), Some(-1));

        prop_assert_eq!(m.keys(), keys_before);
        prop_assert_eq!(m.values(), values_before);
    }
}
