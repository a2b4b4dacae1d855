// Wrapper property tests (consolidated).
//
// Property 1: read delegation. For any contents, every read through a
//  ReadOnly wrapper equals the same read on the inner map.
//
// Property 2: rejection is total. For any sequence of attempted mutations
//  through a ReadOnly wrapper, every call fails and the contents afterwards
//  equal the contents before.
//
// Property 3: navigation agrees with a std BTreeMap reference model, with
//  the probes derived from the model by definition.
use std::collections::BTreeMap;

use proptest::prelude::*;

use scalarmap::{read_only, OpenHashMap, ScalarMap, SortedScalarMap, TreeMap};

proptest! {
    // Property 1: reads through the wrapper delegate exactly.
    #[test]
    fn prop_read_only_delegates_reads(
        pairs in proptest::collection::vec((0u8..32u8, -100i32..100i32), 0..64),
        probes in proptest::collection::vec(0u8..40u8, 1..32),
        drv in -5i32..5i32,
    ) {
        let mut m: OpenHashMap<u8, i32> = OpenHashMap::with_default_return_value(drv);
        for (k, v) in pairs {
            m.put(k, v).unwrap();
        }

        let u = read_only(&m);
        prop_assert_eq!(u.len(), m.len());
        prop_assert_eq!(u.default_return_value(), drv);
        for k in probes {
            prop_assert_eq!(u.get_opt(k), m.get_opt(k));
            prop_assert_eq!(u.get(k), m.get(k));
            prop_assert_eq!(u.contains_key(k), m.contains_key(k));
        }
    }

    // Property 2: attempted mutation through the wrapper never sticks.
    #[test]
    fn prop_read_only_rejects_all_mutation(
        pairs in proptest::collection::vec((0u8..16u8, -50i32..50i32), 0..32),
        attempts in proptest::collection::vec((0u8..=4u8, 0u8..16u8, -50i32..50i32), 1..64),
    ) {
        let mut m: OpenHashMap<u8, i32> = OpenHashMap::new();
        for (k, v) in pairs {
            m.put(k, v).unwrap();
        }
        let mut before: Vec<(u8, i32)> = m.entries().collect();
        before.sort_unstable();

        let mut u = read_only(m);
        for (op, k, v) in attempts {
            let failed = match op {
                0 => u.put(k, v).is_err(),
                1 => u.remove(k).is_err(),
                2 => u.clear().is_err(),
                3 => u.merge(k, v, |a, b| a + b).is_err(),
                _ => u.replace(k, v).is_err(),
            };
            prop_assert!(failed);
        }

        let mut after: Vec<(u8, i32)> = u.entries().collect();
        after.sort_unstable();
        prop_assert_eq!(after, before);
    }

    // Property 3: navigation probes agree with the reference model.
    #[test]
    fn prop_tree_navigation_matches_model(
        pairs in proptest::collection::vec((0i32..200i32, 0i32..10i32), 0..64),
        probes in proptest::collection::vec(-10i32..210i32, 1..32),
    ) {
        let mut t: TreeMap<i32, i32> = TreeMap::new();
        let mut model: BTreeMap<i32, i32> = BTreeMap::new();
        for (k, v) in pairs {
            t.put(k, v).unwrap();
            model.insert(k, v);
        }

        prop_assert_eq!(t.first_key(), model.keys().next().copied());
        prop_assert_eq!(t.last_key(), model.keys().next_back().copied());

        for p in probes {
            let lower = model.range(..p).next_back().map(|(&k, _)| k);
            let floor = model.range(..=p).next_back().map(|(&k, _)| k);
            let ceiling = model.range(p..).next().map(|(&k, _)| k);
            let higher = model.range(p + 1..).next().map(|(&k, _)| k);

            prop_assert_eq!(t.lower_key(p), lower);
            prop_assert_eq!(t.floor_key(p), floor);
            prop_assert_eq!(t.ceiling_key(p), ceiling);
            prop_assert_eq!(t.higher_key(p), higher);

            let head: Vec<i32> = t.head(p).map(|(k, _)| k).collect();
            let head_model: Vec<i32> = model.range(..p).map(|(&k, _)| k).collect();
            prop_assert_eq!(head, head_model);

            let tail: Vec<i32> = t.tail(p).map(|(k, _)| k).collect();
            let tail_model: Vec<i32> = model.range(p..).map(|(&k, _)| k).collect();
            prop_assert_eq!(tail, tail_model);
        }
    }
}
