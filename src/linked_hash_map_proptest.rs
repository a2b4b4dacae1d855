#![cfg(test)]

// Property tests for LinkedHashMap kept inside the crate so they can stay
// close to the structure they exercise.
//
// Model: a Vec<(key, value)> maintaining the same insertion order the map
// claims to maintain. Every operation is applied to both; after each step
// the full ordered entry list, the length, and the per-key lookups must
// agree.

use proptest::prelude::*;

use crate::map::ScalarMap;
use crate::ordered::OrderedScalarMap;
use crate::LinkedHashMap;

type Model = Vec<(u8, i32)>;

fn model_pos(model: &Model, key: u8) -> Option<usize> {
    model.iter().position(|&(k, _)| k == key)
}

fn apply_model(model: &mut Model, op: u8, key: u8, value: i32) {
    match op {
        // put: update in place or append
        0 => match model_pos(model, key) {
            Some(i) => model[i].1 = value,
            None => model.push((key, value)),
        },
        // remove
        1 => {
            if let Some(i) = model_pos(model, key) {
                model.remove(i);
            }
        }
        // move_to_first
        2 => {
            if let Some(i) = model_pos(model, key) {
                let e = model.remove(i);
                model.insert(0, e);
            }
        }
        // move_to_last
        3 => {
            if let Some(i) = model_pos(model, key) {
                let e = model.remove(i);
                model.push(e);
            }
        }
        // poll_first
        4 => {
            if !model.is_empty() {
                model.remove(0);
            }
        }
        // poll_last
        5 => {
            model.pop();
        }
        // put_first: insert or update, then relocate to the front
        6 => {
            match model_pos(model, key) {
                Some(i) => {
                    model[i].1 = value;
                    let e = model.remove(i);
                    model.insert(0, e);
                }
                None => model.insert(0, (key, value)),
            };
        }
        // put_last
        7 => {
            match model_pos(model, key) {
                Some(i) => {
                    model[i].1 = value;
                    let e = model.remove(i);
                    model.push(e);
                }
                None => model.push((key, value)),
            };
        }
        _ => unreachable!(),
    }
}

fn apply_map(map: &mut LinkedHashMap<u8, i32>, op: u8, key: u8, value: i32) {
    match op {
        0 => {
            map.put(key, value).unwrap();
        }
        1 => {
            map.remove(key).unwrap();
        }
        2 => {
            map.move_to_first(key).unwrap();
        }
        3 => {
            map.move_to_last(key).unwrap();
        }
        4 => {
            map.poll_first().unwrap();
        }
        5 => {
            map.poll_last().unwrap();
        }
        6 => {
            map.put_first(key, value).unwrap();
        }
        7 => {
            map.put_last(key, value).unwrap();
        }
        _ => unreachable!(),
    }
}

proptest! {
    // Property: the map and the ordered model stay in lockstep across any
    // interleaving of order-affecting operations.
    #[test]
    fn prop_linked_map_matches_ordered_model(
        keys in 1u8..=6,
        ops in proptest::collection::vec((0u8..=7u8, 0u8..100u8, -100i32..100i32), 1..200),
    ) {
        let mut map: LinkedHashMap<u8, i32> = LinkedHashMap::new();
        let mut model: Model = Vec::new();

        for (op, raw_key, value) in ops {
            let key = raw_key % keys;
            apply_map(&mut map, op, key, value);
            apply_model(&mut model, op, key, value);

            prop_assert_eq!(map.len(), model.len());
            let got: Vec<(u8, i32)> = map.entries().collect();
            prop_assert_eq!(&got, &model);

            prop_assert_eq!(map.first(), model.first().copied());
            prop_assert_eq!(map.last(), model.last().copied());

            for k in 0..keys {
                let expect = model_pos(&model, k).map(|i| model[i].1);
                prop_assert_eq!(map.get_opt(k), expect);
                prop_assert_eq!(map.contains_key(k), expect.is_some());
            }
        }
    }

    // Property: lookups and removals agree with the model under forced hash
    // collisions (all keys in one bucket), exercising the probe/unlink paths.
    #[test]
    fn prop_linked_map_survives_collisions(
        ops in proptest::collection::vec((0u8..=1u8, 0u8..16u8, -50i32..50i32), 1..100),
    ) {
        use core::hash::{BuildHasher, Hasher};

        #[derive(Clone, Default)]
        struct ConstBuildHasher;
        struct ConstHasher;
        impl BuildHasher for ConstBuildHasher {
            type Hasher = ConstHasher;
            fn build_hasher(&self) -> Self::Hasher {
                ConstHasher
            }
        }
        impl Hasher for ConstHasher {
            fn write(&mut self, _bytes: &[u8]) {}
            fn finish(&self) -> u64 {
                0
            }
        }

        let mut map: LinkedHashMap<u8, i32, ConstBuildHasher> =
            LinkedHashMap::with_hasher(ConstBuildHasher);
        let mut model: Model = Vec::new();

        for (op, key, value) in ops {
            apply_map_generic(&mut map, op, key, value);
            apply_model(&mut model, op, key, value);

            prop_assert_eq!(map.len(), model.len());
            let got: Vec<(u8, i32)> = map.entries().collect();
            prop_assert_eq!(&got, &model);
        }
    }
}

fn apply_map_generic<S: core::hash::BuildHasher>(
    map: &mut LinkedHashMap<u8, i32, S>,
    op: u8,
    key: u8,
    value: i32,
) {
    match op {
        0 => {
            map.put(key, value).unwrap();
        }
        1 => {
            map.remove(key).unwrap();
        }
        _ => unreachable!(),
    }
}
