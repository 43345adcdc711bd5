//! Property tests for the container contracts, checked against std collections as a model.

use std::collections::HashMap as StdHashMap;

use proptest::prelude::*;
use sx::algorithm::{find_all, remove_all};
use sx::collections::contiguous::Array;
use sx::collections::hash::HashMap;
use sx::collections::traits::{Cursor, Map, Stack};

#[derive(Debug, Clone)]
enum MapOp {
    Put(u8, i32),
    Drop(u8),
}

fn map_ops_strategy() -> impl Strategy<Value = Vec<MapOp>> {
    prop::collection::vec(
        prop_oneof![
            (any::<u8>(), any::<i32>()).prop_map(|(k, v)| MapOp::Put(k, v)),
            any::<u8>().prop_map(MapOp::Drop),
        ],
        0..500,
    )
}

proptest! {
    #[test]
    fn prop_stack_push_then_pop(
        elements in prop::collection::vec(any::<i64>(), 0..200),
        extra in any::<i64>(),
    ) {
        let mut arr = Array::from_iter(elements.iter().copied());
        let before = arr.clone();

        Stack::push(&mut arr, extra);
        prop_assert_eq!(Stack::peek(&arr).value(), &extra);
        prop_assert_eq!(Stack::pop(&mut arr).value(), extra);
        prop_assert_eq!(arr, before);
    }

    #[test]
    fn prop_array_put_then_get(
        elements in prop::collection::vec(any::<u16>(), 1..200),
        index in any::<prop::sample::Index>(),
        value in any::<u16>(),
    ) {
        let mut arr = Array::from_iter(elements.iter().copied());
        let index = index.index(elements.len());

        prop_assert!(Map::put(&mut arr, index, value));
        prop_assert_eq!(Map::get(&arr, &index).value(), &value);
        prop_assert_eq!(arr.len(), elements.len());
        prop_assert!(!Map::has(&arr, &elements.len()));
    }

    #[test]
    fn prop_array_drops_match_vec(
        elements in prop::collection::vec(any::<u32>(), 0..200),
        drops in prop::collection::vec(any::<prop::sample::Index>(), 0..50),
    ) {
        let mut arr = Array::from_iter(elements.iter().copied());
        let mut model = elements.clone();

        for drop in drops {
            if model.is_empty() {
                prop_assert!(!arr.drop(0));
                break;
            }
            let index = drop.index(model.len());
            model.remove(index);
            prop_assert!(arr.drop(index));
        }

        prop_assert_eq!(arr.slice(), model.as_slice());
        arr.compact();
        prop_assert_eq!(arr.slice(), model.as_slice());
        prop_assert_eq!(arr.cap(), model.len());
    }

    #[test]
    fn prop_cursor_visits_in_order(elements in prop::collection::vec(any::<char>(), 0..100)) {
        let arr = Array::from_iter(elements.iter().copied());

        let visited: Vec<(usize, char)> = arr.cursor().pairs().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(usize, char)> = elements.iter().copied().enumerate().collect();
        prop_assert_eq!(visited, expected);
    }

    #[test]
    fn prop_map_matches_std(ops in map_ops_strategy()) {
        let mut map = HashMap::<u8, i32>::new();
        let mut model = StdHashMap::new();

        for op in ops {
            match op {
                MapOp::Put(key, value) => {
                    prop_assert!(Map::put(&mut map, key, value));
                    model.insert(key, value);
                    prop_assert_eq!(map.get(&key).value(), &value);
                },
                MapOp::Drop(key) => {
                    prop_assert_eq!(map.drop(&key), model.remove(&key).is_some());
                    prop_assert!(!map.has(&key));
                    prop_assert!(!map.drop(&key));
                },
            }
        }

        prop_assert_eq!(map.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(map.get(key).value(), value);
        }

        let mut count = 0;
        let mut cursor = map.cursor();
        while cursor.ok() {
            prop_assert_eq!(model.get(cursor.key()), Some(cursor.value()));
            count += 1;
            cursor.next();
        }
        prop_assert_eq!(count, model.len());
    }

    #[test]
    fn prop_find_all_everything(elements in prop::collection::vec(any::<i8>(), 0..100)) {
        let arr = Array::from_iter(elements.iter().copied());

        let found = find_all(&arr, |_, _| true);
        prop_assert_eq!(found.len(), arr.len());
        for (i, pair) in found.iter().enumerate() {
            prop_assert_eq!(pair.key, i);
            prop_assert_eq!(*pair.value, elements[i]);
        }
    }

    #[test]
    fn prop_remove_all_leaves_source(
        elements in prop::collection::vec(any::<i8>(), 0..100),
        threshold in any::<i8>(),
    ) {
        let arr = Array::from_iter(elements.iter().copied());

        let kept = remove_all(&arr, |value| *value < threshold);
        let expected: Vec<i8> = elements.iter().copied().filter(|value| *value >= threshold).collect();
        prop_assert_eq!(kept.slice(), expected.as_slice());
        prop_assert_eq!(arr.slice(), elements.as_slice());
    }
}
