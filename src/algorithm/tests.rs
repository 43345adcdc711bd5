#![cfg(test)]

use super::*;
use crate::collections::contiguous::Array;
use crate::collections::hash::HashMap;
use crate::collections::traits::{Cursor, Pair};
use crate::outcome::Optional;

#[test]
fn test_find_first_where() {
    let arr = Array::from(["x", "y", "y", "z"]);

    let found = find_first_where(&arr, |_, value| *value == "y").value();
    assert_eq!(found, Pair::new(1, &"y"), "The first match in traversal order should be returned.");

    let mut visited = 0;
    find_first_where(&arr, |_, _| {
        visited += 1;
        true
    });
    assert_eq!(visited, 1, "Traversal should stop at the first match.");

    assert!(find_first_where(&arr, |key, _| *key > 3).is_empty());
    assert!(find_first_where(&Array::<u8>::new(), |_, _| true).is_empty());
}

#[test]
fn test_find_all() {
    let arr = Array::from([4, 7, 1, 8]);

    let everything = find_all(&arr, |_, _| true);
    assert_eq!(everything.len(), arr.len(), "An always true predicate should match every pair.");
    let keys: Vec<_> = everything.iter().map(|pair| pair.key).collect();
    assert_eq!(keys, [0, 1, 2, 3], "Matches should keep traversal order.");

    let big = find_all(&arr, |_, value| *value > 3);
    let values: Vec<_> = big.iter().map(|pair| *pair.value).collect();
    assert_eq!(values, [4, 7, 8]);

    assert!(find_all(&arr, |_, _| false).is_empty());
}

#[test]
fn test_search_maps() {
    let map = HashMap::<&str, u32>::from([("one", 1), ("two", 2), ("three", 3)]);

    let found = find_first_where(&map, |key, _| **key == "two").value();
    assert_eq!((*found.key, *found.value), ("two", 2));

    let mut odd: Vec<_> = find_all(&map, |_, value| value % 2 == 1)
        .iter()
        .map(|pair| *pair.key)
        .collect();
    odd.sort();
    assert_eq!(odd, ["one", "three"]);

    assert!(contains_value(&map, &3));
    assert!(!contains_value(&map, &4));
}

#[test]
fn test_contains_value() {
    let arr = Array::from(['a', 'b']);
    assert!(contains_value(&arr, &'b'));
    assert!(!contains_value(&arr, &'c'));
    assert!(!contains_value(&Array::<char>::new(), &'a'));

    assert!(contains_value(&Optional::from(5), &5));
    assert!(!contains_value(&Optional::<i32>::empty(), &5));
}

#[test]
fn test_remove_all() {
    let arr = Array::from([1, 2, 3, 4, 5, 6]);

    let odd = remove_all(&arr, |value| value % 2 == 0);
    assert_eq!(odd.slice(), &[1, 3, 5], "Kept values should stay in order.");
    assert_eq!(arr.slice(), &[1, 2, 3, 4, 5, 6], "The source Array should be left untouched.");

    assert!(remove_all(&arr, |_| true).is_empty());
    assert_eq!(remove_all(&arr, |_| false), arr);
}

#[test]
fn test_map_values() {
    let arr = Array::from([10, 20, 30]);

    let doubled = map_values(arr.cursor(), |_, value| Optional::from(value * 2));
    assert_eq!(doubled.slice(), &[20, 40, 60]);

    let tail = map_values(arr.cursor(), |key, value| {
        if key == 0 {
            Optional::empty()
        } else {
            Optional::from(*value)
        }
    });
    assert_eq!(tail.slice(), &[20, 30], "Empty results should be skipped.");

    let mut cursor = arr.cursor();
    cursor.next();
    cursor.next();
    let rest = map_values(cursor, |key, _| Optional::from(key));
    assert_eq!(rest.slice(), &[2], "Only the remaining pairs should be mapped.");
}

#[test]
fn test_dynamic() {
    let dynamic = Dynamic::new(String::from("text"));

    assert!(dynamic.is::<String>());
    assert!(!dynamic.is::<&str>());
    assert_eq!(dynamic.downcast_ref::<String>().value(), "text");
    assert!(dynamic.downcast_ref::<u8>().error().is_type_mismatch());
    assert_eq!(dynamic.type_name(), std::any::type_name::<String>());
    assert_eq!(format!("{:?}", Dynamic::new(1_u8)), "Dynamic(u8)");
}

#[test]
fn test_type_cast() {
    assert_eq!(type_cast::<i64>(Dynamic::new(-3_i64)).value(), -3);

    let failed = type_cast::<i64>(Dynamic::new(3_u8));
    let mismatch: crate::outcome::TypeMismatch = failed.error().clone().try_into()
        .expect("A failed cast should report a type mismatch.");
    assert_eq!((mismatch.from, mismatch.to), ("u8", "i64"));
}

#[test]
fn test_type_cast_array() {
    let mixed = Array::from([
        Dynamic::new(1_u32),
        Dynamic::new("two"),
        Dynamic::new(3_u32),
        Dynamic::new(4_i32),
    ]);

    let numbers = type_cast_array::<u32>(&mixed);
    assert_eq!(numbers.slice(), &[1, 3], "Only values of the requested type should be kept.");
    assert_eq!(mixed.len(), 4);

    assert!(type_cast_array::<f32>(&mixed).is_empty());
}
