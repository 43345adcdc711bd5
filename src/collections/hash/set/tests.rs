#![cfg(test)]

use super::*;
use crate::collections::contiguous::Array;
use crate::collections::traits::{Cursor, Map};
use crate::util::hash::{BadHasherBuilder, ManualHash};

fn sorted<'a, I: Iterator<Item = &'a u8>>(iter: I) -> Array<u8> {
    let mut arr: Array<u8> = iter.copied().collect();
    arr.sort();
    arr
}

#[test]
fn test_membership() {
    let mut set = HashSet::<&str>::new();
    assert!(set.put("a"));
    assert!(set.put("b"));
    assert!(set.put("a"), "Put should always succeed.");
    assert_eq!(set.len(), 2);

    assert!(set.has("a"));
    assert!(set.has("b"));
    assert!(!set.has("c"));

    assert!(!set.insert("b"), "Inserting an existing item should report it.");
    assert!(set.insert("c"));

    assert!(set.drop("a"));
    assert!(!set.drop("e"), "Dropping an absent item should fail.");
    assert_eq!(set.remove("b").value(), "b");
    assert!(set.remove("b").is_empty());
    assert_eq!(set.len(), 1);

    let set: HashSet<&str> = HashSet::from(["a", "b", "a"]);
    assert_eq!(set.len(), 2, "Duplicates should be collapsed.");
}

#[test]
fn test_hash_collisions() {
    let mut set = HashSet::with_hasher(BadHasherBuilder);
    set.put(ManualHash::new(0, "zero"));
    set.put(ManualHash::new(0, "one"));
    set.put(ManualHash::new(2, "two"));
    set.put(ManualHash::new(0, "three"));
    set.put(ManualHash::new(2, "four"));
    set.put(ManualHash::new(1, "five"));

    set.drop(&ManualHash::new(0, "zero"));
    set.drop(&ManualHash::new(2, "two"));

    let mut remaining: Array<_> = set.into_iter().map(|i| i.value()).collect();
    remaining.sort();
    assert_eq!(
        *remaining,
        ["five", "four", "one", "three"],
        "HashSet should handle hash collisions so that no elements are lost during removal."
    );

    let mut set = HashSet::with_cap_and_hasher(6, BadHasherBuilder);
    set.put(ManualHash::new(5, "zero"));
    set.put(ManualHash::new(5, "one"));
    set.put(ManualHash::new(1, "two"));
    set.put(ManualHash::new(5, "three"));

    set.drop(&ManualHash::new(5, "zero"));

    assert!(set.has(&ManualHash::new(5, "one")));
    assert!(set.has(&ManualHash::new(1, "two")));
    assert!(
        set.has(&ManualHash::new(5, "three")),
        "Hash collisions should be handled in a wrapping manner."
    );
}

#[test]
fn test_set_operations() {
    let first: HashSet<u8> = HashSet::from([1, 2, 3, 4]);
    let second: HashSet<u8> = HashSet::from([3, 4, 5]);

    assert_eq!(sorted(first.difference(&second)).slice(), &[1, 2]);
    assert_eq!(sorted(second.difference(&first)).slice(), &[5]);
    assert_eq!(sorted(first.symmetric_difference(&second)).slice(), &[1, 2, 5]);
    assert_eq!(sorted(first.intersection(&second)).slice(), &[3, 4]);
    assert_eq!(sorted(first.union(&second)).slice(), &[1, 2, 3, 4, 5]);

    let small: HashSet<u8> = HashSet::from([3, 4]);
    assert!(small.is_subset(&first), "Every item of small is in first.");
    assert!(small.is_subset(&second));
    assert!(!first.is_subset(&small), "A larger set can't be a subset.");
    assert!(first.is_superset(&small));
    assert!(!second.is_subset(&first));
    assert!(HashSet::<u8>::new().is_subset(&small));

    assert_eq!(first, HashSet::from([4, 3, 2, 1]), "Equality shouldn't depend on order.");
    assert_ne!(first, second);
}

#[test]
fn test_traversal() {
    let mut set: HashSet<u8> = (1..=5).collect();
    {
        let mut cursor = set.cursor();
        let mut total = 0;
        while cursor.ok() {
            total += *cursor.key();
            cursor.next();
        }
        assert_eq!(total, 15);
    }

    let mut snapshot = set.snapshot();
    let mut visited = 0;
    while snapshot.ok(set.as_map()) {
        let item = *snapshot.key();
        if item % 2 == 1 {
            set.drop(&item);
        }
        visited += 1;
        snapshot.next();
    }
    assert_eq!(visited, 5, "Dropping the current item shouldn't skip any others.");
    assert_eq!(sorted(set.iter()).slice(), &[2, 4]);

    set.extend([6, 8]);
    assert_eq!(set.len(), 4);
    assert_eq!(format!("{}", HashSet::<u8>::from([7])), "#{7}");
}

#[test]
fn test_map_contract() {
    let mut set = HashSet::<char>::new();
    assert!(Map::put(&mut set, 'x', ()));
    assert!(Map::has(&set, &'x'));
    assert!(Map::get(&set, &'x').is_ok());
    assert!(Map::drop(&mut set, &'x'));
    assert!(!Map::get(&set, &'x').is_ok());
}
