#![cfg(test)]

use std::collections::HashMap as StdHashMap;
use std::iter;

use super::*;
use crate::collections::contiguous::Array;
use crate::collections::traits::{Cursor, Map};
use crate::outcome::{Error, KeyNotFound};
use crate::util::alloc::CountedDrop;
use crate::util::hash::{BadHasherBuilder, FirstByteHasherBuilder, ManualHash};
use crate::util::panic::assert_panics;

#[test]
fn test_put_get_drop() {
    let mut map: HashMap<String, u32> = HashMap::new();
    assert!(map.is_empty());
    assert_eq!(map.cap(), 0, "A new HashMap shouldn't allocate.");

    assert!(map.put(String::from("one"), 1));
    assert!(map.put(String::from("two"), 2));
    assert!(map.put(String::from("one"), 11), "Put should succeed when overwriting.");
    assert_eq!(map.len(), 2, "Overwriting shouldn't add an entry.");

    assert_eq!(*map.get("one").value(), 11, "Lookups should accept a borrowed key.");
    assert_eq!(
        *map.get("three").error(),
        Error::KeyNotFound(KeyNotFound),
        "Missing keys should be reported as KeyNotFound."
    );

    *map.get_mut("two").value() += 20;
    assert_eq!(*map.get("two").value(), 22);
    assert!(!map.get_mut("three").is_ok());

    assert_eq!(map.insert(String::from("two"), 2).value(), 22, "Insert should return the old value.");
    assert!(map.insert(String::from("three"), 3).is_empty());

    assert!(map.drop("one"));
    assert!(!map.has("one"), "A dropped key should no longer be present.");
    assert!(!map.drop("one"), "Dropping an absent key should fail.");
    assert_eq!(map.len(), 2, "A failed drop shouldn't change the HashMap.");

    assert_eq!(map.remove("three").value(), 3);
    assert_eq!(map.remove_entry("two").value(), (String::from("two"), 2));
    assert!(map.is_empty());

    assert_panics!({
        HashMap::<u8, u8>::new().get(&0).value();
    }, "Reading a failed lookup should panic.");
}

#[test]
fn test_hash_collisions() {
    let mut map = HashMap::with_cap_and_hasher(8, BadHasherBuilder);
    map.put(ManualHash::new(0, "a"), 1);
    map.put(ManualHash::new(1, "b"), 2);
    map.put(ManualHash::new(0, "c"), 3);

    assert!(map.drop(&ManualHash::new(0, "a")));

    assert_eq!(
        *map.get(&ManualHash::new(0, "c")).value(),
        3,
        "Entries displaced past a removed one should still be found."
    );
    assert_eq!(*map.get(&ManualHash::new(1, "b")).value(), 2);
    assert_eq!(
        *map.into_keys().map(|k| k.value()).collect::<Array<_>>(),
        ["c", "b"],
        "HashMap should handle hash collisions so that no elements are lost during removal."
    );

    let mut map = HashMap::with_cap_and_hasher(8, BadHasherBuilder);
    map.put(ManualHash::new(7, "d"), 1);
    map.put(ManualHash::new(7, "e"), 2);
    map.put(ManualHash::new(0, "f"), 3);
    map.put(ManualHash::new(2, "g"), 4);

    assert!(map.drop(&ManualHash::new(7, "d")));

    for (key, value) in [((7, "e"), 2), ((0, "f"), 3), ((2, "g"), 4)] {
        assert_eq!(
            *map.get(&ManualHash::new(key.0, key.1)).value(),
            value,
            "Hash collisions should be handled in a wrapping manner."
        );
    }
    assert_eq!(map.cap(), 8);
    assert_eq!(map.len(), 3);
}

#[test]
fn test_growth() {
    let mut map = HashMap::<usize, usize>::new();
    for i in 0..100 {
        map.put(i, i * 2);
    }

    assert_eq!(map.len(), 100);
    assert!(map.cap() * 4 / 5 >= 100, "The load factor should be respected.");
    for i in 0..100 {
        assert_eq!(*map.get(&i).value(), i * 2, "Every entry should survive rehashing.");
    }

    for i in (0..100).step_by(2) {
        assert!(map.drop(&i));
    }
    assert_eq!(map.len(), 50);
    for i in 0..100 {
        assert_eq!(map.has(&i), i % 2 == 1);
    }

    let mut map = HashMap::<u8, u8>::new();
    map.reserve(0);
    assert_eq!(map.cap(), 0, "Reserving nothing shouldn't allocate.");
    map.reserve(8);
    let cap = map.cap();
    for i in 0..8 {
        map.put(i, i);
    }
    assert_eq!(map.cap(), cap, "Reserved entries shouldn't cause a rehash.");

    assert_panics!({
        HashMap::<u8, u8>::new().reserve(usize::MAX);
    });
}

#[test]
fn test_snapshot_drop_ahead() {
    let mut map = HashMap::with_hasher(FirstByteHasherBuilder);
    map.put("a", 1);
    map.put("b", 2);
    map.put("c", 3);
    map.put("d", 4);

    let mut snapshot = map.snapshot();
    let mut visited = Array::new();
    while snapshot.ok(&map) {
        let key = *snapshot.key();
        if key == "b" {
            map.drop("c");
        }
        visited.push((key, *snapshot.value(&map)));
        snapshot.next();
    }

    assert_eq!(
        visited.slice(),
        &[("a", 1), ("b", 2), ("d", 4)],
        "A key dropped before the snapshot reaches it should be skipped."
    );
}

#[test]
fn test_snapshot_any_order() {
    let mut map: HashMap<&str, i32> = HashMap::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
    let mut snapshot = map.snapshot();
    let order = snapshot.keys.clone();
    let c_first = order.iter().position(|k| *k == "c") < order.iter().position(|k| *k == "b");

    let mut visited = HashMap::<&str, ()>::new();
    while snapshot.ok(&map) {
        if *snapshot.key() == "b" {
            map.drop("c");
        }
        visited.put(*snapshot.key(), ());
        snapshot.next();
    }

    assert!(visited.has("a") && visited.has("b") && visited.has("d"));
    assert_eq!(
        visited.has("c"),
        c_first,
        "Key c should only be visited if the snapshot reached it before b."
    );
}

#[test]
fn test_snapshot_mutation() {
    let mut map: HashMap<u32, u32> = HashMap::from([(1, 1), (2, 2), (3, 3)]);
    let mut snapshot = map.snapshot();
    assert_eq!(snapshot.remaining(), 3);

    let mut seen = 0;
    while snapshot.ok(&map) {
        let key = *snapshot.key();
        let value = *snapshot.value(&map);
        map.drop(&key);
        assert!(!snapshot.get(&map).is_ok(), "The current key should be gone from the map.");
        assert!(snapshot.ok(&map), "Dropping the current key shouldn't move the snapshot.");
        assert_eq!(value, key);

        map.put(key + 100, 0);
        seen += 1;
        snapshot.next();
    }

    assert_eq!(seen, 3, "Keys inserted after the snapshot shouldn't be visited.");
    assert_eq!(snapshot.remaining(), 0);
    assert!(!snapshot.ok(&map));
    assert_panics!({
        snapshot.key();
    });

    let empty = HashMap::<u8, u8>::new();
    assert!(!empty.snapshot().ok(&empty));
}

#[test]
fn test_cursor() {
    let map: HashMap<char, u32> = HashMap::from([('x', 1), ('y', 2), ('z', 3)]);
    let mut cursor = map.cursor();
    let mut total = 0;
    let mut count = 0;

    while cursor.ok() {
        assert_eq!(cursor.value(), map.get(cursor.key()).value());
        total += *cursor.value();
        count += 1;
        cursor.next();
    }
    assert_eq!((count, total), (3, 6), "The cursor should visit every entry once.");

    assert_panics!({
        cursor.value();
    });

    let pairs: StdHashMap<char, u32> = map.cursor().into_iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(pairs, StdHashMap::from([('x', 1), ('y', 2), ('z', 3)]));

    let empty = HashMap::<u8, u8>::new();
    assert!(!empty.cursor().ok(), "A cursor over an empty HashMap should start invalid.");
}

#[test]
fn test_iterators() {
    let mut map: HashMap<u32, u32> = (0..10).map(|i| (i, i * i)).collect();

    assert_eq!(map.iter().len(), 10);
    assert_eq!(map.keys().sum::<u32>(), 45);
    assert_eq!(map.values().sum::<u32>(), 285);

    for value in map.values_mut() {
        *value += 1;
    }
    for (key, value) in map.iter_mut() {
        assert_eq!(*value, key * key + 1);
    }

    let mut keys: Array<u32> = map.clone().into_keys().collect();
    keys.sort();
    assert_eq!(keys.slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    let values: u32 = map.clone().into_values().sum();
    assert_eq!(values, 295);

    let mut iter = map.into_iter();
    assert_eq!(iter.len(), 10);
    iter.next();
    assert_eq!(iter.len(), 9, "Owned iteration should report the exact remaining length.");

    let counter = CountedDrop::new(0);
    let map: HashMap<u8, CountedDrop> = (0..10).zip(iter::repeat_with(|| counter.clone())).collect();
    let mut iter = map.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.count(), 10, "Dropping an owned iterator should drop all values.");
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::new(0);
    let mut map = HashMap::<u8, CountedDrop>::new();
    for i in 0..10 {
        map.put(i, counter.clone());
    }

    map.drop(&3);
    map.drop(&7);
    assert_eq!(counter.count(), 2, "Dropped values should be dropped immediately.");

    map.put(0, counter.clone());
    assert_eq!(counter.count(), 3, "Overwritten values should be dropped.");

    drop(map);
    assert_eq!(counter.count(), 11, "All remaining values should be dropped with the HashMap.");
}

#[test]
fn test_conversions() {
    let std_map = StdHashMap::from([("a", 1), ("b", 2)]);
    let mut map: HashMap<&str, i32> = HashMap::from(std_map);
    assert_eq!(map.len(), 2);
    assert_eq!(*map.get("b").value(), 2);

    map.extend([("b", 20), ("c", 30)]);
    assert_eq!(
        map,
        HashMap::from([("a", 1), ("b", 20), ("c", 30)]),
        "Extending should merge, keeping existing keys that aren't overwritten."
    );

    let duplicate: HashMap<char, i32> = [('a', 1), ('a', 2)].into_iter().collect();
    assert_eq!(duplicate.len(), 1);
    assert_eq!(*duplicate.get(&'a').value(), 2, "Later values should win.");

    let mut entries = Array::from(HashMap::<u8, char>::from([(2, 'b'), (1, 'a')]));
    entries.sort();
    assert_eq!(entries.slice(), &[(1, 'a'), (2, 'b')]);

    assert_ne!(map, HashMap::from([("a", 1)]));
    assert_eq!(format!("{}", HashMap::<&str, i32>::from([("a", 1)])), "#{a: 1}");
    assert_eq!(*map.get_entry("c").value().1, 30);
}

#[test]
fn test_map_contract() {
    fn round_trip<M: Map<Key = u8, Value = &'static str>>(map: &mut M) {
        assert!(map.put(1, "one"));
        assert!(map.has(&1));
        assert_eq!(*map.get(&1).value(), "one");
        assert!(map.drop(&1));
        assert!(!map.has(&1));
        assert!(!map.drop(&1));
        assert!(map.is_empty());
    }

    round_trip(&mut HashMap::<u8, &str>::new());
    round_trip(&mut HashMap::with_hasher(BadHasherBuilder));
}
