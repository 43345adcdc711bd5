use std::fmt::{self, Formatter};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::collections::contiguous::Array;
use crate::collections::hash::{HashMap, HashSet};
use crate::outcome::Optional;

/// Upper bound on the capacity reserved from an untrusted size hint.
const MAX_PREALLOC: usize = 4096;

fn cautious_cap(hint: Option<usize>) -> usize {
    hint.unwrap_or(0).min(MAX_PREALLOC)
}

impl<V: Serialize> Serialize for Array<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<K, V, B> Serialize for HashMap<K, V, B>
where
    K: Hash + Eq + Serialize,
    V: Serialize,
    B: BuildHasher,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<K, B> Serialize for HashSet<K, B>
where
    K: Hash + Eq + Serialize,
    B: BuildHasher,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

struct ArrayVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for ArrayVisitor<V> {
    type Value = Array<V>;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Array<V>, A::Error> {
        let mut arr = Array::with_cap(cautious_cap(seq.size_hint()));

        while let Some(value) = seq.next_element()? {
            arr.push(value);
        }

        Ok(arr)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Array<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(ArrayVisitor(PhantomData))
    }
}

struct HashMapVisitor<K, V, B>(PhantomData<(K, V, B)>);

impl<'de, K, V, B> Visitor<'de> for HashMapVisitor<K, V, B>
where
    K: Hash + Eq + Deserialize<'de>,
    V: Deserialize<'de>,
    B: BuildHasher + Default,
{
    type Value = HashMap<K, V, B>;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = HashMap::with_cap_and_hasher(cautious_cap(access.size_hint()), B::default());

        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }

        Ok(map)
    }
}

impl<'de, K, V, B> Deserialize<'de> for HashMap<K, V, B>
where
    K: Hash + Eq + Deserialize<'de>,
    V: Deserialize<'de>,
    B: BuildHasher + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(HashMapVisitor(PhantomData))
    }
}

/// Decodes an object into an existing map, overwriting the values of keys that appear in the input
/// and keeping the rest. Produces the number of entries decoded.
pub(crate) struct MergeInto<'m, K: Hash + Eq, V, B: BuildHasher>(pub(crate) &'m mut HashMap<K, V, B>);

impl<'de, K, V, B> Visitor<'de> for MergeInto<'_, K, V, B>
where
    K: Hash + Eq + Deserialize<'de>,
    V: Deserialize<'de>,
    B: BuildHasher,
{
    type Value = usize;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a map to merge")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<usize, A::Error> {
        self.0.reserve(cautious_cap(access.size_hint()));

        let mut count = 0;
        while let Some((key, value)) = access.next_entry()? {
            self.0.insert(key, value);
            count += 1;
        }

        Ok(count)
    }
}

struct HashSetVisitor<K, B>(PhantomData<(K, B)>);

impl<'de, K, B> Visitor<'de> for HashSetVisitor<K, B>
where
    K: Hash + Eq + Deserialize<'de>,
    B: BuildHasher + Default,
{
    type Value = HashSet<K, B>;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a sequence of unique items")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut set = HashSet::with_cap_and_hasher(cautious_cap(seq.size_hint()), B::default());

        while let Some(item) = seq.next_element()? {
            set.insert(item);
        }

        Ok(set)
    }
}

impl<'de, K, B> Deserialize<'de> for HashSet<K, B>
where
    K: Hash + Eq + Deserialize<'de>,
    B: BuildHasher + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(HashSetVisitor(PhantomData))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::deserialize(deserializer).map(Optional::from_option)
    }
}
