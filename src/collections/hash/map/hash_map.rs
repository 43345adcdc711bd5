use std::borrow::Borrow;
use std::collections::HashMap as StdHashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::{cmp, mem};

use super::{IntoKeys, IntoValues, Iter, IterMut, KeySnapshot, Keys, MapCursor, Values, ValuesMut};
use crate::collections::contiguous::{Array, Buffer};
use crate::collections::traits::{Container, Iterable, Map};
use crate::outcome::{self, KeyNotFound, Optional};
use crate::util::fmt::{DebugList, DebugRaw};
use crate::util::option::OptionExtension;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 4;
const LOAD_FACTOR_DENOMINATOR: usize = 5;

/// A map of keys to values which relies on the keys implementing [`Hash`].
///
/// Entries are stored with open addressing and linear probing. A custom load factor is not
/// supported at this point, with the default being 4/5. The order of the entries depends on their
/// hashes and the capacity, so no ordering is guaranteed by any of the traversal methods.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `put` / `insert` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `drop` / `remove` | `O(1)`* |
/// | `has` | `O(1)`* |
/// | `reserve` | `O(n)`***, `O(1)` |
/// | `cursor` / `snapshot` | `O(n)` |
///
/// \* In the event of a hash collision, these functions will take additional time, while a valid
/// / correct location is found. This additional time is kept at a minimum and hash collisions are
/// unlikely especially with a large capacity.
///
/// \** If the HashMap doesn't have enough capacity for the new element, `insert` will take `O(n)`.
/// \* applies as well.
///
/// \*** If the HashMap has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) buckets: Buffer<Bucket<K, V>>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

pub(crate) type Bucket<K, V> = Option<(K, V)>;

impl<K: Hash + Eq, V, B: BuildHasher + Default> HashMap<K, V, B> {
    /// Creates a new HashMap with capacity 0 and the default value for `B`. Memory will be
    /// allocated when the capacity changes.
    ///
    /// # Examples
    /// ```
    /// # use sx::collections::hash::HashMap;
    /// let mut map: HashMap<&str, u8> = HashMap::new();
    /// assert!(map.put("a", 1));
    /// assert_eq!(*map.get("a").value(), 1);
    /// assert!(!map.get("b").is_ok());
    /// ```
    pub fn new() -> HashMap<K, V, B> {
        HashMap {
            buckets: Buffer::new(),
            len: 0,
            hasher: B::default(),
        }
    }

    /// Creates a new HashMap with the provided `cap`acity, allowing insertions without
    /// reallocation. The default hasher will be used.
    pub fn with_cap(cap: usize) -> HashMap<K, V, B> {
        HashMap::with_cap_and_hasher(cap, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new HashMap with capacity 0 and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap {
            buckets: Buffer::new(),
            len: 0,
            hasher,
        }
    }

    /// Creates a new HashMap with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashMap<K, V, B> {
        HashMap {
            buckets: Buffer::repeat_default(cap),
            len: 0,
            hasher,
        }
    }

    /// Returns the length of the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the HashMap.
    pub const fn cap(&self) -> usize {
        self.buckets.size()
    }

    /// Inserts the provided `key`-`value` pair into the HashMap, increasing the capacity if
    /// required. If the key was already associated with a value, the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn insert(&mut self, key: K, value: V) -> Optional<V> {
        if self.should_grow() {
            self.grow()
        }

        // SAFETY: We've just grown if necessary, so the capacity isn't 0.
        let index = unsafe { self.find_index_for_key(&key).unreachable() };

        // The bucket at index is either empty or contains an equal key.
        match &mut self.buckets[index] {
            Some((_, existing)) => Optional::from(mem::replace(existing, value)),
            None => {
                self.buckets[index] = Some((key, value));
                self.len += 1;
                Optional::empty()
            },
        }
    }

    /// Associates `value` with `key`, overwriting any previous value. Always returns true.
    pub fn put(&mut self, key: K, value: V) -> bool {
        self.insert(key, value);
        true
    }

    /// Returns the entry for the provided `key` as a key-value pair, if there is one.
    pub fn get_entry<Q>(&self, key: &Q) -> Optional<(&K, &V)>
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of K
        // where equality and hashing carries over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let bucket = self.find_index_for_key(key).and_then(|index| self.buckets[index].as_ref());
        Optional::from_option(bucket.map(|(k, v)| (k, v)))
    }

    /// Returns a reference to the value associated with the provided `key`, or a
    /// [`KeyNotFound`](outcome::KeyNotFound) error.
    pub fn get<Q>(&self, key: &Q) -> outcome::Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.get_entry(key).into_option() {
            Some((_, value)) => outcome::Result::ok(value),
            None => outcome::Result::from_error(KeyNotFound),
        }
    }

    /// Returns a mutable reference to the value associated with the provided `key`, or a
    /// [`KeyNotFound`](outcome::KeyNotFound) error.
    pub fn get_mut<Q>(&mut self, key: &Q) -> outcome::Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let bucket = match self.find_index_for_key(key) {
            Some(index) => self.buckets[index].as_mut(),
            None => None,
        };

        match bucket {
            Some((_, value)) => outcome::Result::ok(value),
            None => outcome::Result::from_error(KeyNotFound),
        }
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.find_index_for_key(key) {
            Some(index) => self.buckets[index].is_some(),
            None => false,
        }
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Optional<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(mut hole) = self.find_index_for_key(key) else {
            return Optional::empty();
        };

        // If the bucket at index is empty, the map doesn't contain the key.
        let Some(removed) = self.buckets[hole].take() else {
            return Optional::empty();
        };
        self.len -= 1;

        // UNCHECKED: find_index_for_key returned some, so the cap is not 0.
        let cap = self.cap();
        let mut next = (hole + 1) % cap;

        // Every entry in the run of buckets following the hole is moved back into it, unless its
        // ideal index lies cyclically within (hole, next], in which case moving it would make it
        // unreachable from its ideal index.
        while let Some((next_key, _)) = &self.buckets[next] {
            // SAFETY: The capacity isn't 0.
            let ideal = unsafe { self.index_from_key(next_key).unreachable() };

            if !cyclic_range_contains(hole, next, ideal) {
                self.buckets[hole] = self.buckets[next].take();
                hole = next;
            }

            next = (next + 1) % cap;
        }

        Optional::from(removed)
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Optional<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes the entry associated with `key`, returning whether there was one.
    ///
    /// # Examples
    /// ```
    /// # use sx::collections::hash::HashMap;
    /// let mut map: HashMap<char, u8> = HashMap::from([('a', 1)]);
    /// assert!(map.drop(&'a'));
    /// assert!(!map.drop(&'a'));
    /// assert!(!map.has(&'a'));
    /// ```
    pub fn drop<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        !self.remove_entry(key).is_empty()
    }

    /// Increases the capacity of the HashMap to ensure that len + `extra` entries will fit without
    /// exceeding the load factor.
    ///
    /// # Panics
    /// Panics if the new capacity overflows [`usize`], or the memory layout would have a size that
    /// exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let Some(required) = self.len.checked_add(extra) else {
            panic!("Capacity overflow!")
        };

        if required <= self.cap() * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR { return; }

        let Some(scaled) = required.checked_mul(LOAD_FACTOR_DENOMINATOR) else {
            panic!("Capacity overflow!")
        };
        let new_cap = scaled / LOAD_FACTOR_NUMERATOR + 1;

        self.realloc_with_cap(new_cap);
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all key-value pairs in the HashMap, with mutable references to the
    /// values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Returns an iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }

    /// Returns an iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Creates a cursor over the entries of the HashMap. The keys are snapshotted when the cursor
    /// is created, which fixes the traversal order.
    pub fn cursor(&self) -> MapCursor<'_, K, V, B> {
        MapCursor::new(self)
    }

    /// Creates a snapshot of the keys of the HashMap, which can be used to traverse it while it
    /// is being modified. See [`KeySnapshot`] for how modifications affect the traversal.
    pub fn snapshot(&self) -> KeySnapshot<K>
    where
        K: Clone,
    {
        KeySnapshot::new(self.keys().cloned().collect())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Determines whether the HashMap's length exceeds the load capacity, suggesting that it should
    /// grow before inserting new entries.
    pub(crate) const fn should_grow(&self) -> bool {
        self.len >= self.buckets.size() * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR
    }

    /// Grows the HashMap by the growth factor, ensuring that it can hold additional entries.
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap().saturating_mul(GROWTH_FACTOR), MIN_ALLOCATED_CAP);

        self.realloc_with_cap(new_cap)
    }

    /// Reallocates the HashMap to have capacity equal to `new_cap`, if doing so wouldn't cause the
    /// map to overload. (There isn't a logical way for the map to shrink and drop entries, so this
    /// isn't allowed.)
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        if new_cap * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR < self.len { return; }

        log::trace!("Rehashing HashMap from {} to {} buckets ({} entries)", self.cap(), new_cap, self.len);

        // Replace the buckets first so that we can move out of the old ones.
        let mut old_buckets = mem::replace(&mut self.buckets, Buffer::repeat_default(new_cap));

        for entry in old_buckets.iter_mut().filter_map(Option::take) {
            // SAFETY: If the new capacity is 0, the old buckets have no entries and we can't enter
            // this loop.
            let index = unsafe { self.find_index_for_key(&entry.0).unreachable() };

            self.buckets[index] = Some(entry);
        }
    }

    /// Calculates the ideal index of a bucket for the provided `hashable` (or None if the HashMap
    /// has 0 capacity). This method doesn't consider hash collisions, see
    /// [`HashMap::find_index_for_key`] for that functionality.
    pub(crate) fn index_from_key<H: Hash + ?Sized>(&self, hashable: &H) -> Option<usize> {
        let key_hash = self.hasher.hash_one(hashable);
        key_hash.checked_rem(self.cap() as u64).map(|i| i as usize)
    }

    /// Finds the first valid index for the provided `key` (or None if the HashMap has 0 capacity).
    /// This is done by calculating the ideal index and then iterating until a bucket is found that
    /// is empty or has an equal key.
    pub(crate) fn find_index_for_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut index = self.index_from_key(key)?;

        // This is where Eq comes in: while there is a value at the current index, but the key
        // isn't equal, increment the index (wrapping at the capacity) and check again. The load
        // factor guarantees an empty bucket, so this terminates.
        while let Some((existing, _)) = &self.buckets[index] {
            let existing: &Q = existing.borrow();
            if existing == key {
                break;
            }

            // UNCHECKED: index_from_key returned some, so the cap is not 0.
            index = (index + 1) % self.cap();
        }

        // After that loop, index is either empty or contains an equal key.
        Some(index)
    }
}

/// Returns true if `index` lies within the cyclic range `(start, end]`.
const fn cyclic_range_contains(start: usize, end: usize, index: usize) -> bool {
    if start <= end {
        start < index && index <= end
    } else {
        start < index || index <= end
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Container for HashMap<K, V, B> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Iterable for HashMap<K, V, B> {
    type Value = V;

    type Cursor<'a> = MapCursor<'a, K, V, B> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        HashMap::cursor(self)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Map for HashMap<K, V, B> {
    type Key = K;

    fn has(&self, key: &K) -> bool {
        HashMap::has(self, key)
    }

    fn get(&self, key: &K) -> outcome::Result<&V> {
        HashMap::get(self, key)
    }

    fn put(&mut self, key: K, value: V) -> bool {
        HashMap::put(self, key, value)
    }

    fn drop(&mut self, key: &K) -> bool {
        HashMap::drop(self, key)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashMap<K, V, B> {
    fn default() -> Self {
        HashMap::new()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(value: I) -> Self {
        let mut map = HashMap::new();
        map.extend(value);
        map
    }
}

/// Merges the entries into the HashMap. Existing keys that aren't produced by the iterator are
/// retained, and the values of keys that are produced are overwritten.
impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default, const N: usize> From<[(K, V); N]> for HashMap<K, V, B> {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K: Hash + Eq, V, S, B: BuildHasher + Default> From<StdHashMap<K, V, S>> for HashMap<K, V, B> {
    fn from(value: StdHashMap<K, V, S>) -> Self {
        value.into_iter().collect()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> From<HashMap<K, V, B>> for Array<(K, V)> {
    fn from(value: HashMap<K, V, B>) -> Self {
        Array::from_iter_sized(value)
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for HashMap<K, V, B> {
    fn clone(&self) -> Self {
        let mut map = HashMap::with_cap_and_hasher(self.cap(), self.hasher.clone());
        for (key, value) in self.iter() {
            map.insert(key.clone(), value.clone());
        }
        map
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for HashMap<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.iter().all(|(key, value)| other.get(key).to_optional().into_option() == Some(value))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for HashMap<K, V, B> {}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashMap")
            .field("buckets", &DebugList(
                self.buckets.iter()
                    .map(|o| DebugRaw(match o {
                        Some((k, v)) => format!("({k:?}: {v:?})"),
                        None => "-".into(),
                    }))
            ))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Hash + Eq + Display, V: Display, B: BuildHasher> Display for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map()
            .entries(self.iter().map(|(k, v)| (DebugRaw(k.to_string()), DebugRaw(v.to_string()))))
            .finish()
    }
}
