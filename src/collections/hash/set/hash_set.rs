use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use super::{Difference, Intersection, Iter, SymmetricDifference, Union};
use crate::collections::hash::map::{HashMap, KeySnapshot, MapCursor};
use crate::collections::traits::{Container, Iterable, Map};
use crate::outcome::{self, Optional};
use crate::util::fmt::{DebugList, DebugRaw};

/// A set of unique values, stored as the keys of a [`HashMap`] with `()` as every value.
///
/// # Examples
/// ```
/// # use sx::collections::hash::HashSet;
/// let mut set: HashSet<&str> = HashSet::from(["a", "b"]);
/// assert!(set.has("a"));
/// assert!(set.put("c"));
/// assert!(set.drop("a"));
/// assert!(!set.has("a"));
/// assert_eq!(set.len(), 2);
/// ```
pub struct HashSet<K: Hash + Eq, B: BuildHasher = RandomState> {
    // Yay, we get to do the thing where unit type evaluates to a no-op.
    pub(crate) inner: HashMap<K, (), B>,
}

impl<K: Hash + Eq, B: BuildHasher + Default> HashSet<K, B> {
    /// Creates a new HashSet with capacity 0 and the default value for `B`.
    pub fn new() -> HashSet<K, B> {
        HashSet {
            inner: HashMap::new(),
        }
    }

    /// Creates a new HashSet with the provided `cap`acity and the default hasher.
    pub fn with_cap(cap: usize) -> HashSet<K, B> {
        HashSet {
            inner: HashMap::with_cap(cap),
        }
    }
}

impl<K: Hash + Eq, B: BuildHasher> HashSet<K, B> {
    pub fn with_hasher(hasher: B) -> HashSet<K, B> {
        HashSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<K, B> {
        HashSet {
            inner: HashMap::with_cap_and_hasher(cap, hasher),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub const fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Adds `item` to the set, returning true if it wasn't already present. An existing equal item
    /// isn't replaced.
    pub fn insert(&mut self, item: K) -> bool {
        if self.inner.has(&item) {
            return false;
        }
        self.inner.insert(item, ());
        true
    }

    /// Adds `item` to the set. Always returns true.
    pub fn put(&mut self, item: K) -> bool {
        self.inner.put(item, ())
    }

    pub fn has<Q>(&self, item: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.has(item)
    }

    /// Removes `item` from the set, returning the stored item if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> Optional<K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(item).map(|e| e.0)
    }

    /// Removes `item` from the set, returning whether it was present.
    pub fn drop<Q>(&mut self, item: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.drop(item)
    }

    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    pub fn iter(&self) -> Iter<'_, K> {
        self.into_iter()
    }

    /// Creates a cursor over the items of the set, with `()` as every value.
    pub fn cursor(&self) -> MapCursor<'_, K, (), B> {
        self.inner.cursor()
    }

    /// Creates a snapshot of the items of the set, which can be used to traverse it while it is
    /// being modified. Pass [`as_map`](HashSet::as_map) to the snapshot's methods.
    pub fn snapshot(&self) -> KeySnapshot<K>
    where
        K: Clone,
    {
        self.inner.snapshot()
    }

    /// Returns the underlying map, with `()` as every value.
    pub const fn as_map(&self) -> &HashMap<K, (), B> {
        &self.inner
    }

    /// Returns an iterator over the items in self that aren't in `other`.
    pub fn difference<'a>(&'a self, other: &'a HashSet<K, B>) -> Difference<'a, K, B> {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Returns an iterator over the items that are in exactly one of self and `other`.
    pub fn symmetric_difference<'a>(&'a self, other: &'a HashSet<K, B>) -> SymmetricDifference<'a, K, B> {
        SymmetricDifference {
            inner: self.difference(other).chain(other.difference(self)),
        }
    }

    /// Returns an iterator over the items that are in both self and `other`.
    pub fn intersection<'a>(&'a self, other: &'a HashSet<K, B>) -> Intersection<'a, K, B> {
        Intersection {
            inner: self.iter(),
            other,
        }
    }

    /// Returns an iterator over the items that are in either self or `other`, without duplicates.
    pub fn union<'a>(&'a self, other: &'a HashSet<K, B>) -> Union<'a, K, B> {
        Union {
            inner: self.iter().chain(other.difference(self)),
        }
    }

    /// Returns true if every item of self is also in `other`.
    pub fn is_subset(&self, other: &HashSet<K, B>) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.has(item))
    }

    /// Returns true if every item of `other` is also in self.
    pub fn is_superset(&self, other: &HashSet<K, B>) -> bool {
        other.is_subset(self)
    }
}

impl<K: Hash + Eq, B: BuildHasher> Container for HashSet<K, B> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K: Hash + Eq, B: BuildHasher> Iterable for HashSet<K, B> {
    type Value = ();

    type Cursor<'a> = MapCursor<'a, K, (), B> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        HashSet::cursor(self)
    }
}

impl<K: Hash + Eq, B: BuildHasher> Map for HashSet<K, B> {
    type Key = K;

    fn has(&self, key: &K) -> bool {
        HashSet::has(self, key)
    }

    fn get(&self, key: &K) -> outcome::Result<&()> {
        self.inner.get(key)
    }

    fn put(&mut self, key: K, _value: ()) -> bool {
        HashSet::put(self, key)
    }

    fn drop(&mut self, key: &K) -> bool {
        HashSet::drop(self, key)
    }
}

impl<K: Hash + Eq, B: BuildHasher + Default> Default for HashSet<K, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, B: BuildHasher + Default> FromIterator<K> for HashSet<K, B> {
    fn from_iter<I: IntoIterator<Item = K>>(value: I) -> Self {
        let mut set = HashSet::new();
        set.extend(value);
        set
    }
}

impl<K: Hash + Eq, B: BuildHasher> Extend<K> for HashSet<K, B> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().map(|item| (item, ())));
    }
}

impl<K: Hash + Eq, B: BuildHasher + Default, const N: usize> From<[K; N]> for HashSet<K, B> {
    fn from(value: [K; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashSet<K, B> {
    fn clone(&self) -> Self {
        HashSet {
            inner: self.inner.clone(),
        }
    }
}

impl<K: Hash + Eq, B: BuildHasher> PartialEq for HashSet<K, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<K: Hash + Eq, B: BuildHasher> Eq for HashSet<K, B> {}

impl<K: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for HashSet<K, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("contents", &DebugList(self.iter()))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("hasher", &self.inner.hasher)
            .finish()
    }
}

impl<K: Hash + Eq + Display, B: BuildHasher> Display for HashSet<K, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_set().entries(self.iter().map(|i| DebugRaw(i.to_string()))).finish()
    }
}
