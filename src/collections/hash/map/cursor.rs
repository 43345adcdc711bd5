use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash};

use super::HashMap;
use crate::collections::contiguous::Array;
use crate::collections::traits::{Cursor, Pairs};
use crate::outcome::{self, EmptyAccess};
use crate::util::result::ResultExtension;

/// A [`Cursor`] over the entries of a [`HashMap`] that it borrows.
///
/// The keys are collected into an [`Array`] when the cursor is created, which fixes the order of
/// the traversal. Since the map is borrowed, every snapshotted key stays present until the cursor
/// is gone. The borrow lasts until the cursor is dropped, not just until its last use. Use a
/// [`KeySnapshot`] to modify the map while traversing it.
pub struct MapCursor<'a, K: Hash + Eq, V, B: BuildHasher> {
    pub(crate) map: &'a HashMap<K, V, B>,
    pub(crate) keys: Array<&'a K>,
    pub(crate) pos: usize,
}

impl<'a, K: Hash + Eq, V, B: BuildHasher> MapCursor<'a, K, V, B> {
    /// Creates a cursor positioned on the first key of `map`.
    pub fn new(map: &'a HashMap<K, V, B>) -> MapCursor<'a, K, V, B> {
        MapCursor {
            map,
            keys: map.keys().collect(),
            pos: 0,
        }
    }
}

impl<'a, K: Hash + Eq, V, B: BuildHasher> Cursor for MapCursor<'a, K, V, B> {
    type Key = &'a K;
    type Value = &'a V;

    fn ok(&self) -> bool {
        self.pos < self.keys.len()
    }

    fn key(&self) -> &'a K {
        match self.keys.slice().get(self.pos) {
            Some(&key) => key,
            None => Err(EmptyAccess).throw(),
        }
    }

    fn value(&self) -> &'a V {
        if !self.ok() {
            Err::<(), _>(EmptyAccess).throw();
        }
        self.map.get(self.key()).value()
    }

    fn next(&mut self) {
        if self.ok() {
            self.pos += 1;
        }
    }
}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for MapCursor<'a, K, V, B> {
    type Item = (&'a K, &'a V);
    type IntoIter = Pairs<Self>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Clone for MapCursor<'_, K, V, B> {
    fn clone(&self) -> Self {
        MapCursor {
            map: self.map,
            keys: self.keys.clone(),
            pos: self.pos,
        }
    }
}

impl<K: Hash + Eq + Debug, V, B: BuildHasher> Debug for MapCursor<'_, K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapCursor")
            .field("keys", &self.keys.slice())
            .field("pos", &self.pos)
            .finish()
    }
}

/// A copy of the keys of a [`HashMap`], used to traverse the map while it is being modified.
/// Every operation that needs the map takes it as an argument.
///
/// Before a key is visited, [`ok`](KeySnapshot::ok) checks that it is still present in the map
/// and scans forward past any that aren't, so:
/// - Keys dropped before the snapshot reaches them are skipped silently.
/// - Dropping the current key doesn't affect the value that has already been read.
/// - Keys inserted after the snapshot was taken are never visited.
///
/// # Examples
/// ```
/// # use sx::collections::hash::HashMap;
/// let mut map: HashMap<u8, char> = HashMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
/// let mut snapshot = map.snapshot();
/// let mut count = 0;
/// while snapshot.ok(&map) {
///     let key = *snapshot.key();
///     map.drop(&key);
///     map.put(key + 10, 'z');
///     count += 1;
///     snapshot.next();
/// }
/// assert_eq!(count, 3);
/// assert!(map.has(&11) && map.has(&12) && map.has(&13));
/// ```
#[derive(Debug, Clone)]
pub struct KeySnapshot<Q> {
    pub(crate) keys: Array<Q>,
    pub(crate) pos: usize,
    pub(crate) settled: bool,
}

impl<Q> KeySnapshot<Q> {
    /// Creates a snapshot that visits `keys` in order.
    pub const fn new(keys: Array<Q>) -> KeySnapshot<Q> {
        KeySnapshot {
            keys,
            pos: 0,
            settled: false,
        }
    }

    /// Returns true if the snapshot is positioned on a key that is present in `map`, skipping any
    /// keys that have been dropped since the snapshot was taken. The current key is only checked
    /// once, until [`next`](KeySnapshot::next) is called.
    pub fn ok<K, V, B>(&mut self, map: &HashMap<K, V, B>) -> bool
    where
        Q: Borrow<K>,
        K: Hash + Eq,
        B: BuildHasher,
    {
        if !self.settled {
            while let Some(key) = self.keys.slice().get(self.pos) {
                let key: &K = key.borrow();
                if map.has(key) {
                    break;
                }
                self.pos += 1;
            }
            self.settled = true;
        }

        self.pos < self.keys.len()
    }

    /// Returns the current key.
    ///
    /// # Panics
    /// Panics with [`EmptyAccess`] if every key has been visited.
    pub fn key(&self) -> &Q {
        match self.keys.slice().get(self.pos) {
            Some(key) => key,
            None => Err(EmptyAccess).throw(),
        }
    }

    /// Returns the value associated with the current key in `map`, or an error if the snapshot
    /// is exhausted or the key is no longer present.
    pub fn get<'m, K, V, B>(&self, map: &'m HashMap<K, V, B>) -> outcome::Result<&'m V>
    where
        Q: Borrow<K>,
        K: Hash + Eq,
        B: BuildHasher,
    {
        match self.keys.slice().get(self.pos) {
            Some(key) => {
                let key: &K = key.borrow();
                map.get(key)
            },
            None => outcome::Result::from_error(EmptyAccess),
        }
    }

    /// Returns the value associated with the current key in `map`.
    ///
    /// # Panics
    /// Panics if the snapshot is exhausted or the current key is no longer present in `map`.
    pub fn value<'m, K, V, B>(&self, map: &'m HashMap<K, V, B>) -> &'m V
    where
        Q: Borrow<K>,
        K: Hash + Eq,
        B: BuildHasher,
    {
        self.get(map).value()
    }

    /// Moves to the next snapshotted key. Does nothing once every key has been visited.
    pub const fn next(&mut self) {
        if self.pos < self.keys.len() {
            self.pos += 1;
            self.settled = false;
        }
    }

    /// Returns the number of snapshotted keys that haven't been passed yet, including any that
    /// have since been dropped from the map.
    pub const fn remaining(&self) -> usize {
        self.keys.len() - self.pos
    }
}
