use super::Cursor;
use crate::outcome;

/// Anything with a length.
pub trait Container {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A container that can be traversed with a [`Cursor`] over references to its values.
pub trait Iterable: Container {
    type Value;

    type Cursor<'a>: Cursor<Value = &'a Self::Value> where Self: 'a;

    /// Creates a new cursor, positioned on the first element.
    fn cursor(&self) -> Self::Cursor<'_>;
}

/// The key type produced by the cursor of an [`Iterable`] `I`.
pub type KeyOf<'a, I> = <<I as Iterable>::Cursor<'a> as Cursor>::Key;

/// A container that associates keys with values. Arrays are maps keyed by index.
pub trait Map: Iterable {
    type Key;

    /// Returns true if there is a value associated with `key`.
    fn has(&self, key: &Self::Key) -> bool;

    /// Returns the value associated with `key`, or an error describing why there isn't one.
    fn get(&self, key: &Self::Key) -> outcome::Result<&Self::Value>;

    /// Associates `value` with `key`, returning whether the value was stored.
    fn put(&mut self, key: Self::Key, value: Self::Value) -> bool;

    /// Removes the value associated with `key`, returning whether there was one.
    fn drop(&mut self, key: &Self::Key) -> bool;
}

/// A last-in, first-out container.
pub trait Stack: Container {
    type Value;

    /// Pushes `value` onto the top of the stack.
    fn push(&mut self, value: Self::Value);

    /// Removes and returns the top of the stack.
    fn pop(&mut self) -> outcome::Result<Self::Value>;

    /// Returns the top of the stack without removing it.
    fn peek(&self) -> outcome::Result<&Self::Value>;
}

/// A key and the value associated with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Pair<K, V> {
    pub const fn new(key: K, value: V) -> Pair<K, V> {
        Pair {
            key,
            value,
        }
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Pair::new(key, value)
    }
}
