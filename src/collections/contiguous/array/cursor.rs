use std::iter::FusedIterator;

use super::Array;
use crate::collections::traits::{Cursor, Pairs};
use crate::outcome::{EmptyAccess, Result};
use crate::util::result::ResultExtension;

/// A [`Cursor`] over the `(index, value)` pairs of a slice, borrowed from an [`Array`] (or an
/// [`Optional`](crate::outcome::Optional)) for as long as the cursor lives.
///
/// Since the Array is borrowed, it can't be modified during the traversal. Use an [`IndexCursor`]
/// for that.
#[derive(Debug)]
pub struct ArrayCursor<'a, V> {
    pub(crate) slice: &'a [V],
    pub(crate) index: usize,
}

impl<'a, V> ArrayCursor<'a, V> {
    /// Creates a cursor positioned on the first element of `slice`.
    pub const fn new(slice: &'a [V]) -> ArrayCursor<'a, V> {
        ArrayCursor {
            slice,
            index: 0,
        }
    }
}

impl<V> Clone for ArrayCursor<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for ArrayCursor<'_, V> {}

impl<'a, V> Cursor for ArrayCursor<'a, V> {
    type Key = usize;
    type Value = &'a V;

    fn ok(&self) -> bool {
        self.index < self.slice.len()
    }

    fn key(&self) -> usize {
        if !self.ok() {
            Err::<(), _>(EmptyAccess).throw();
        }
        self.index
    }

    fn value(&self) -> &'a V {
        match self.slice.get(self.index) {
            Some(value) => value,
            None => Err(EmptyAccess).throw(),
        }
    }

    fn next(&mut self) {
        if self.ok() {
            self.index += 1;
        }
    }
}

impl<'a, V> IntoIterator for ArrayCursor<'a, V> {
    type Item = (usize, &'a V);
    type IntoIter = Pairs<Self>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs()
    }
}

impl<V> FusedIterator for Pairs<ArrayCursor<'_, V>> {}

/// A position in an [`Array`] that doesn't borrow it, so that the Array can be modified while it
/// is being traversed. Every operation that needs the elements takes the Array as an argument.
///
/// The cursor only remembers an index, which gives modifications during the traversal the
/// following effects:
/// - Dropping an element after the cursor shifts it towards the cursor, so it is still visited.
/// - Dropping the current element (or one before it) shifts the next element onto the cursor's
///   index, so [`next`](IndexCursor::next) skips exactly that element.
/// - Pushing extends the traversal, as long as the cursor hasn't finished yet.
///
/// Once [`ok`](IndexCursor::ok) has returned false the cursor is finished for good, even if the
/// Array grows again afterwards.
///
/// # Examples
/// ```
/// # use sx::collections::contiguous::Array;
/// let mut arr = Array::from(["a", "b", "c", "d"]);
/// let mut cursor = arr.index_cursor();
/// let mut seen = Vec::new();
/// while cursor.ok(&arr) {
///     if cursor.key() == 1 {
///         arr.drop(2);
///     }
///     seen.push(*cursor.value(&arr));
///     cursor.next();
/// }
/// assert_eq!(seen, ["a", "b", "d"]);
/// assert_eq!(arr.slice(), &["a", "b", "d"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexCursor {
    index: usize,
    finished: bool,
}

impl IndexCursor {
    /// Creates a cursor positioned on index 0.
    pub const fn new() -> IndexCursor {
        IndexCursor {
            index: 0,
            finished: false,
        }
    }

    /// Returns true if the cursor is positioned on an element of `arr`.
    pub fn ok<V>(&mut self, arr: &Array<V>) -> bool {
        if !self.finished && !arr.has(self.index) {
            self.finished = true;
        }
        !self.finished
    }

    /// Returns the index of the current element.
    ///
    /// # Panics
    /// Panics with [`EmptyAccess`] if the cursor has finished.
    pub fn key(&self) -> usize {
        if self.finished {
            Err::<(), _>(EmptyAccess).throw();
        }
        self.index
    }

    /// Returns the current element of `arr`.
    ///
    /// # Panics
    /// Panics with [`IndexOutOfBounds`](crate::outcome::IndexOutOfBounds) if the cursor isn't
    /// positioned on an element of `arr`.
    pub fn value<'a, V>(&self, arr: &'a Array<V>) -> &'a V {
        self.get(arr).value()
    }

    /// Returns the current element of `arr`, or an error if there is none.
    pub fn get<'a, V>(&self, arr: &'a Array<V>) -> Result<&'a V> {
        if self.finished {
            return Result::from_error(EmptyAccess);
        }
        arr.get(self.index)
    }

    /// Moves to the next index. Does nothing once the cursor has finished.
    pub const fn next(&mut self) {
        if !self.finished {
            self.index += 1;
        }
    }

    /// Converts the cursor into an [`ArrayCursor`] borrowing `arr`, at the same position.
    pub fn bind<V>(self, arr: &Array<V>) -> ArrayCursor<'_, V> {
        ArrayCursor {
            slice: arr.slice(),
            index: if self.finished { arr.len() } else { self.index },
        }
    }
}
