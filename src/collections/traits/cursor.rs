/// A traversal handle over the `(key, value)` pairs of a container.
///
/// A fresh cursor is positioned on the first element, or is immediately invalid if there are no
/// elements. [`next`](Cursor::next) moves it forward by one. Once [`ok`](Cursor::ok) returns false
/// it keeps returning false; cursors can't be restarted, a new one has to be created instead.
///
/// A cursor isn't an [`Iterator`] itself, as both traits define `next`. Every cursor in this crate
/// converts into one with [`IntoIterator`] or [`pairs`](Cursor::pairs), yielding the same pairs.
///
/// # Examples
/// ```
/// # use sx::collections::contiguous::Array;
/// # use sx::collections::traits::Cursor;
/// let arr = Array::from(['a', 'b']);
/// let mut cursor = arr.cursor();
/// let mut seen = Vec::new();
/// while cursor.ok() {
///     seen.push((cursor.key(), *cursor.value()));
///     cursor.next();
/// }
/// assert_eq!(seen, [(0, 'a'), (1, 'b')]);
/// ```
pub trait Cursor {
    type Key;
    type Value;

    /// Returns true if the cursor is positioned on an element.
    fn ok(&self) -> bool;

    /// Returns the key of the current element.
    ///
    /// # Panics
    /// Panics with [`EmptyAccess`](crate::outcome::EmptyAccess) if [`ok`](Cursor::ok) is false.
    fn key(&self) -> Self::Key;

    /// Returns the value of the current element.
    ///
    /// # Panics
    /// Panics with [`EmptyAccess`](crate::outcome::EmptyAccess) if [`ok`](Cursor::ok) is false.
    fn value(&self) -> Self::Value;

    /// Moves to the next element. Does nothing once the cursor is exhausted.
    fn next(&mut self);

    /// Converts the cursor into an [`Iterator`] over the remaining pairs.
    fn pairs(self) -> Pairs<Self>
    where
        Self: Sized,
    {
        Pairs(self)
    }
}

/// An [`Iterator`] over the remaining `(key, value)` pairs of a [`Cursor`].
#[derive(Debug, Clone)]
pub struct Pairs<C>(pub(crate) C);

impl<C: Cursor> Iterator for Pairs<C> {
    type Item = (C::Key, C::Value);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.0.ok() {
            return None;
        }

        let item = (self.0.key(), self.0.value());
        self.0.next();
        Some(item)
    }
}
