use std::fmt::{self, Debug, Display, Formatter};

use super::{EmptyAccess, Error};
use crate::collections::contiguous::array::ArrayCursor;
use crate::collections::traits::{Container, Iterable};
use crate::util::result::ResultExtension;

/// A value that may or may not be present.
///
/// Optional is a pure value type: none of its operations mutate it, they either consume it or
/// produce a new instance. Reading the value of an empty Optional is a contract violation and
/// panics, use [`value_or`](Optional::value_or) or [`is_empty`](Optional::is_empty) to stay clear
/// of that path.
///
/// # Examples
/// ```
/// # use sx::outcome::Optional;
/// assert!(Optional::<u8>::empty().is_empty());
/// assert_eq!(Optional::from(5).value(), 5);
/// assert_eq!(Optional::empty().value_or(7), 7);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T>(pub(crate) Option<T>);

impl<T> Optional<T> {
    /// Creates an empty Optional.
    pub const fn empty() -> Optional<T> {
        Optional(None)
    }

    /// Creates an Optional from a std [`Option`], present exactly when `option` is [`Some`].
    pub const fn from_option(option: Option<T>) -> Optional<T> {
        Optional(option)
    }

    /// Returns true if no value is present.
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns 1 if a value is present, otherwise 0.
    pub const fn len(&self) -> usize {
        match self.0 {
            Some(_) => 1,
            None => 0,
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    /// Panics with [`EmptyAccess`] if the Optional is empty.
    pub fn value(self) -> T {
        self.try_value().throw()
    }

    /// Returns the contained value or an [`Error::EmptyAccess`], for use with `?`.
    pub fn try_value(self) -> Result<T, Error> {
        self.0.ok_or(Error::EmptyAccess(EmptyAccess))
    }

    /// Returns the contained value or `default` if the Optional is empty.
    pub fn value_or(self, default: T) -> T {
        self.0.unwrap_or(default)
    }

    /// Returns the contained value or the result of `f` if the Optional is empty.
    pub fn value_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        self.0.unwrap_or_else(f)
    }

    /// Returns a reference to the contained value, if any.
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional(self.0.as_ref())
    }

    /// Applies `f` to the contained value, if any.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        Optional(self.0.map(f))
    }

    /// Converts self into a std [`Option`].
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    /// Creates a cursor over the value, keyed by index 0, or an invalid cursor if there is none.
    pub fn cursor(&self) -> ArrayCursor<'_, T> {
        ArrayCursor::new(self.0.as_slice())
    }
}

impl<T> Container for Optional<T> {
    fn len(&self) -> usize {
        Optional::len(self)
    }
}

impl<T> Iterable for Optional<T> {
    type Value = T;

    type Cursor<'a> = ArrayCursor<'a, T> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        Optional::cursor(self)
    }
}

impl<T: Default> Optional<T> {
    /// Returns the contained value or the default value of `T` if the Optional is empty.
    pub fn value_or_default(self) -> T {
        self.0.unwrap_or_default()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Optional(Some(value))
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}

impl<T: Debug> Debug for Optional<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => f.debug_tuple("Optional").field(value).finish(),
            None => write!(f, "Optional(-)"),
        }
    }
}

impl<T: Display> Display for Optional<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "-"),
        }
    }
}
