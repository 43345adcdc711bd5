use std::fmt::{self, Debug, Formatter};
use std::result::Result as StdResult;

use super::{EmptyAccess, Error, Optional};
use crate::util::result::ResultExtension;

/// The outcome of a fallible operation: either a value or an [`Error`].
///
/// Every fallible operation in this crate returns one of these instead of panicking for expected
/// absence (a missing key, an empty stack, an out of bounds index). Reading the value of a failed
/// Result panics with the message of its error.
///
/// # Examples
/// ```
/// # use sx::outcome::Result;
/// let failed: Result<i32> = Result::err("boom");
/// assert!(!failed.is_ok());
/// assert_eq!(failed.error().to_string(), "boom");
/// assert_eq!(failed.value_or(10), 10);
/// ```
#[derive(Clone)]
pub struct Result<T> {
    pub(crate) inner: StdResult<T, Error>,
}

impl<T> Result<T> {
    /// Creates a successful Result holding `value`.
    pub const fn ok(value: T) -> Result<T> {
        Result {
            inner: Ok(value),
        }
    }

    /// Creates a failed Result with an [`Error::Failure`] carrying `message`.
    pub fn err(message: impl Into<String>) -> Result<T> {
        Result::from_error(Error::failure(message))
    }

    /// Creates a failed Result from any error convertible into [`Error`].
    pub fn from_error(error: impl Into<Error>) -> Result<T> {
        Result {
            inner: Err(error.into()),
        }
    }

    /// Returns true if the Result holds a value.
    pub const fn is_ok(&self) -> bool {
        self.inner.is_ok()
    }

    /// Returns true if the Result holds an error.
    pub const fn is_err(&self) -> bool {
        self.inner.is_err()
    }

    /// Returns the contained value.
    ///
    /// # Panics
    /// Panics with the message of the contained error if the Result failed.
    pub fn value(self) -> T {
        self.inner.throw()
    }

    /// Returns the contained value.
    ///
    /// # Panics
    /// Panics with `message` if the Result failed. The contained error is discarded.
    pub fn value_or_throw(self, message: &str) -> T {
        match self.inner {
            Ok(value) => value,
            Err(_) => Err::<T, _>(Error::failure(message)).throw(),
        }
    }

    /// Returns the contained value or `default` if the Result failed.
    pub fn value_or(self, default: T) -> T {
        self.inner.unwrap_or(default)
    }

    /// Returns the contained value or the std error, for use with `?`.
    pub fn try_value(self) -> StdResult<T, Error> {
        self.inner
    }

    /// Returns the contained error.
    ///
    /// # Panics
    /// Panics with [`EmptyAccess`] if the Result succeeded.
    pub fn error(&self) -> &Error {
        match &self.inner {
            Ok(_) => Err::<&Error, _>(EmptyAccess).throw(),
            Err(error) => error,
        }
    }

    /// Converts self into an [`Optional`], keeping the value and discarding any error.
    pub fn to_optional(self) -> Optional<T> {
        Optional::from_option(self.inner.ok())
    }

    /// Returns a Result holding a reference to the contained value, or a copy of the contained
    /// error.
    pub fn as_ref(&self) -> Result<&T> {
        match &self.inner {
            Ok(value) => Result::ok(value),
            Err(error) => Result::from_error(error.clone()),
        }
    }

    /// Applies `f` to the contained value, leaving an error untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Result<U> {
        Result {
            inner: self.inner.map(f),
        }
    }

    /// Converts self into a std [`Result`](std::result::Result).
    pub fn into_std(self) -> StdResult<T, Error> {
        self.inner
    }
}

impl<T: Default> Result<T> {
    /// Returns the contained value or the default value of `T` if the Result failed.
    pub fn value_or_default(self) -> T {
        self.inner.unwrap_or_default()
    }
}

impl<T, E: Into<Error>> From<StdResult<T, E>> for Result<T> {
    fn from(value: StdResult<T, E>) -> Self {
        Result {
            inner: value.map_err(Into::into),
        }
    }
}

impl<T> From<Result<T>> for StdResult<T, Error> {
    fn from(value: Result<T>) -> Self {
        value.inner
    }
}

impl<T: Debug> Debug for Result<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(value) => f.debug_tuple("Ok").field(value).finish(),
            Err(error) => f.debug_tuple("Err").field(&error.message()).finish(),
        }
    }
}
