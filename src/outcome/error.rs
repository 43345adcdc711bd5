use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Reading the value of an empty [`Optional`](super::Optional), the value of a failed
/// [`Result`](super::Result), or the error of a successful one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyAccess;

impl Display for EmptyAccess {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to access the value of an empty outcome!")
    }
}

impl StdError for EmptyAccess {}

/// Positional access outside of `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl StdError for IndexOutOfBounds {}

/// A keyed lookup for a key that isn't present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyNotFound;

impl Display for KeyNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key does not exist!")
    }
}

impl StdError for KeyNotFound {}

/// A checked downcast that failed, naming the stored type and the requested one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMismatch {
    pub from: &'static str,
    pub to: &'static str,
}

impl Display for TypeMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot typecast from '{}' to '{}'!", self.from, self.to)
    }
}

impl StdError for TypeMismatch {}

/// Text that couldn't be converted into the requested type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub input: String,
    pub target: &'static str,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot convert '{}' to {}!", self.input, self.target)
    }
}

impl StdError for ParseError {}

/// A failure described only by its message, as created by
/// [`Result::err`](super::Result::err) or recovered from a panic by [`catch`](super::catch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub message: String,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Failure {
        Failure {
            message: message.into(),
        }
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for Failure {}

/// A JSON encoding or decoding failure, reduced to its message and position so that it can be
/// cloned and compared.
#[cfg(feature = "json")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

#[cfg(feature = "json")]
impl Display for JsonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(feature = "json")]
impl StdError for JsonError {}

#[cfg(feature = "json")]
impl From<serde_json::Error> for JsonError {
    fn from(value: serde_json::Error) -> Self {
        JsonError {
            message: value.to_string(),
            line: value.line(),
            column: value.column(),
        }
    }
}

/// Every way an operation in this crate can fail.
///
/// Each variant wraps a dedicated type, so callers that only care about one kind of failure can
/// use [`TryInto`] to get at it, or the generated `is_*` methods to test for it.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum Error {
    EmptyAccess(EmptyAccess),
    IndexOutOfBounds(IndexOutOfBounds),
    KeyNotFound(KeyNotFound),
    TypeMismatch(TypeMismatch),
    Parse(ParseError),
    Failure(Failure),
    #[cfg(feature = "json")]
    Json(JsonError),
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Json(value.into())
    }
}

impl Error {
    /// Creates an [`Error::Failure`] with the provided message.
    pub fn failure(message: impl Into<String>) -> Error {
        Error::Failure(Failure::new(message))
    }

    /// Returns the human readable message for this error. The same text is used when the error is
    /// thrown.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
