//! Outcome types: [`Optional`] for presence or absence and [`Result`] for success or failure,
//! along with the [`Error`] taxonomy they share.
//!
//! Expected absence (a missing key, an empty stack) is always reported through these types. Reading
//! a value that isn't there is a contract violation which panics with the message of the relevant
//! error. [`catch`] and [`run`] are the boundaries at which such panics are turned back into values.
//!
//! Like [`std::io::Result`], [`Result`] is meant to be used through its module path
//! (`outcome::Result`) wherever the std type is also in scope.

mod error;
mod fault;
mod optional;
mod result;

pub use error::*;
pub use fault::*;
pub use optional::*;
pub use result::*;
