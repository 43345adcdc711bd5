//! Conversions from text into primitive values, reported through [`outcome::Result`].
//!
//! [`outcome::Result`]: crate::outcome::Result

mod parse;
mod tests;

pub use parse::*;
