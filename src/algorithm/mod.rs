//! Generic search, filter and mapping functions written purely against the contracts in
//! [`collections::traits`](crate::collections::traits), plus the checked downcast used at
//! dynamically typed boundaries.
//!
//! None of these functions know about concrete container types: anything implementing
//! [`Iterable`](crate::collections::traits::Iterable) can be searched, and any
//! [`Cursor`](crate::collections::traits::Cursor) can be mapped.

mod cast;
mod search;
mod tests;

pub use cast::*;
pub use search::*;
