//! A module containing [`Array`] and associated types.
//!
//! Besides the Array itself, this module holds [`IntoIter`] for owned iteration, and the two cursor
//! types: [`ArrayCursor`] which borrows an Array, and [`IndexCursor`] which only remembers a
//! position so that the Array can be modified during traversal. [`Iter`](std::slice::Iter) and
//! [`IterMut`](std::slice::IterMut) from [`std::slice`] are used for borrowed iteration.
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod cursor;
mod iter;

pub use array::*;
pub use cursor::*;
pub use iter::*;
