//! A module containing [`HashMap`] and associated types.
//!
//! The other included types are for traversal: std iterators providing owned and borrowed
//! iteration over entries, keys or values, plus the snapshot based cursors. [`MapCursor`] borrows
//! the map, while [`KeySnapshot`] owns a copy of the keys so that the map can be modified while
//! it is traversed.
//!
//! As a note, there is no mutable iterator over keys because mutating the keys of a HashMap in
//! place would cause a logic error.
//!
//! [`HashMap`] is also re-exported under the parent module.

mod cursor;
mod hash_map;
mod iter;
mod tests;

pub use cursor::*;
pub use hash_map::*;
pub use iter::*;
