//! Container types sharing one traversal protocol.
//!
//! [`Array`](contiguous::Array) is the growable indexed collection, [`HashMap`](hash::HashMap)
//! and [`HashSet`](hash::HashSet) are the hash-backed associative ones. All of them implement the
//! contracts in [`traits`], which is what the generic functions in
//! [`algorithm`](crate::algorithm) are written against.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves writing some of the more repetitive functionality.

pub mod contiguous;
pub mod hash;
pub mod traits;
