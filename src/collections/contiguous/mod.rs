//! Contiguous collection types. Namely [`Array`], the growable indexed collection, and the
//! [`Buffer`] it stores its elements in.
#![warn(missing_docs)]

pub mod array;
pub mod buffer;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use buffer::Buffer;
