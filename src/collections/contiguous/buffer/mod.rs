//! A module containing [`Buffer`], the fixed-size heap allocation that backs both
//! [`Array`](super::Array) and [`HashMap`](crate::collections::hash::HashMap).
//!
//! [`Buffer`] is also re-exported under the parent module.

mod buffer;

pub use buffer::*;
