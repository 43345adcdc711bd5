//! Hash-backed collection types: [`HashMap`] and [`HashSet`], which is a HashMap with a
//! zero-sized value.

pub mod map;
pub mod set;

#[doc(inline)]
pub use map::HashMap;
#[doc(inline)]
pub use set::HashSet;
