//! The contracts shared by every container in this crate.
//!
//! [`Cursor`] is the four operation traversal protocol, [`Container`] the emptiness contract,
//! [`Iterable`] ties a container to its cursor and [`Map`] adds keyed access on top. Generic code,
//! such as the functions in [`algorithm`](crate::algorithm), is written purely against these.

mod container;
mod cursor;

pub use container::*;
pub use cursor::*;
