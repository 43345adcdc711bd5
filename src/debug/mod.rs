//! A switchable debug channel, routed to the [`log`] facade.
//!
//! [`DebugScope`] is ordinary configuration: it is created by the caller and passed by reference to
//! whatever wants to emit debug messages. Nothing is installed globally, and nothing is printed
//! unless a `log` implementation is installed and the scope is switched on.

mod scope;
mod tests;

pub use scope::*;
