//! A small toolkit of explicit outcome types, cursor-driven containers and generic algorithms.
//!
//! # Purpose
//! Everything in this crate is built around a few uniform contracts rather than around concrete
//! types. A value that may be absent is an [`Optional`](outcome::Optional), an operation that may
//! fail returns an [`outcome::Result`], and every container can be traversed with a
//! [`Cursor`](collections::traits::Cursor) yielding `(key, value)` pairs. The functions in
//! [`algorithm`] only rely on those contracts, so they work the same for an
//! [`Array`](collections::contiguous::Array), a [`HashMap`](collections::hash::HashMap) or an
//! [`Optional`](outcome::Optional).
//!
//! # Error Handling
//! Expected absence, like a missing key or an empty stack, is always reported as a value. Reading a
//! value that isn't there is a contract violation instead, and panics with the message of the
//! matching [`Error`](outcome::Error). That split keeps the common path free of error plumbing,
//! while still making every failure explicit at the point where it can be handled.
//!
//! Errors are strongly typed: each kind is its own struct implementing
//! [`Error`](std::error::Error), and [`outcome::Error`] is an enum over all of them for static
//! dispatch. Panics can be turned back into values at a boundary with [`outcome::catch`], or into
//! an exit code at the top of a program with [`outcome::run`].
//!
//! # Mutation During Traversal
//! A borrowed cursor prevents its container from being mutated, as usual. For the cases where
//! elements need to be dropped while traversing, the containers also provide detached cursors
//! ([`IndexCursor`](collections::contiguous::array::IndexCursor) and
//! [`KeySnapshot`](collections::hash::map::KeySnapshot)) that only hold a position and take the
//! container as an argument at every step. Their behavior under mutation is documented on each
//! type.
//!
//! # Dependencies
//! Containers manage their own memory through [`std::alloc`] rather than wrapping [`Vec`]. Errors
//! lean on `derive_more` to remove the repetitive parts of an error enum, diagnostics go through
//! the `log` facade and the optional `json` feature (on by default) adds `serde` support.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod algorithm;
pub mod collections;
pub mod debug;
#[cfg(feature = "json")]
pub mod json;
pub mod outcome;
pub mod text;

pub(crate) mod util;
