//! JSON support through [`serde`], enabled by the `json` feature.
//!
//! Every container implements [`Serialize`](serde::Serialize), and every owning container also
//! implements [`Deserialize`](serde::Deserialize). Arrays and sets are encoded as sequences, maps as
//! objects and [`Optional`](crate::outcome::Optional) as a nullable value.
//!
//! The helpers here wrap [`serde_json`] and report failures as
//! [`Error::Json`](crate::outcome::Error::Json), which keeps the position of the problem.

mod helpers;
mod impls;

pub use helpers::*;
