//! Domain types, errors, and pure generation helpers shared by all crates.

pub mod error;
pub mod generation;
pub mod types;
