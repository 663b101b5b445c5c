//! Domain layer shared by the persistence and HTTP crates.
//!
//! Deliberately free of internal dependencies so both the repository
//! layer and any future CLI tooling can use it.

pub mod error;
pub mod pagination;
pub mod types;
pub mod validate;
