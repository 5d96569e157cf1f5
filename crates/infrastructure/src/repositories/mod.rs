//! Repository implementations for data access.
//!
//! Each trait method maps to exactly one SQL statement from
//! [`crate::queries`].

mod patient_repository;
mod user_repository;

pub use patient_repository::*;
pub use user_repository::*;
