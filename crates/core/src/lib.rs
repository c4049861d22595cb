//! Savings Goals Core - Domain entities, services, and traits.
//!
//! This crate contains the business rules of the savings goals service.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod errors;
pub mod goals;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
