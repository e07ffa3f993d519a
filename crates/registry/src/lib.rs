//! Identifier-keyed registry of function definitions.
//!
//! The registry is filled once at start-up and read concurrently afterwards.
//! Lookups load an immutable snapshot without locking; registrations publish
//! a new snapshot with compare-and-swap.
//!
//! # Invariants
//!
//! - Concurrent registrations are linearizable: none is lost.
//! - An identifier maps to at most one definition at any time.

mod error;
mod policy;
mod registry;

#[cfg(test)]
mod tests;

pub use error::RegistryError;
pub use policy::{DuplicatePolicy, InsertAction};
pub use registry::FunctionRegistry;
