//! Task list state management.
//!
//! This module owns the ordered collection of task records, the derived
//! incomplete tally, and the change-event fan-out a view layer subscribes
//! to. Additions are synchronised optimistically with a remote service
//! through an abstract port. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The owning store in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
