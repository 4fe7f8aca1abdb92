//! Adapter implementations of the list ports.

pub mod memory;
