//! Taskboard: client-side task list state management.
//!
//! This crate provides the in-memory state layer for a task-tracking UI:
//! an ordered collection of task records, optimistic synchronisation of
//! additions with a remote service, and change notifications the view
//! layer consumes to re-render.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure record and event types with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for external collaborators
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`list`]: The task list store and its event-propagation contract

pub mod list;
