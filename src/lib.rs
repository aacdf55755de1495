//! Centraline Lookup Service Library
//!
//! This library crate defines the core modules of the diagnostic-record
//! lookup service. It serves as the foundation for the binary executable
//! (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`store`**: The record store. Loads a static JSON dataset of
//!   vehicle-diagnostic records into memory once at startup and exposes
//!   read-only access for the lifetime of the process.
//! - **`query`**: The query engine. Stateless filter operations over the
//!   record store: exact-triple lookup, SPN/FMI lookup, SDF-code lookup,
//!   and the distinct controller-id projection.
//! - **`api`**: The HTTP layer. Axum handlers, the declarative query
//!   parameter contract, and the JSON error envelope.

pub mod api;
pub mod query;
pub mod store;
