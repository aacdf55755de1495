//! Record Store Module
//!
//! Holds the immutable sequence of vehicle-diagnostic records.
//!
//! ## Core Concepts
//! - **Loading**: The dataset is a static JSON array file parsed once at
//!   startup. A load failure degrades the service (empty store, every
//!   query answers not-found) instead of aborting the process.
//! - **Immutability**: No write path exists after construction; the store
//!   is shared across request handlers as a read-only reference.

pub mod loader;
pub mod memory;
pub mod types;

pub use memory::RecordStore;
pub use types::DiagnosticRecord;
