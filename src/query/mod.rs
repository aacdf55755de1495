//! Query Engine Module
//!
//! The core component responsible for answering filter queries against the
//! record store.
//!
//! ## Overview
//! Every operation is a stateless pure function of (records, parameters):
//! a single linear scan with a per-operation predicate, or a deduplicated
//! sorted projection of one field. The store is read-only, so any number
//! of queries may run concurrently without coordination.
//!
//! ## Operations
//! - **`search_exact`**: exact match on (modello, ECU, SPN).
//! - **`search_spn_fmi`**: match on (SPN, FMI) with optional model filter.
//! - **`search_sdf_code`**: match on modello plus trimmed `Codice SDF`.
//! - **`distinct_controller_ids`**: sorted distinct `ID_CENTRALINA`
//!   projection for one model.
//!
//! Matching is case-sensitive exact string equality throughout; parameter
//! trimming happens once in the API layer before dispatch.

pub mod engine;

pub use engine::{distinct_controller_ids, search_exact, search_sdf_code, search_spn_fmi};

#[cfg(test)]
mod tests;
