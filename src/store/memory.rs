use std::path::Path;

use super::loader;
use super::types::DiagnosticRecord;

/// Immutable in-memory store of diagnostic records.
///
/// Built once at startup, shared read-only (behind an `Arc`) with every
/// request handler. No mutation API exists after construction, so
/// concurrent scans need no locking.
pub struct RecordStore {
    records: Vec<DiagnosticRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<DiagnosticRecord>) -> Self {
        Self { records }
    }

    /// Loads the store from a JSON array file.
    ///
    /// On any failure (missing file, unreadable, malformed JSON) the store
    /// initializes empty and a diagnostic is logged: the service stays up
    /// and answers every query with not-found instead of crashing.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match loader::load_records(path) {
            Ok(records) => {
                tracing::info!("Loaded {} records from {}", records.len(), path.display());
                Self::new(records)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to load records from {}: {:#}. Starting with an empty store",
                    path.display(),
                    e
                );
                Self::new(Vec::new())
            }
        }
    }

    /// Read-only view of the full record sequence, in load order.
    pub fn records(&self) -> &[DiagnosticRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
