use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::types::DiagnosticRecord;

/// Parses a JSON array file into diagnostic records.
///
/// The file must contain a single top-level JSON array; unknown keys on
/// each object are ignored, missing keys deserialize as `None`.
pub fn load_records(path: &Path) -> Result<Vec<DiagnosticRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<DiagnosticRecord> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(records)
}
