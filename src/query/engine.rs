use std::collections::BTreeSet;

use crate::store::DiagnosticRecord;

/// Exact-triple lookup: every record whose `modello`, `ECU` and `SPN`
/// equal the given values. Case-sensitive string equality, store order
/// preserved.
pub fn search_exact(
    records: &[DiagnosticRecord],
    model: &str,
    ecu: &str,
    spn: &str,
) -> Vec<DiagnosticRecord> {
    records
        .iter()
        .filter(|r| r.model() == model && r.ecu() == ecu && r.spn() == spn)
        .cloned()
        .collect()
}

/// SPN/FMI lookup, optionally narrowed to a single model.
pub fn search_spn_fmi(
    records: &[DiagnosticRecord],
    spn: &str,
    fmi: &str,
    model: Option<&str>,
) -> Vec<DiagnosticRecord> {
    records
        .iter()
        .filter(|r| {
            if r.spn() != spn || r.fmi() != fmi {
                return false;
            }
            match model {
                Some(m) => r.model() == m,
                None => true,
            }
        })
        .cloned()
        .collect()
}

/// SDF-code lookup for a model.
///
/// The stored `Codice SDF` value is trimmed before comparison. The other
/// lookups compare stored values untrimmed; the asymmetry is the contract
/// inherited from the source dataset and must not be normalized away.
pub fn search_sdf_code(
    records: &[DiagnosticRecord],
    model: &str,
    sdf_code: &str,
) -> Vec<DiagnosticRecord> {
    records
        .iter()
        .filter(|r| r.model() == model && r.sdf_code().trim() == sdf_code)
        .cloned()
        .collect()
}

/// Distinct `ID_CENTRALINA` values for a model, sorted ascending.
///
/// Empty controller ids are skipped; duplicates collapse by exact string
/// equality.
pub fn distinct_controller_ids(records: &[DiagnosticRecord], model: &str) -> Vec<String> {
    let ids: BTreeSet<String> = records
        .iter()
        .filter(|r| r.model() == model)
        .map(|r| r.controller_id())
        .filter(|id| !id.is_empty())
        .map(|id| id.to_string())
        .collect();

    ids.into_iter().collect()
}
