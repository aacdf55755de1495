//! Query Engine Tests
//!
//! Validates the four filter operations against hand-built record sets.
//!
//! ## Test Scopes
//! - **Exact-triple**: all-field equality, ordering, absent-field handling.
//! - **SPN/FMI**: required pair plus optional model narrowing.
//! - **SDF code**: stored-value trimming behavior.
//! - **Distinct controller ids**: dedup, sort, empty-value filtering.

#[cfg(test)]
mod tests {
    use crate::query::{
        distinct_controller_ids, search_exact, search_sdf_code, search_spn_fmi,
    };
    use crate::store::DiagnosticRecord;

    fn record(
        model: &str,
        ecu: &str,
        spn: &str,
        fmi: &str,
        sdf: &str,
        controller: &str,
    ) -> DiagnosticRecord {
        let opt = |s: &str| {
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };
        DiagnosticRecord {
            model: opt(model),
            ecu: opt(ecu),
            spn: opt(spn),
            fmi: opt(fmi),
            sdf_code: opt(sdf),
            controller_id: opt(controller),
        }
    }

    fn fixture() -> Vec<DiagnosticRecord> {
        vec![
            record("A", "E1", "100", "3", "P0100", "C2"),
            record("A", "E1", "100", "4", "P0101", "C1"),
            record("B", "E1", "100", "3", "P0100", "C9"),
            record("B", "E2", "200", "5", " P0200 ", "C3"),
        ]
    }

    // ============================================================
    // EXACT-TRIPLE LOOKUP
    // ============================================================

    #[test]
    fn test_exact_matches_all_three_fields() {
        let records = fixture();
        let results = search_exact(&records, "A", "E1", "100");

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.model() == "A"));
        assert!(results.iter().all(|r| r.ecu() == "E1"));
        assert!(results.iter().all(|r| r.spn() == "100"));
    }

    #[test]
    fn test_exact_every_stored_record_is_findable() {
        let records = fixture();

        for r in &records {
            let results = search_exact(&records, r.model(), r.ecu(), r.spn());
            assert!(
                results.contains(r),
                "record ({}, {}, {}) not found by its own triple",
                r.model(),
                r.ecu(),
                r.spn()
            );
        }
    }

    #[test]
    fn test_exact_preserves_store_order() {
        let records = fixture();
        let results = search_exact(&records, "A", "E1", "100");

        // First A record carries C2, second carries C1
        assert_eq!(results[0].controller_id(), "C2");
        assert_eq!(results[1].controller_id(), "C1");
    }

    #[test]
    fn test_exact_no_match_is_empty() {
        let records = fixture();
        assert!(search_exact(&records, "A", "E1", "999").is_empty());
    }

    #[test]
    fn test_exact_is_case_sensitive() {
        let records = fixture();
        assert!(search_exact(&records, "a", "E1", "100").is_empty());
    }

    #[test]
    fn test_exact_does_not_trim_stored_values() {
        let records = vec![record("A", " E1 ", "100", "", "", "")];

        // Unlike the SDF lookup, stored values here compare untrimmed
        assert!(search_exact(&records, "A", "E1", "100").is_empty());
        assert_eq!(search_exact(&records, "A", " E1 ", "100").len(), 1);
    }

    #[test]
    fn test_exact_absent_field_matches_empty_string() {
        let records = vec![record("A", "", "100", "", "", "")];

        assert_eq!(search_exact(&records, "A", "", "100").len(), 1);
    }

    // ============================================================
    // SPN/FMI LOOKUP
    // ============================================================

    #[test]
    fn test_spn_fmi_without_model_spans_all_models() {
        let records = fixture();
        let results = search_spn_fmi(&records, "100", "3", None);

        // Union across models A and B
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].model(), "A");
        assert_eq!(results[1].model(), "B");
    }

    #[test]
    fn test_spn_fmi_with_model_narrows() {
        let records = fixture();
        let results = search_spn_fmi(&records, "100", "3", Some("B"));

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].controller_id(), "C9");
    }

    #[test]
    fn test_spn_fmi_requires_both_to_match() {
        let records = fixture();

        assert!(search_spn_fmi(&records, "100", "9", None).is_empty());
        assert!(search_spn_fmi(&records, "999", "3", None).is_empty());
    }

    // ============================================================
    // SDF-CODE LOOKUP
    // ============================================================

    #[test]
    fn test_sdf_trims_stored_value() {
        let records = fixture();

        // Stored value is " P0200 "; the trimmed comparison still matches
        let results = search_sdf_code(&records, "B", "P0200");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].ecu(), "E2");
    }

    #[test]
    fn test_sdf_requires_model_match() {
        let records = fixture();
        assert!(search_sdf_code(&records, "A", "P0200").is_empty());
    }

    #[test]
    fn test_sdf_no_match_is_empty() {
        let records = fixture();
        assert!(search_sdf_code(&records, "A", "P9999").is_empty());
    }

    // ============================================================
    // DISTINCT CONTROLLER IDS
    // ============================================================

    #[test]
    fn test_distinct_ids_sorted_ascending() {
        let records = fixture();
        let ids = distinct_controller_ids(&records, "A");

        // C2 appears before C1 in the store but the output sorts
        assert_eq!(ids, vec!["C1".to_string(), "C2".to_string()]);
    }

    #[test]
    fn test_distinct_ids_deduplicates() {
        let records = vec![
            record("A", "E1", "1", "1", "", "C1"),
            record("A", "E2", "2", "2", "", "C1"),
        ];

        assert_eq!(distinct_controller_ids(&records, "A"), vec!["C1".to_string()]);
    }

    #[test]
    fn test_distinct_ids_skips_empty_values() {
        let records = vec![
            record("A", "E1", "1", "1", "", ""),
            record("A", "E2", "2", "2", "", "C5"),
        ];

        let ids = distinct_controller_ids(&records, "A");

        assert_eq!(ids, vec!["C5".to_string()]);
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn test_distinct_ids_unknown_model_is_empty() {
        let records = fixture();
        assert!(distinct_controller_ids(&records, "Z").is_empty());
    }

    #[test]
    fn test_distinct_ids_on_empty_store() {
        assert!(distinct_controller_ids(&[], "A").is_empty());
    }
}
