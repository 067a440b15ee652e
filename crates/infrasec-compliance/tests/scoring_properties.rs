//! # Scoring Invariants
//!
//! Property tests over arbitrary control batches, plus an end-to-end run
//! from CSV text to report.

use infrasec_compliance::{
    build_report, domain_breakdown, read_controls, recommend, score, RemediationCatalog,
    FALLBACK_REMEDIATION,
};
use infrasec_core::{AssessmentContext, ControlId, ControlRecord, ControlStatus};
use proptest::prelude::*;

fn arb_status() -> impl Strategy<Value = ControlStatus> {
    prop_oneof![
        Just(ControlStatus::Compliant),
        Just(ControlStatus::PartiallyCompliant),
        Just(ControlStatus::NonCompliant),
    ]
}

fn arb_record() -> impl Strategy<Value = ControlRecord> {
    (
        proptest::option::of("[A-C]\\.[0-9]{1,2}"),
        "[A-Z][a-z]{2,8}( [A-Z][a-z]{2,8})?",
        arb_status(),
        any::<bool>(),
    )
        .prop_map(|(id, name, status, evidence)| {
            ControlRecord::new(id.and_then(ControlId::new), name, status, evidence).unwrap()
        })
}

proptest! {
    #[test]
    fn counts_sum_to_total(records in prop::collection::vec(arb_record(), 1..64)) {
        let s = score(&records).unwrap();
        prop_assert_eq!(
            s.compliant_count() + s.partial_count() + s.noncompliant_count(),
            records.len()
        );
        prop_assert_eq!(s.total, records.len());
    }

    #[test]
    fn readiness_within_unit_interval(records in prop::collection::vec(arb_record(), 1..64)) {
        let s = score(&records).unwrap();
        prop_assert!((0.0..=1.0).contains(&s.primary_readiness));
        prop_assert!((0.0..=1.0).contains(&s.secondary_readiness));
    }

    #[test]
    fn recommendations_only_for_gaps(records in prop::collection::vec(arb_record(), 0..64)) {
        let map = recommend(&records, &RemediationCatalog::default());
        for r in &map {
            prop_assert!(records
                .iter()
                .any(|rec| rec.control_name == r.control_name && rec.status.is_gap()));
        }
        for rec in records.iter().filter(|r| r.status.is_gap()) {
            prop_assert!(map.contains(&rec.control_name));
        }
    }

    #[test]
    fn domain_totals_match_row_count(records in prop::collection::vec(arb_record(), 0..64)) {
        let sum: usize = domain_breakdown(&records).iter().map(|d| d.total()).sum();
        prop_assert_eq!(sum, records.len());
    }
}

#[test]
fn generated_names_fall_back_to_generic_text() {
    let records = vec![
        ControlRecord::new(None, "Printer Hardening", ControlStatus::NonCompliant, false).unwrap(),
    ];
    let map = recommend(&records, &RemediationCatalog::default());
    assert_eq!(map.get("Printer Hardening"), Some(FALLBACK_REMEDIATION));
}

#[test]
fn csv_to_report() {
    let csv = "\
Control ID,Control Name,Status,Evidence Available
A.5.1,Access Control,Compliant,Yes
A.12.3,Backup Policy,Partially Compliant,No
Other,Patch Management,Non-Compliant,No
";
    let records = read_controls(csv.as_bytes()).unwrap();
    let report = build_report(
        AssessmentContext::new("controls.csv"),
        &records,
        &RemediationCatalog::default(),
    )
    .unwrap();

    assert_eq!(report.summary.primary_readiness, 0.5);
    assert_eq!(report.summary.secondary_readiness, 0.33);

    let domains: Vec<&str> = report.domains.iter().map(|d| d.domain.as_str()).collect();
    assert_eq!(domains, ["A", "Other"]);

    let gaps: Vec<&str> = report
        .recommendations
        .iter()
        .map(|r| r.control_name.as_str())
        .collect();
    assert_eq!(gaps, ["Backup Policy", "Patch Management"]);
}

#[test]
fn reformatted_input_has_same_digest() {
    let a = "Control ID,Control Name,Status,Evidence Available\nA.1,Backup Policy,Compliant,Yes\n";
    let b = "status , control name,evidence available,control id\n compliant ,Backup Policy,y,A.1\n";
    let ra = build_report(
        AssessmentContext::new("a.csv"),
        &read_controls(a.as_bytes()).unwrap(),
        &RemediationCatalog::default(),
    )
    .unwrap();
    let rb = build_report(
        AssessmentContext::new("b.csv"),
        &read_controls(b.as_bytes()).unwrap(),
        &RemediationCatalog::default(),
    )
    .unwrap();
    assert_eq!(ra.input_digest, rb.input_digest);
}
