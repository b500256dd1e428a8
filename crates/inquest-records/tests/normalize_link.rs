//! Normalization and linking over realistic model output.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

use inquest_config::{NormalizerConfig, ParserConfig};
use inquest_core::diagnostics::{ValidationRule, WarningCode};
use inquest_core::entities::{
    CausalFactor, Conclusion, Evidence, Finding, TimelineEntry, has_negative_phrasing,
};
use inquest_core::enums::{FactorCategory, RecordKind, Reliability, TimelineKind};
use inquest_records::normalize::{
    normalize_causal_factors, normalize_evidence, normalize_findings, normalize_timeline,
};
use inquest_records::{Record, link, normalize_text};

fn timeline_of(initiating: &[bool]) -> serde_json::Value {
    let entries: Vec<_> = initiating
        .iter()
        .enumerate()
        .map(|(i, flag)| {
            json!({
                "id": format!("TL-{}", i + 1),
                "timestamp": format!("2024-03-14T0{}:00:00", i + 1),
                "kind": "event",
                "description": format!("Entry {}", i + 1),
                "is_initiating_event": flag
            })
        })
        .collect();
    json!(entries)
}

#[test]
fn serialized_records_survive_recovery_and_normalization() {
    let evidence = vec![
        Evidence {
            id: "EV-1".to_string(),
            descriptor: "Flight data recorder download".to_string(),
            reliability: Reliability::High,
        },
        Evidence {
            id: "EV-2".to_string(),
            descriptor: "Crew interview, first officer".to_string(),
            reliability: Reliability::Medium,
        },
    ];
    let text = format!(
        "Here is the evidence register:\n```json\n{}\n```",
        serde_json::to_string_pretty(&evidence).unwrap()
    );

    let normalized = normalize_text(
        &text,
        RecordKind::Evidence,
        &ParserConfig::default(),
        &NormalizerConfig::default(),
    );
    let records: Vec<Record> = evidence.into_iter().map(Record::Evidence).collect();
    assert_eq!(normalized.records, records);
    assert!(normalized.diagnostics.is_clean());
}

fn fenced<T: serde::Serialize>(records: &T) -> String {
    format!(
        "Below are the records.\n```json\n{}\n```\nLet me know if more are needed.",
        serde_json::to_string_pretty(records).unwrap()
    )
}

fn round_trip(text: &str, kind: RecordKind) -> inquest_records::Normalized<Record> {
    normalize_text(
        text,
        kind,
        &ParserConfig::default(),
        &NormalizerConfig::default(),
    )
}

#[test]
fn serialized_causal_factors_round_trip() {
    let factors = vec![
        CausalFactor {
            id: "CF-1".to_string(),
            category: FactorCategory::Defense,
            title: "Lack of a second check".to_string(),
            description: "The procedure calls for an independent cross-check.\n\nNo second crew member was rostered for the shift.".to_string(),
            analysis_text: String::new(),
            evidence_support: vec!["EV-1".to_string()],
            timeline_entry_id: Some("TL-2".to_string()),
        },
        CausalFactor {
            id: "CF-2".to_string(),
            category: FactorCategory::Organization,
            title: "Inadequate fatigue risk management".to_string(),
            description: "Rosters exceeded the planned duty limits.".to_string(),
            analysis_text: "Duty periods were extended twice in the week before.".to_string(),
            evidence_support: vec!["EV-1".to_string(), "EV-3".to_string()],
            timeline_entry_id: None,
        },
    ];

    let normalized = round_trip(&fenced(&factors), RecordKind::CausalFactor);
    let records: Vec<Record> = factors.into_iter().map(Record::CausalFactor).collect();
    assert_eq!(normalized.records, records);
    assert!(normalized.diagnostics.is_clean());
}

#[test]
fn serialized_findings_round_trip() {
    let findings = vec![
        Finding {
            id: "F-1".to_string(),
            statement: "The fuel quantity indication was unserviceable.\n\nThe defect was deferred without a placard.".to_string(),
            evidence_support: vec!["EV-2".to_string()],
            timeline_refs: vec!["TL-1".to_string(), "TL-3".to_string()],
        },
        Finding {
            id: "F-2".to_string(),
            statement: "Maintenance records were incomplete.".to_string(),
            evidence_support: Vec::new(),
            timeline_refs: Vec::new(),
        },
    ];

    let normalized = round_trip(&fenced(&findings), RecordKind::Finding);
    let records: Vec<Record> = findings.into_iter().map(Record::Finding).collect();
    assert_eq!(normalized.records, records);
    assert!(normalized.diagnostics.is_clean());
}

#[test]
fn serialized_conclusions_round_trip() {
    let conclusions = vec![
        Conclusion {
            statement: "Fuel planning was deficient and went unchallenged.".to_string(),
            causal_factor_refs: vec!["CF-1".to_string(), "CF-2".to_string()],
        },
        Conclusion {
            statement: "The operator's oversight did not detect the practice.".to_string(),
            causal_factor_refs: Vec::new(),
        },
    ];

    let normalized = round_trip(&fenced(&conclusions), RecordKind::Conclusion);
    let records: Vec<Record> = conclusions.into_iter().map(Record::Conclusion).collect();
    assert_eq!(normalized.records, records);
    assert!(normalized.diagnostics.is_clean());
}

#[test]
fn serialized_timeline_round_trips() {
    let value = json!([{
        "id": "TL-1",
        "timestamp": "2024-03-14T09:30:00",
        "kind": "condition",
        "description": "Runway contaminated with standing water",
        "is_initiating_event": true,
        "evidence_ids": ["EV-1"]
    }]);
    let normalized = normalize_timeline(&value, &NormalizerConfig::default());
    let reserialized = serde_json::to_value(&normalized.records).unwrap();
    assert_eq!(reserialized, value);
}

#[test]
fn every_normalized_title_is_negatively_phrased() {
    let value = json!([
        {"id": "CF-1", "category": "production", "title": "Crew did not check gauges"},
        {"id": "CF-2", "category": "organisational", "title": "inadequate oversight of contractors"},
        {"id": "CF-3", "category": "workplace", "description": "Rosters ignored fatigue limits. More text."},
        {"id": "CF-4", "category": "defence", "title": "EGPWS alert was inhibited"},
        {"id": "CF-5", "category": "precondition", "title": "Absence of a go-around policy"}
    ]);
    let normalized = normalize_causal_factors(&value, &NormalizerConfig::default());
    assert_eq!(normalized.records.len(), 5);
    for factor in &normalized.records {
        assert!(has_negative_phrasing(&factor.title), "{}", factor.title);
    }
    assert_eq!(normalized.records[3].title, "Failure of EGPWS alert was inhibited");
}

#[rstest]
#[case(&[false, false, true, false, false], 0, 0)]
#[case(&[false, true, false, true, false], 0, 1)]
#[case(&[true, true, true, false, false], 0, 1)]
#[case(&[false, false, false, false, false], 1, 0)]
fn initiating_event_audit(
    #[case] flags: &[bool],
    #[case] expected_none: usize,
    #[case] expected_multiple: usize,
) {
    let normalized = normalize_timeline(&timeline_of(flags), &NormalizerConfig::default());
    assert_eq!(normalized.records.len(), flags.len());
    assert_eq!(
        normalized.diagnostics.count(WarningCode::NoInitiatingEvent),
        expected_none
    );
    assert_eq!(
        normalized.diagnostics.count(WarningCode::MultipleInitiatingEvents),
        expected_multiple
    );
}

#[test]
fn production_factor_on_subsequent_event_is_flagged() {
    let timeline = normalize_timeline(&timeline_of(&[true, false, false]), &NormalizerConfig::default());
    let factors = normalize_causal_factors(
        &json!([{
            "id": "CF-1",
            "category": "production",
            "title": "crew did not check gauges",
            "evidence_support": ["EV-1"],
            "timeline_entry_id": "TL-3"
        }]),
        &NormalizerConfig::default(),
    );
    let graph = link(
        timeline.records,
        vec![],
        vec![Finding {
            id: "F-1".to_string(),
            statement: "The fuel gauges were not cross-checked.".to_string(),
            evidence_support: vec!["EV-1".to_string()],
            timeline_refs: vec!["TL-3".to_string()],
        }],
        factors.records,
    );
    let factor = &graph.causal_factors[0];
    assert!(has_negative_phrasing(&factor.title));
    assert!(graph.violates_subsequent_event_category(factor));
    assert!(
        graph
            .diagnostics
            .has_failure(ValidationRule::SubsequentEventCategory, "CF-1")
    );
    assert_eq!(graph.diagnostics.failures.len(), 1);
}

#[test]
fn findings_link_to_factors_through_shared_evidence() {
    let config = NormalizerConfig::default();
    let evidence = normalize_evidence(
        &json!({"evidence": [
            {"id": "EV-1", "descriptor": "Fuel log"},
            {"id": "EV-2", "descriptor": "Maintenance record"}
        ]}),
        &config,
    );
    let findings = normalize_findings(
        &json!([
            {"id": "F-1", "statement": "Fuel was below minimums.", "evidence": ["EV-1"], "timeline_refs": []},
            {"id": "F-2", "statement": "Gauge was unserviceable.", "evidence": "EV-2"}
        ]),
        &config,
    );
    let factor = CausalFactor {
        id: "CF-1".to_string(),
        category: FactorCategory::Defense,
        title: "Inadequate fuel monitoring".to_string(),
        description: String::new(),
        analysis_text: String::new(),
        evidence_support: vec!["EV-2".to_string()],
        timeline_entry_id: None,
    };
    let graph = link(
        vec![TimelineEntry {
            id: "TL-1".to_string(),
            timestamp: None,
            kind: TimelineKind::Event,
            description: "Engine flamed out".to_string(),
            is_initiating_event: true,
            evidence_ids: vec!["EV-1".to_string()],
        }],
        evidence.records,
        findings.records,
        vec![factor],
    );
    assert_eq!(graph.analysis_sections[0].finding_refs, vec!["F-2"]);
    assert_eq!(graph.evidence_only, vec!["F-1", "F-2"]);
    assert!(graph.diagnostics.is_clean());
}
