//! End-to-end assembly over a small but complete investigation.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;

use inquest_config::ReportConfig;
use inquest_core::diagnostics::{ValidationRule, WarningCode};
use inquest_core::entities::{CausalFactor, Conclusion, Evidence, Finding, TimelineEntry};
use inquest_core::enums::{FactorCategory, Reliability, TimelineKind};
use inquest_core::render::Block;
use inquest_records::link;
use inquest_report::{Assembler, AssemblyError, Enrichment, Report, ReportInput, Section, generate};

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

fn entry(id: &str, minute: u32, initiating: bool, description: &str, evidence: &[&str]) -> TimelineEntry {
    TimelineEntry {
        id: id.to_string(),
        timestamp: NaiveDate::from_ymd_opt(2024, 3, 14).and_then(|d| d.and_hms_opt(9, minute, 0)),
        kind: TimelineKind::Event,
        description: description.to_string(),
        is_initiating_event: initiating,
        evidence_ids: ids(evidence),
    }
}

fn finding(id: &str, statement: &str, evidence: &[&str], timeline: &[&str]) -> Finding {
    Finding {
        id: id.to_string(),
        statement: statement.to_string(),
        evidence_support: ids(evidence),
        timeline_refs: ids(timeline),
    }
}

fn factor(id: &str, category: FactorCategory, title: &str, evidence: &[&str]) -> CausalFactor {
    CausalFactor {
        id: id.to_string(),
        category,
        title: title.to_string(),
        description: String::new(),
        analysis_text: String::new(),
        evidence_support: ids(evidence),
        timeline_entry_id: None,
    }
}

fn evidence(id: &str, descriptor: &str) -> Evidence {
    Evidence {
        id: id.to_string(),
        descriptor: descriptor.to_string(),
        reliability: Reliability::High,
    }
}

fn input() -> ReportInput {
    let mut oversight = factor(
        "CF-1",
        FactorCategory::Organization,
        "Inadequate maintenance oversight",
        &["EV-1", "EV-3"],
    );
    oversight.analysis_text = "The operator did not audit its contractor.".to_string();

    let mut gauges = factor(
        "CF-2",
        FactorCategory::Production,
        "Failure of crew to check gauges",
        &["EV-2"],
    );
    gauges.description = "The crew did not check the fuel gauges after the warning.".to_string();
    gauges.timeline_entry_id = Some("TL-3".to_string());

    ReportInput {
        timeline: vec![
            entry("TL-1", 0, true, "Engine 2 fire warning", &["EV-1"]),
            entry("TL-2", 10, false, "Crew discharged extinguisher", &["EV-2"]),
            entry("TL-3", 20, false, "Aircraft diverted", &["EV-3"]),
        ],
        evidence: vec![
            evidence("EV-1", "Flight data recorder"),
            evidence("EV-2", "Cockpit voice recorder"),
            evidence("EV-3", "Maintenance records"),
            evidence("EV-4", "Manufacturer service bulletin"),
        ],
        findings: vec![
            finding("F-1", "A fire warning activated for engine 2", &["EV-1"], &["TL-1"]),
            finding("F-2", "The crew discharged one extinguisher bottle", &["EV-2"], &["TL-2"]),
            finding("F-3", "Maintenance was overdue.", &["EV-3"], &["TL-3"]),
            finding("F-4", "A service bulletin had been issued", &["EV-4"], &[]),
        ],
        causal_factors: vec![
            oversight,
            gauges,
            factor("CF-3", FactorCategory::Precondition, "Lack of crew rest", &["EV-9"]),
        ],
        ..ReportInput::default()
    }
}

fn texts(report: &Report) -> Vec<&str> {
    report.blocks.iter().filter_map(Block::text).collect()
}

fn has(report: &Report, text: &str) -> bool {
    texts(report).contains(&text)
}

#[test]
fn analysis_cites_positional_finding_paragraphs() {
    let report = generate(input(), &ReportConfig::default());
    assert!(has(&report, "4.1 Findings of Fact"));
    assert!(has(&report, "4.1.1 A fire warning activated for engine 2."));
    assert!(has(&report, "4.1.3 Maintenance was overdue."));
    assert!(has(&report, "5.1 Inadequate maintenance oversight"));
    assert!(has(&report, "5.1.1 The operator did not audit its contractor."));
    assert!(has(
        &report,
        "5.1.2 This factor is supported by paragraph 4.1.1 and paragraph 4.1.3."
    ));
    for text in texts(&report).iter().filter(|t| t.starts_with("5.")) {
        assert!(!text.contains("F-1") && !text.contains("F-3"), "{text}");
    }
}

#[test]
fn evidence_only_findings_get_their_own_subsection() {
    let report = generate(input(), &ReportConfig::default());
    assert!(has(&report, "4.2 Other Findings"));
    assert!(has(&report, "4.2.1 A service bulletin had been issued."));
}

#[test]
fn production_factor_on_subsequent_event_is_hedged_once() {
    let report = generate(input(), &ReportConfig::default());
    let note = texts(&report)
        .into_iter()
        .find(|t| t.starts_with("5.2.3 Note: this production factor"))
        .unwrap();
    assert!(note.contains("(Aircraft diverted)"));
    assert!(
        report
            .diagnostics
            .has_failure(ValidationRule::SubsequentEventCategory, "CF-2")
    );
    assert_eq!(report.diagnostics.failures.len(), 1);
}

#[test]
fn unsupported_factor_is_hedged_not_rejected() {
    let report = generate(input(), &ReportConfig::default());
    assert!(has(&report, "5.3 Lack of crew rest"));
    assert!(has(&report, "5.3.1 To be determined"));
    assert!(
        texts(&report)
            .iter()
            .any(|t| t.starts_with("5.3.2 No finding in section 4 shares evidence"))
    );
    assert_eq!(report.diagnostics.count(WarningCode::TraceabilityGap), 1);
    assert_eq!(report.diagnostics.count(WarningCode::DanglingReference), 1);
}

#[test]
fn sections_render_strictly_in_order() {
    let graph = link(vec![], vec![], vec![], vec![]);
    let mut assembler = Assembler::new(graph, vec![], Enrichment::default(), ReportConfig::default());
    assert_eq!(assembler.pending(), Some(Section::ExecutiveSummary));
    assert_eq!(assembler.blocks().len(), 1);

    assert_eq!(
        assembler.render_section(Section::Analysis),
        Err(AssemblyError::OutOfOrder {
            expected: Section::ExecutiveSummary,
            requested: Section::Analysis,
        })
    );
    let mut written = assembler.blocks().len();
    for section in &Section::ALL[..3] {
        assert_eq!(assembler.pending(), Some(*section));
        assembler.render_section(*section).unwrap();
        assert!(assembler.blocks().len() > written);
        written = assembler.blocks().len();
    }
    assert_eq!(assembler.pending(), Some(Section::Findings));
    assert_eq!(
        assembler.render_section(Section::Analysis),
        Err(AssemblyError::OutOfOrder {
            expected: Section::Findings,
            requested: Section::Analysis,
        })
    );
    for section in &Section::ALL[3..] {
        assembler.render_section(*section).unwrap();
    }
    assert!(assembler.is_complete());
    assert_eq!(assembler.pending(), None);
    assert_eq!(
        assembler.render_section(Section::EvidenceRegister),
        Err(AssemblyError::Complete)
    );
    assert!(assembler.blocks().len() > written);
}

#[test]
fn zero_enrichment_still_yields_every_section() {
    let report = generate(ReportInput::default(), &ReportConfig::default());
    let headings: Vec<&str> = report
        .blocks
        .iter()
        .filter_map(|block| match block {
            Block::Heading { text, bold: true } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        headings,
        vec![
            "Investigation Report",
            "1 Executive Summary",
            "2 Introduction",
            "3 Sequence of Events",
            "4 Findings",
            "5 Analysis",
            "6 Conclusions",
            "7 Recommendations",
            "8 Evidence Register",
        ]
    );
    for placeholder in ["1.1", "3.1", "4.1.1", "5.1", "6.1", "7.1", "8.1"] {
        assert!(
            has(&report, &format!("{placeholder} To be determined")),
            "{placeholder}"
        );
    }
    assert!(texts(&report).iter().any(|t| t.starts_with("2.1 This report presents")));
}

#[test]
fn placeholder_text_is_configurable() {
    let config = ReportConfig {
        placeholder: "Not established".to_string(),
        title: "Serious Incident Report".to_string(),
        ..ReportConfig::default()
    };
    let report = generate(ReportInput::default(), &config);
    assert_eq!(report.blocks[0], Block::heading("Serious Incident Report", true));
    assert!(has(&report, "1.1 Not established"));
}

#[test]
fn findings_are_derived_when_none_supplied() {
    let mut input = input();
    input.findings.clear();
    input.causal_factors.clear();
    let report = generate(input, &ReportConfig::default());
    assert!(has(
        &report,
        "No findings were supplied; the findings below are derived from the sequence of events."
    ));
    assert!(has(
        &report,
        "4.1.1 On 14 March 2024 at 09:00, Engine 2 fire warning."
    ));
    assert!(has(&report, "4.1.3 On 14 March 2024 at 09:20, Aircraft diverted."));
}

#[test]
fn sequence_of_events_has_initiating_paragraph_and_table() {
    let report = generate(input(), &ReportConfig::default());
    assert!(has(
        &report,
        "3.1 The initiating event occurred on 14 March 2024 at 09:00: Engine 2 fire warning."
    ));
    let table = report
        .blocks
        .iter()
        .find_map(|block| match block {
            Block::Table { rows } if rows[0][0] == "Time" => Some(rows),
            _ => None,
        })
        .unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(
        table[1],
        ids(&["14 March 2024 at 09:00", "Event", "Engine 2 fire warning", "EV-1"])
    );
}

#[test]
fn supplied_conclusions_cite_analysis_subsections() {
    let mut input = input();
    input.conclusions = vec![Conclusion {
        statement: "Oversight of the contractor was deficient".to_string(),
        causal_factor_refs: ids(&["CF-1", "CF-404"]),
    }];
    let report = generate(input, &ReportConfig::default());
    assert!(has(
        &report,
        "6.1 Oversight of the contractor was deficient. See section 5.1."
    ));
    assert_eq!(report.diagnostics.count(WarningCode::DanglingReference), 2);
}

#[test]
fn conclusions_fall_back_to_factors_by_category() {
    let report = generate(input(), &ReportConfig::default());
    assert!(has(
        &report,
        "6.1 Organisational influences: Inadequate maintenance oversight (5.1)."
    ));
    assert!(has(&report, "6.2 Preconditions: Lack of crew rest (5.3)."));
    assert!(has(&report, "6.3 Production factors: Failure of crew to check gauges (5.2)."));
}

#[test]
fn recommendations_prefer_enrichment() {
    let mut input = input();
    input.enrichment = Enrichment {
        recommendations: ids(&["Review contractor audit intervals", "  "]),
        ..Enrichment::default()
    };
    let report = generate(input, &ReportConfig::default());
    assert!(has(&report, "7.1 Review contractor audit intervals."));
    assert!(!texts(&report).iter().any(|t| t.starts_with("7.2")));
}

#[test]
fn recommendations_fall_back_to_one_per_factor() {
    let report = generate(input(), &ReportConfig::default());
    assert!(has(
        &report,
        "7.2 Action should be taken to address the causal factor analysed in section 5.2: Failure of crew to check gauges."
    ));
}

#[test]
fn evidence_register_lists_references() {
    let report = generate(input(), &ReportConfig::default());
    let register = report
        .blocks
        .iter()
        .rev()
        .find_map(|block| match block {
            Block::Table { rows } => Some(rows),
            _ => None,
        })
        .unwrap();
    assert_eq!(
        register[0],
        ids(&["ID", "Descriptor", "Reliability", "Referenced by"])
    );
    assert_eq!(
        register[1],
        ids(&["EV-1", "Flight data recorder", "High", "TL-1, 4.1.1"])
    );
    assert_eq!(
        register[4],
        ids(&["EV-4", "Manufacturer service bulletin", "High", "4.2.1"])
    );
}

#[test]
fn enrichment_replaces_summary_and_introduction() {
    let mut input = input();
    input.enrichment = Enrichment {
        executive_summary: Some("A fire warning led to a diversion.\n\nNo one was hurt.".to_string()),
        introduction: Some("This investigation was opened on 15 March.".to_string()),
        recommendations: vec![],
    };
    let report = generate(input, &ReportConfig::default());
    assert!(has(&report, "1.1 A fire warning led to a diversion."));
    assert!(has(&report, "1.2 No one was hurt."));
    assert!(has(&report, "2.1 This investigation was opened on 15 March."));
}

#[rstest]
#[case(Section::ExecutiveSummary, "1 Executive Summary")]
#[case(Section::SequenceOfEvents, "3 Sequence of Events")]
#[case(Section::Analysis, "5 Analysis")]
#[case(Section::EvidenceRegister, "8 Evidence Register")]
fn section_headings_are_numbered(#[case] section: Section, #[case] heading: &str) {
    let report = generate(input(), &ReportConfig::default());
    assert_eq!(section.heading(), heading);
    assert!(report.blocks.contains(&Block::heading(heading, true)));
}

#[test]
fn report_serializes_as_tagged_blocks() {
    let report = generate(ReportInput::default(), &ReportConfig::default());
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(
        value["blocks"][1],
        serde_json::json!({"type": "heading", "text": "1 Executive Summary", "bold": true})
    );
    assert_eq!(value["diagnostics"]["failures"], serde_json::json!([]));
}
