//! Evidence linker.
//!
//! Builds the cross-reference graph between timeline, evidence, findings and
//! causal factors once, so rendering never re-derives a relationship. Every
//! integrity problem found here is a diagnostic; linking never fails.

use std::collections::{BTreeMap, BTreeSet};

use inquest_core::diagnostics::{
    Diagnostics, ValidationFailure, ValidationRule, Warning, WarningCode,
};
use inquest_core::entities::{AnalysisSection, CausalFactor, Evidence, Finding, TimelineEntry};
use inquest_core::enums::{FactorCategory, RecordKind};

/// Linked, validated investigation records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkedGraph {
    pub timeline: Vec<TimelineEntry>,
    pub evidence: Vec<Evidence>,
    pub findings: Vec<Finding>,
    pub causal_factors: Vec<CausalFactor>,
    /// Evidence id -> timeline entries citing it, in timeline order.
    pub evidence_to_timeline: BTreeMap<String, Vec<String>>,
    /// Evidence id -> findings citing it, in finding order.
    pub evidence_to_findings: BTreeMap<String, Vec<String>>,
    /// Finding id -> causal factors sharing evidence with it.
    pub finding_to_factors: BTreeMap<String, Vec<String>>,
    /// Ids of findings with no timeline reference.
    pub evidence_only: Vec<String>,
    /// One section per causal factor, in factor order.
    pub analysis_sections: Vec<AnalysisSection>,
    pub diagnostics: Diagnostics,
}

impl LinkedGraph {
    /// The first entry flagged as initiating, if any.
    #[must_use]
    pub fn initiating_event(&self) -> Option<&TimelineEntry> {
        self.timeline.iter().find(|entry| entry.is_initiating_event)
    }

    #[must_use]
    pub fn timeline_entry(&self, id: &str) -> Option<&TimelineEntry> {
        self.timeline.iter().find(|entry| entry.id == id)
    }

    #[must_use]
    pub fn finding(&self, id: &str) -> Option<&Finding> {
        self.findings.iter().find(|finding| finding.id == id)
    }

    #[must_use]
    pub fn causal_factor(&self, id: &str) -> Option<&CausalFactor> {
        self.causal_factors.iter().find(|factor| factor.id == id)
    }

    #[must_use]
    pub fn analysis_section(&self, factor_id: &str) -> Option<&AnalysisSection> {
        self.analysis_sections
            .iter()
            .find(|section| section.causal_factor_id == factor_id)
    }

    /// Findings anchored in the timeline, in input order.
    pub fn fact_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| !f.is_evidence_only())
    }

    /// Findings supported only by evidence, in input order.
    pub fn evidence_only_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_evidence_only())
    }

    /// Whether `factor` is attached to a non-initiating entry while not
    /// being a defence. Only defences may attach to subsequent events.
    #[must_use]
    pub fn violates_subsequent_event_category(&self, factor: &CausalFactor) -> bool {
        factor.category != FactorCategory::Defense
            && factor
                .timeline_entry_id
                .as_deref()
                .and_then(|id| self.timeline_entry(id))
                .is_some_and(|entry| !entry.is_initiating_event)
    }
}

/// Link the four record collections into a [`LinkedGraph`].
#[must_use]
pub fn link(
    timeline: Vec<TimelineEntry>,
    evidence: Vec<Evidence>,
    findings: Vec<Finding>,
    causal_factors: Vec<CausalFactor>,
) -> LinkedGraph {
    let mut graph = LinkedGraph {
        evidence_to_timeline: index_by_evidence(
            timeline.iter().map(|e| (e.id.as_str(), e.evidence_ids.as_slice())),
        ),
        evidence_to_findings: index_by_evidence(
            findings
                .iter()
                .map(|f| (f.id.as_str(), f.evidence_support.as_slice())),
        ),
        evidence_only: findings
            .iter()
            .filter(|f| f.is_evidence_only())
            .map(|f| f.id.clone())
            .collect(),
        timeline,
        evidence,
        findings,
        causal_factors,
        ..LinkedGraph::default()
    };

    let sections: Vec<AnalysisSection> = graph
        .causal_factors
        .iter()
        .map(|factor| analysis_section(factor, &graph.findings))
        .collect();
    for section in &sections {
        for finding_id in &section.finding_refs {
            graph
                .finding_to_factors
                .entry(finding_id.clone())
                .or_default()
                .push(section.causal_factor_id.clone());
        }
    }
    graph.analysis_sections = sections;

    let mut diagnostics = Diagnostics::new();
    check_traceability(&graph, &mut diagnostics);
    check_references(&graph, &mut diagnostics);
    check_attachments(&graph, &mut diagnostics);
    graph.diagnostics = diagnostics;

    tracing::debug!(
        findings = graph.findings.len(),
        factors = graph.causal_factors.len(),
        evidence_only = graph.evidence_only.len(),
        "linked records"
    );
    graph
}

// ---------------------------------------------------------------------------
// Indices
// ---------------------------------------------------------------------------

fn index_by_evidence<'a>(
    owners: impl Iterator<Item = (&'a str, &'a [String])>,
) -> BTreeMap<String, Vec<String>> {
    let mut index: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (owner, evidence_ids) in owners {
        for evidence_id in evidence_ids {
            let cited_by = index.entry(evidence_id.clone()).or_default();
            if !cited_by.iter().any(|o| o == owner) {
                cited_by.push(owner.to_string());
            }
        }
    }
    index
}

/// Findings sharing at least one evidence id with `factor`, in finding order.
fn analysis_section(factor: &CausalFactor, findings: &[Finding]) -> AnalysisSection {
    let support: BTreeSet<&str> = factor.evidence_support.iter().map(String::as_str).collect();
    let finding_refs = findings
        .iter()
        .filter(|finding| {
            finding
                .evidence_support
                .iter()
                .any(|id| support.contains(id.as_str()))
        })
        .map(|finding| finding.id.clone())
        .collect();
    AnalysisSection {
        title: factor.title.clone(),
        causal_factor_id: factor.id.clone(),
        finding_refs,
    }
}

// ---------------------------------------------------------------------------
// Integrity checks
// ---------------------------------------------------------------------------

fn check_traceability(graph: &LinkedGraph, diagnostics: &mut Diagnostics) {
    for section in graph.analysis_sections.iter().filter(|s| s.has_gap()) {
        tracing::warn!(record = %section.causal_factor_id, "no finding supports causal factor");
        diagnostics.warn(
            Warning::new(
                WarningCode::TraceabilityGap,
                format!("no finding shares evidence with {:?}", section.title),
            )
            .for_record(RecordKind::CausalFactor, &section.causal_factor_id),
        );
    }
}

/// Warn about ids that point outside the run. A collection that was not
/// supplied at all is not checked against.
fn check_references(graph: &LinkedGraph, diagnostics: &mut Diagnostics) {
    let evidence_ids: BTreeSet<&str> = graph.evidence.iter().map(|e| e.id.as_str()).collect();
    let timeline_ids: BTreeSet<&str> = graph.timeline.iter().map(|e| e.id.as_str()).collect();

    for entry in &graph.timeline {
        for id in &entry.evidence_ids {
            dangling(diagnostics, RecordKind::Timeline, &entry.id, id, &evidence_ids, "evidence");
        }
    }
    for finding in &graph.findings {
        for id in &finding.evidence_support {
            dangling(diagnostics, RecordKind::Finding, &finding.id, id, &evidence_ids, "evidence");
        }
        for id in &finding.timeline_refs {
            dangling(diagnostics, RecordKind::Finding, &finding.id, id, &timeline_ids, "timeline entry");
        }
    }
    for factor in &graph.causal_factors {
        for id in &factor.evidence_support {
            dangling(diagnostics, RecordKind::CausalFactor, &factor.id, id, &evidence_ids, "evidence");
        }
    }
}

fn dangling(
    diagnostics: &mut Diagnostics,
    kind: RecordKind,
    owner: &str,
    target: &str,
    known: &BTreeSet<&str>,
    what: &str,
) {
    if known.is_empty() || known.contains(target) {
        return;
    }
    tracing::warn!(record = %owner, reference = %target, "dangling reference");
    diagnostics.warn(
        Warning::new(
            WarningCode::DanglingReference,
            format!("refers to unknown {what} {target}"),
        )
        .for_record(kind, owner),
    );
}

fn check_attachments(graph: &LinkedGraph, diagnostics: &mut Diagnostics) {
    if graph.timeline.is_empty() {
        return;
    }
    for factor in &graph.causal_factors {
        let Some(entry_id) = factor.timeline_entry_id.as_deref() else {
            continue;
        };
        if graph.timeline_entry(entry_id).is_none() {
            diagnostics.warn(
                Warning::new(
                    WarningCode::DanglingReference,
                    format!("attached to unknown timeline entry {entry_id}"),
                )
                .for_record(RecordKind::CausalFactor, &factor.id),
            );
            continue;
        }
        if graph.violates_subsequent_event_category(factor) {
            tracing::warn!(record = %factor.id, category = %factor.category, "non-defence factor on subsequent event");
            diagnostics.fail_once(ValidationFailure {
                rule: ValidationRule::SubsequentEventCategory,
                record_kind: RecordKind::CausalFactor,
                record_id: factor.id.clone(),
                message: format!(
                    "{} factor attached to non-initiating entry {entry_id}; only defences may attach to subsequent events",
                    factor.category
                ),
            });
        }
    }
}
