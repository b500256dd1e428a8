//! One-call report generation: derive, link, assemble.

use inquest_config::ReportConfig;
use inquest_core::diagnostics::Diagnostics;
use inquest_core::entities::{CausalFactor, Conclusion, Evidence, Finding, TimelineEntry};
use inquest_core::render::Block;
use inquest_records::{findings_from_timeline, link};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::assembler::Assembler;
use crate::enrichment::Enrichment;

/// Normalized records for one investigation, plus optional enrichment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportInput {
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    #[serde(default)]
    pub findings: Vec<Finding>,
    #[serde(default)]
    pub causal_factors: Vec<CausalFactor>,
    #[serde(default)]
    pub conclusions: Vec<Conclusion>,
    #[serde(default)]
    pub enrichment: Enrichment,
    /// Diagnostics from earlier stages, carried into the report.
    #[serde(default)]
    pub diagnostics: Diagnostics,
}

/// A fully assembled report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Report {
    pub blocks: Vec<Block>,
    pub diagnostics: Diagnostics,
}

/// Derive missing findings, link the records, and assemble all eight
/// sections. Never fails; every problem ends up in `diagnostics`.
#[must_use]
pub fn generate(input: ReportInput, config: &ReportConfig) -> Report {
    let ReportInput {
        timeline,
        evidence,
        findings,
        causal_factors,
        conclusions,
        enrichment,
        diagnostics: upstream,
    } = input;

    let derived = findings.is_empty() && !timeline.is_empty();
    let findings = if derived {
        tracing::debug!(entries = timeline.len(), "deriving findings from timeline");
        findings_from_timeline(&timeline)
    } else {
        findings
    };

    let graph = link(timeline, evidence, findings, causal_factors);
    tracing::debug!(enriched = !enrichment.is_empty(), "assembling report");
    let mut report = Assembler::new(graph, conclusions, enrichment, config.clone())
        .with_derived_findings(derived)
        .finish();

    let mut diagnostics = upstream;
    diagnostics.extend(report.diagnostics);
    report.diagnostics = diagnostics;

    tracing::debug!(
        blocks = report.blocks.len(),
        warnings = report.diagnostics.warnings.len(),
        failures = report.diagnostics.failures.len(),
        "report generated"
    );
    report
}
