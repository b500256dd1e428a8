use inquest_core::diagnostics::{ValidationFailure, ValidationRule};
use inquest_core::entities::{AnalysisSection, CausalFactor};
use inquest_core::enums::RecordKind;

use crate::assembler::Document;
use crate::prose::{cite_paragraphs, paragraphs};
use crate::writer::Writer;

const GAP_HEDGE: &str = "No finding in section 4 shares evidence with this factor. It is \
    presented as a possible contributor that the available evidence does not yet establish.";

pub(super) fn render(doc: &Document, out: &mut Writer) {
    let graph = &doc.graph;
    if graph.causal_factors.is_empty() {
        out.numbered(&doc.config.placeholder);
        return;
    }

    for section in &graph.analysis_sections {
        let Some(factor) = graph.causal_factor(&section.causal_factor_id) else {
            continue;
        };
        let number = out.subsection(&section.title);
        out.analysis_subsections.insert(factor.id.clone(), number);
        render_factor(doc, out, factor, section);
    }
}

fn render_factor(doc: &Document, out: &mut Writer, factor: &CausalFactor, section: &AnalysisSection) {
    let body = [&factor.analysis_text, &factor.description]
        .into_iter()
        .map(|text| paragraphs(text))
        .find(|p| !p.is_empty())
        .unwrap_or_else(|| vec![doc.config.placeholder.clone()]);
    for paragraph in &body {
        out.numbered(paragraph);
    }

    let cited = out.finding_numbers(&section.finding_refs);
    if !cited.is_empty() {
        out.numbered(&format!(
            "This factor is supported by {}.",
            cite_paragraphs(&cited)
        ));
    }
    if section.has_gap() {
        out.numbered(GAP_HEDGE);
    }

    if doc.graph.violates_subsequent_event_category(factor) {
        let entry = factor
            .timeline_entry_id
            .as_deref()
            .and_then(|id| doc.graph.timeline_entry(id));
        let event = entry.map_or("a subsequent event", |e| e.description.as_str());
        out.numbered(&format!(
            "Note: this {} factor is attached to a subsequent event ({event}) rather than the \
             initiating event. Only defences are expected at that point in the sequence, so \
             its classification should be treated with caution.",
            factor.category
        ));
        out.diagnostics.fail_once(ValidationFailure {
            rule: ValidationRule::SubsequentEventCategory,
            record_kind: RecordKind::CausalFactor,
            record_id: factor.id.clone(),
            message: format!(
                "{} factor attached to a non-initiating timeline entry",
                factor.category
            ),
        });
    }
}
