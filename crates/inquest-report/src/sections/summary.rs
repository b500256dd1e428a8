use inquest_core::entities::TimelineEntry;

use crate::assembler::Document;
use crate::prose::{paragraphs, sentence};
use crate::writer::Writer;

const SCOPE_STATEMENT: &str = "This report presents the results of the investigation into the \
    occurrence. It sets out the sequence of events and the findings established from the \
    evidence, analyses the causal factors those findings support, and draws conclusions and \
    recommendations from that analysis. The evidence relied upon is listed in the evidence \
    register.";

pub(super) fn executive_summary(doc: &Document, out: &mut Writer) {
    if let Some(summary) = enriched(doc.enrichment.executive_summary.as_deref()) {
        for paragraph in summary {
            out.numbered(&paragraph);
        }
        return;
    }

    let graph = &doc.graph;
    if graph.timeline.is_empty()
        && graph.evidence.is_empty()
        && graph.findings.is_empty()
        && graph.causal_factors.is_empty()
    {
        out.numbered(&doc.config.placeholder);
        return;
    }

    out.numbered(&format!(
        "This report draws on {}, {}, {} and {}.",
        count(graph.evidence.len(), "item of evidence", "items of evidence"),
        count(graph.timeline.len(), "timeline entry", "timeline entries"),
        count(graph.findings.len(), "finding", "findings"),
        count(graph.causal_factors.len(), "causal factor", "causal factors"),
    ));
    if !graph.timeline.is_empty() {
        out.numbered(&graph.initiating_event().map_or_else(
            || "No single initiating event was identified.".to_string(),
            initiating_sentence,
        ));
    }
}

pub(super) fn introduction(doc: &Document, out: &mut Writer) {
    match enriched(doc.enrichment.introduction.as_deref()) {
        Some(introduction) => {
            for paragraph in introduction {
                out.numbered(&paragraph);
            }
        }
        None => {
            out.numbered(SCOPE_STATEMENT);
        }
    }
}

/// `"The initiating event occurred on 14 March 2024 at 09:30: ..."`.
pub(super) fn initiating_sentence(entry: &TimelineEntry) -> String {
    let when = entry
        .time_label()
        .map_or_else(|| "at an unknown time".to_string(), |label| format!("on {label}"));
    sentence(&format!(
        "The initiating event occurred {when}: {}",
        entry.description
    ))
}

fn enriched(text: Option<&str>) -> Option<Vec<String>> {
    text.map(paragraphs).filter(|p| !p.is_empty())
}

fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("1 {singular}")
    } else {
        format!("{n} {plural}")
    }
}
