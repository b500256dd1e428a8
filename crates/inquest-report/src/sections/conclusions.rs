use inquest_core::diagnostics::{Warning, WarningCode};
use inquest_core::enums::{FactorCategory, RecordKind};

use crate::assembler::Document;
use crate::prose::{join_list, sentence};
use crate::writer::Writer;

pub(super) fn render(doc: &Document, out: &mut Writer) {
    if !doc.conclusions.is_empty() {
        supplied(doc, out);
    } else if !doc.graph.causal_factors.is_empty() {
        grouped_by_category(doc, out);
    } else {
        out.numbered(&doc.config.placeholder);
    }
}

/// Supplied conclusions, with factor refs resolved to analysis subsections.
fn supplied(doc: &Document, out: &mut Writer) {
    for conclusion in &doc.conclusions {
        let mut sections = Vec::new();
        for factor_id in &conclusion.causal_factor_refs {
            match out.analysis_subsections.get(factor_id) {
                Some(number) => sections.push(format!("section {number}")),
                None => {
                    tracing::warn!(target_id = %factor_id, "conclusion cites unknown causal factor");
                    out.diagnostics.warn(
                        Warning::new(
                            WarningCode::DanglingReference,
                            format!("conclusion refers to unknown causal factor {factor_id}"),
                        )
                        .for_kind(RecordKind::Conclusion),
                    );
                }
            }
        }
        let mut text = sentence(&conclusion.statement);
        if !sections.is_empty() {
            text.push_str(&format!(" See {}.", join_list(&sections)));
        }
        out.numbered(&text);
    }
}

/// No conclusions supplied: summarise the factors by category.
fn grouped_by_category(doc: &Document, out: &mut Writer) {
    for category in FactorCategory::ALL {
        let items: Vec<String> = doc
            .graph
            .causal_factors
            .iter()
            .filter(|factor| factor.category == category)
            .map(|factor| match out.analysis_subsections.get(&factor.id) {
                Some(number) => format!("{} ({number})", factor.title),
                None => factor.title.clone(),
            })
            .collect();
        if !items.is_empty() {
            out.numbered(&format!("{}: {}.", category.heading(), join_list(&items)));
        }
    }
}
