use crate::assembler::Document;
use crate::prose::sentence;
use crate::writer::Writer;

pub(super) fn render(doc: &Document, out: &mut Writer) {
    let enriched: Vec<&String> = doc
        .enrichment
        .recommendations
        .iter()
        .filter(|r| !r.trim().is_empty())
        .collect();
    if !enriched.is_empty() {
        for recommendation in enriched {
            out.numbered(&sentence(recommendation));
        }
        return;
    }

    if doc.graph.analysis_sections.is_empty() {
        out.numbered(&doc.config.placeholder);
        return;
    }
    for section in &doc.graph.analysis_sections {
        let text = out.analysis_subsections.get(&section.causal_factor_id).map_or_else(
            || format!("Action should be taken to address: {}.", section.title),
            |number| {
                format!(
                    "Action should be taken to address the causal factor analysed in section {number}: {}.",
                    section.title
                )
            },
        );
        out.numbered(&text);
    }
}
