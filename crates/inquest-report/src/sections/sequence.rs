use inquest_core::entities::TimelineEntry;

use crate::assembler::Document;
use crate::sections::summary::initiating_sentence;
use crate::writer::Writer;

const HEADER: [&str; 4] = ["Time", "Type", "Description", "Evidence"];

pub(super) fn render(doc: &Document, out: &mut Writer) {
    let timeline = &doc.graph.timeline;
    if timeline.is_empty() {
        out.numbered(&doc.config.placeholder);
        return;
    }

    out.numbered(&doc.graph.initiating_event().map_or_else(
        || "No single initiating event was identified in the sequence below.".to_string(),
        initiating_sentence,
    ));

    let mut ordered: Vec<&TimelineEntry> = timeline.iter().collect();
    ordered.sort_by_key(|entry| (entry.timestamp.is_none(), entry.timestamp));

    let mut rows = vec![HEADER.map(String::from).to_vec()];
    rows.extend(ordered.into_iter().map(|entry| {
        vec![
            entry.time_label().unwrap_or_else(|| "Unknown".to_string()),
            entry.kind.display_label().to_string(),
            entry.description.clone(),
            if entry.evidence_ids.is_empty() {
                "-".to_string()
            } else {
                entry.evidence_ids.join(", ")
            },
        ]
    }));
    out.table(rows);
}
