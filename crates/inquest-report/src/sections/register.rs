use crate::assembler::Document;
use crate::prose::capitalize;
use crate::writer::Writer;

const HEADER: [&str; 4] = ["ID", "Descriptor", "Reliability", "Referenced by"];

pub(super) fn render(doc: &Document, out: &mut Writer) {
    let graph = &doc.graph;
    if graph.evidence.is_empty() {
        out.numbered(&doc.config.placeholder);
        return;
    }

    let mut rows = vec![HEADER.map(String::from).to_vec()];
    for item in &graph.evidence {
        let mut referenced_by: Vec<String> = graph
            .evidence_to_timeline
            .get(&item.id)
            .cloned()
            .unwrap_or_default();
        if let Some(findings) = graph.evidence_to_findings.get(&item.id) {
            referenced_by.extend(out.finding_numbers(findings));
        }
        rows.push(vec![
            item.id.clone(),
            item.descriptor.clone(),
            capitalize(item.reliability.as_str()),
            if referenced_by.is_empty() {
                "-".to_string()
            } else {
                referenced_by.join(", ")
            },
        ]);
    }
    out.table(rows);
}
