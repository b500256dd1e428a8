use inquest_core::entities::Finding;

use crate::assembler::Document;
use crate::prose::sentence;
use crate::writer::Writer;

pub(super) fn render(doc: &Document, out: &mut Writer) {
    let graph = &doc.graph;
    if doc.findings_derived {
        out.plain("No findings were supplied; the findings below are derived from the sequence of events.");
    }

    out.subsection("Findings of Fact");
    let facts: Vec<&Finding> = graph.fact_findings().collect();
    if facts.is_empty() {
        out.numbered(&doc.config.placeholder);
    }
    for finding in facts {
        record(out, finding);
    }

    let others: Vec<&Finding> = graph.evidence_only_findings().collect();
    if !others.is_empty() {
        out.subsection("Other Findings");
        for finding in others {
            record(out, finding);
        }
    }
}

fn record(out: &mut Writer, finding: &Finding) {
    let number = out.numbered(&sentence(&finding.statement));
    out.finding_paragraphs.insert(finding.id.clone(), number);
}
