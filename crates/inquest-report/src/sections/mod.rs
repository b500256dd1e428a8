//! One renderer per report section.
//!
//! Renderers only append to the [`Writer`]; the section heading has
//! already been written and numbering reset when they run.

mod analysis;
mod conclusions;
mod findings;
mod recommendations;
mod register;
mod sequence;
mod summary;

use crate::assembler::Document;
use crate::section::Section;
use crate::writer::Writer;

pub(crate) fn render(section: Section, doc: &Document, out: &mut Writer) {
    match section {
        Section::ExecutiveSummary => summary::executive_summary(doc, out),
        Section::Introduction => summary::introduction(doc, out),
        Section::SequenceOfEvents => sequence::render(doc, out),
        Section::Findings => findings::render(doc, out),
        Section::Analysis => analysis::render(doc, out),
        Section::Conclusions => conclusions::render(doc, out),
        Section::Recommendations => recommendations::render(doc, out),
        Section::EvidenceRegister => register::render(doc, out),
    }
}
