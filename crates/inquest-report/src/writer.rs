//! Block output with numbering and cross-reference bookkeeping.

use std::collections::BTreeMap;

use inquest_core::diagnostics::Diagnostics;
use inquest_core::render::Block;

use crate::numbering::Numbering;
use crate::section::Section;

/// Everything the renderers write to while the report is assembled.
#[derive(Debug, Default)]
pub(crate) struct Writer {
    pub blocks: Vec<Block>,
    pub numbering: Numbering,
    /// Finding id -> positional paragraph number in section 4.
    pub finding_paragraphs: BTreeMap<String, String>,
    /// Causal factor id -> analysis subsection number in section 5.
    pub analysis_subsections: BTreeMap<String, String>,
    pub diagnostics: Diagnostics,
}

impl Writer {
    pub fn begin_section(&mut self, section: Section) {
        self.numbering.enter(section.number());
        self.blocks.push(Block::heading(section.heading(), true));
    }

    /// Open a numbered subsection and return its number.
    pub fn subsection(&mut self, title: &str) -> String {
        let number = self.numbering.subsection();
        self.blocks
            .push(Block::heading(format!("{number} {title}"), false));
        number
    }

    /// Write a numbered paragraph and return its number.
    pub fn numbered(&mut self, text: &str) -> String {
        let number = self.numbering.paragraph();
        self.blocks
            .push(Block::paragraph(format!("{number} {text}")));
        number
    }

    pub fn plain(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::paragraph(text));
    }

    pub fn table(&mut self, rows: Vec<Vec<String>>) {
        self.blocks.push(Block::table(rows));
    }

    /// Paragraph numbers of the given findings, skipping any not rendered.
    pub fn finding_numbers(&self, finding_ids: &[String]) -> Vec<String> {
        finding_ids
            .iter()
            .filter_map(|id| self.finding_paragraphs.get(id).cloned())
            .collect()
    }
}
