//! Section assembler.
//!
//! A state machine with one state per section plus `Complete`. Only the
//! pending section can be rendered, so section 5 always sees the paragraph
//! numbers section 4 assigned.

use inquest_config::ReportConfig;
use inquest_core::entities::Conclusion;
use inquest_core::render::Block;
use inquest_records::LinkedGraph;

use crate::enrichment::Enrichment;
use crate::error::AssemblyError;
use crate::pipeline::Report;
use crate::section::Section;
use crate::sections;
use crate::writer::Writer;

/// Read-only inputs to every renderer.
#[derive(Debug)]
pub(crate) struct Document {
    pub graph: LinkedGraph,
    pub conclusions: Vec<Conclusion>,
    pub enrichment: Enrichment,
    pub config: ReportConfig,
    /// Findings were derived from the timeline rather than supplied.
    pub findings_derived: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Pending(Section),
    Complete,
}

#[derive(Debug)]
pub struct Assembler {
    doc: Document,
    out: Writer,
    state: State,
}

impl Assembler {
    /// Start a report. The title heading is written immediately; the graph's
    /// diagnostics carry over into the report.
    #[must_use]
    pub fn new(
        graph: LinkedGraph,
        conclusions: Vec<Conclusion>,
        enrichment: Enrichment,
        config: ReportConfig,
    ) -> Self {
        let mut out = Writer {
            diagnostics: graph.diagnostics.clone(),
            ..Writer::default()
        };
        out.blocks.push(Block::heading(config.title.clone(), true));
        Self {
            doc: Document {
                graph,
                conclusions,
                enrichment,
                config,
                findings_derived: false,
            },
            out,
            state: State::Pending(Section::FIRST),
        }
    }

    /// Mark the graph's findings as derived from the timeline.
    #[must_use]
    pub fn with_derived_findings(mut self, derived: bool) -> Self {
        self.doc.findings_derived = derived;
        self
    }

    /// The section the next call must render; `None` once complete.
    #[must_use]
    pub const fn pending(&self) -> Option<Section> {
        match self.state {
            State::Pending(section) => Some(section),
            State::Complete => None,
        }
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.state, State::Complete)
    }

    /// Blocks written so far.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.out.blocks
    }

    /// Render `requested`, which must be the pending section.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::OutOfOrder`] for any other section and
    /// [`AssemblyError::Complete`] once section 8 has been rendered.
    pub fn render_section(&mut self, requested: Section) -> Result<(), AssemblyError> {
        let expected = match self.state {
            State::Complete => return Err(AssemblyError::Complete),
            State::Pending(expected) => expected,
        };
        if requested != expected {
            tracing::warn!(%expected, %requested, "section requested out of order");
            return Err(AssemblyError::OutOfOrder {
                expected,
                requested,
            });
        }
        self.render_pending(expected);
        Ok(())
    }

    /// Render every remaining section and hand back the report.
    #[must_use]
    pub fn finish(mut self) -> Report {
        while let Some(section) = self.pending() {
            self.render_pending(section);
        }
        Report {
            blocks: self.out.blocks,
            diagnostics: self.out.diagnostics,
        }
    }

    fn render_pending(&mut self, section: Section) {
        tracing::debug!(%section, "rendering section");
        self.out.begin_section(section);
        sections::render(section, &self.doc, &mut self.out);
        self.state = section.next().map_or(State::Complete, State::Pending);
    }
}
