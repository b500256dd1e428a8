//! # inquest-report
//!
//! Assembles linked investigation records into a numbered, eight-section
//! report made of render [`Block`](inquest_core::render::Block)s.
//!
//! Sections render strictly in order through [`Assembler`]; positional
//! paragraph numbers assigned in the Findings section are what the Analysis
//! and Conclusions sections cite. [`generate`] wires derivation, linking and
//! assembly together.

mod assembler;
mod enrichment;
mod error;
mod numbering;
mod pipeline;
mod prose;
mod section;
mod sections;
mod writer;

pub use assembler::Assembler;
pub use enrichment::Enrichment;
pub use error::AssemblyError;
pub use numbering::Numbering;
pub use pipeline::{Report, ReportInput, generate};
pub use section::Section;
