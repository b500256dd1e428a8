//! Render blocks and the document emitter seam.
//!
//! The assembler produces an ordered `Vec<Block>`. Turning blocks into a
//! concrete file format is the job of a [`DocumentEmitter`] supplied by the
//! host application.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One unit of rendered output.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading { text: String, bold: bool },
    Paragraph { text: String },
    /// First row is the header row.
    Table { rows: Vec<Vec<String>> },
}

impl Block {
    #[must_use]
    pub fn heading(text: impl Into<String>, bold: bool) -> Self {
        Self::Heading {
            text: text.into(),
            bold,
        }
    }

    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    #[must_use]
    pub const fn table(rows: Vec<Vec<String>>) -> Self {
        Self::Table { rows }
    }

    /// Text content of headings and paragraphs; `None` for tables.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Heading { text, .. } | Self::Paragraph { text } => Some(text),
            Self::Table { .. } => None,
        }
    }
}

/// Consumer of rendered blocks, responsible for the output file format.
pub trait DocumentEmitter {
    type Error;

    /// Emit the full block sequence of one document, in order.
    ///
    /// # Errors
    ///
    /// Returns the emitter's own error type when the output cannot be written.
    fn emit(&mut self, blocks: &[Block]) -> Result<(), Self::Error>;
}
