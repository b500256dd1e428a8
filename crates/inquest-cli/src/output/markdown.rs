//! Markdown document emitter.

use std::io::Write;

use inquest_core::render::{Block, DocumentEmitter};

/// Writes blocks as CommonMark with pipe tables.
///
/// Bold headings that start with a section number become `##`, other bold
/// headings (the document title) `#`, and subsection headings `###`.
pub struct MarkdownEmitter<W> {
    writer: W,
}

impl<W: Write> MarkdownEmitter<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn table(&mut self, rows: &[Vec<String>]) -> std::io::Result<()> {
        let Some((header, body)) = rows.split_first() else {
            return Ok(());
        };
        writeln!(self.writer, "| {} |", row_cells(header))?;
        writeln!(
            self.writer,
            "|{}|",
            vec![" --- "; header.len()].join("|")
        )?;
        for row in body {
            writeln!(self.writer, "| {} |", row_cells(row))?;
        }
        writeln!(self.writer)
    }
}

impl<W: Write> DocumentEmitter for MarkdownEmitter<W> {
    type Error = std::io::Error;

    fn emit(&mut self, blocks: &[Block]) -> Result<(), Self::Error> {
        for block in blocks {
            match block {
                Block::Heading { text, bold } => {
                    let level = match (bold, starts_with_number(text)) {
                        (true, true) => "##",
                        (true, false) => "#",
                        (false, _) => "###",
                    };
                    writeln!(self.writer, "{level} {text}\n")?;
                }
                Block::Paragraph { text } => writeln!(self.writer, "{text}\n")?,
                Block::Table { rows } => self.table(rows)?,
            }
        }
        self.writer.flush()
    }
}

fn starts_with_number(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn row_cells(row: &[String]) -> String {
    row.iter()
        .map(|cell| cell.replace('|', "\\|").replace('\n', " "))
        .collect::<Vec<_>>()
        .join(" | ")
}
