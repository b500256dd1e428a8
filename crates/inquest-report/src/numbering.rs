//! Hierarchical paragraph numbering.
//!
//! Inside a subsection, paragraphs are numbered `s.k.p`. Outside any
//! subsection they take the subsection slot themselves (`s.k`), so the two
//! never collide.

/// Counters for the section currently being rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Numbering {
    section: u32,
    next_subsection: u32,
    current_subsection: Option<u32>,
    next_paragraph: u32,
}

impl Numbering {
    /// Enter a section; subsection and paragraph counters restart at 1.
    pub fn enter(&mut self, section: u32) {
        *self = Self {
            section,
            next_subsection: 1,
            current_subsection: None,
            next_paragraph: 1,
        };
    }

    /// Open the next subsection and return its number, e.g. `"4.1"`.
    pub fn subsection(&mut self) -> String {
        let k = self.next_subsection;
        self.next_subsection += 1;
        self.current_subsection = Some(k);
        self.next_paragraph = 1;
        format!("{}.{k}", self.section)
    }

    /// Number the next paragraph, e.g. `"4.1.3"` or `"1.2"`.
    pub fn paragraph(&mut self) -> String {
        if let Some(k) = self.current_subsection {
            let p = self.next_paragraph;
            self.next_paragraph += 1;
            format!("{}.{k}.{p}", self.section)
        } else {
            let k = self.next_subsection;
            self.next_subsection += 1;
            format!("{}.{k}", self.section)
        }
    }
}
