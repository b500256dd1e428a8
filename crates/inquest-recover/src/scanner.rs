//! Bracket scanner.
//!
//! A three-state machine walks the text one byte at a time. Structural
//! characters (`{ } [ ] , : "` and `\`) are all ASCII, and UTF-8 never
//! reuses ASCII byte values inside multi-byte sequences, so byte offsets
//! reported here are always valid `str` slice boundaries.
//!
//! ```text
//!            "                \
//! Outside ───────▶ InString ───────▶ Escaped
//!    ▲               │   ▲              │
//!    └───────────────┘   └──────────────┘
//!            "              any byte
//! ```
//!
//! Nesting is tracked with a stack of expected closers rather than a bare
//! counter so that `{ ]` is reported as a mismatch instead of a close.

/// Lexical state of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Outside,
    InString,
    Escaped,
}

/// What a single byte meant to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A container opened; `depth` is the depth after opening.
    Open { depth: usize },
    /// A container closed; `depth` is the depth after closing.
    Close { depth: usize },
    /// A closer that does not match the innermost open container.
    Mismatch,
    /// A `,` outside any string, at the current depth.
    Separator { depth: usize },
    /// A `:` outside any string, at the current depth.
    Colon { depth: usize },
    /// The closing quote of a string.
    StringEnd { depth: usize },
    /// Anything else, including every byte inside a string.
    Other,
}

/// Incremental bracket scanner.
#[derive(Debug, Clone)]
pub struct Scanner {
    state: ScanState,
    closers: Vec<u8>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ScanState::Outside,
            closers: Vec::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> ScanState {
        self.state
    }

    /// Current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.closers.len()
    }

    /// Feed one byte.
    pub fn step(&mut self, byte: u8) -> Step {
        match self.state {
            ScanState::Escaped => {
                self.state = ScanState::InString;
                Step::Other
            }
            ScanState::InString => match byte {
                b'\\' => {
                    self.state = ScanState::Escaped;
                    Step::Other
                }
                b'"' => {
                    self.state = ScanState::Outside;
                    Step::StringEnd {
                        depth: self.depth(),
                    }
                }
                _ => Step::Other,
            },
            ScanState::Outside => match byte {
                b'"' => {
                    self.state = ScanState::InString;
                    Step::Other
                }
                b'{' | b'[' => {
                    self.closers.push(if byte == b'{' { b'}' } else { b']' });
                    Step::Open {
                        depth: self.depth(),
                    }
                }
                b'}' | b']' => {
                    if self.closers.last() == Some(&byte) {
                        self.closers.pop();
                        Step::Close {
                            depth: self.depth(),
                        }
                    } else {
                        Step::Mismatch
                    }
                }
                b',' => Step::Separator {
                    depth: self.depth(),
                },
                b':' => Step::Colon {
                    depth: self.depth(),
                },
                _ => Step::Other,
            },
        }
    }
}

/// Result of scanning for the close of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    /// The container closed; `end` is the exclusive byte offset after the closer.
    Closed { end: usize },
    /// Input ended while the container was still open.
    Unterminated,
    /// A closer did not match its opener at byte offset `at`.
    Mismatched { at: usize },
}

/// Scan `text` from `start`, which must hold `{` or `[`, to its matching close.
#[must_use]
pub fn find_balanced(text: &str, start: usize) -> Balance {
    let mut scanner = Scanner::new();
    for (offset, byte) in text.as_bytes()[start..].iter().enumerate() {
        match scanner.step(*byte) {
            Step::Close { depth: 0 } => {
                return Balance::Closed {
                    end: start + offset + 1,
                };
            }
            Step::Mismatch => {
                return Balance::Mismatched {
                    at: start + offset,
                };
            }
            _ => {}
        }
    }
    Balance::Unterminated
}

/// Byte offsets of every `{` or `[` in `text`, in order.
///
/// Quotes are deliberately not tracked here: commentary before the value
/// often contains unbalanced apostrophes or quotes.
pub fn opening_candidates(text: &str) -> impl Iterator<Item = usize> + '_ {
    text.bytes()
        .enumerate()
        .filter(|(_, b)| *b == b'{' || *b == b'[')
        .map(|(i, _)| i)
}
