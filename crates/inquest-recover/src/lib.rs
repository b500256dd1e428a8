//! # inquest-recover
//!
//! Recovers a single structured value (object or array) from arbitrary text
//! produced by a generative model: bare JSON, JSON wrapped in a code fence,
//! JSON surrounded by commentary, or JSON cut off mid-element.
//!
//! Strategies run in order, each only if the previous one failed:
//! 1. direct parse of the trimmed text
//! 2. code fence stripping, then direct parse
//! 3. bracket scanning with a three-state machine (`Outside`, `InString`,
//!    `Escaped`) to find a balanced span
//! 4. repair mode for truncated spans, keeping every complete element
//! 5. lenient greedy pattern search
//!
//! When everything fails the caller gets a [`ParseFailure`] carrying the
//! original text. Nothing here panics or performs I/O.

mod error;
mod extract;
mod fence;
mod lenient;
mod repair;
pub mod scanner;

pub use error::ParseFailure;
pub use extract::{Recovered, Strategy, extract, extract_with};
pub use fence::strip_code_fence;
pub use repair::{Repair, repair_truncated};
