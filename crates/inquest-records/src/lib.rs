//! # inquest-records
//!
//! Turns raw recovered values into typed investigation records and links
//! them into a graph the report assembler can render without re-deriving
//! anything.
//!
//! - [`normalize`]: raw `serde_json::Value` -> typed records + diagnostics
//! - [`derive`]: deterministic findings built from the timeline
//! - [`linker`]: reverse indices, factor/finding intersections, integrity checks

pub mod derive;
pub mod linker;
pub mod normalize;

pub use derive::findings_from_timeline;
pub use linker::{LinkedGraph, link};
pub use normalize::{Normalized, Record, normalize, normalize_text};
