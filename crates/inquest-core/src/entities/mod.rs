//! Entity structs for investigation records.
//!
//! Every entity is created once per report run and never mutated after
//! assembly starts. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema`; the serialized shape is exactly what the normalizer reads
//! back, so a batch survives a serialize/recover/normalize cycle unchanged.

mod analysis;
mod causal_factor;
mod conclusion;
mod evidence;
mod finding;
mod timeline;

pub use analysis::AnalysisSection;
pub use causal_factor::{CausalFactor, NEGATIVE_PREFIXES, has_negative_phrasing, negative_prefix};
pub use conclusion::Conclusion;
pub use evidence::Evidence;
pub use finding::Finding;
pub use timeline::TimelineEntry;
