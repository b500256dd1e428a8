use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Analysis of one causal factor, computed by the evidence linker.
///
/// `finding_refs` holds every finding whose evidence overlaps the factor's
/// evidence, in finding input order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalysisSection {
    pub title: String,
    pub causal_factor_id: String,
    pub finding_refs: Vec<String>,
}

impl AnalysisSection {
    /// A section with no supporting findings is a traceability gap.
    #[must_use]
    pub fn has_gap(&self) -> bool {
        self.finding_refs.is_empty()
    }
}
