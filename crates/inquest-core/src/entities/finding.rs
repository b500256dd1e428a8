use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A factual finding. Paragraph numbers are assigned positionally at render
/// time and are never stored on the record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Finding {
    pub id: String,
    pub statement: String,
    /// Ids of supporting `Evidence`.
    pub evidence_support: Vec<String>,
    /// Ids of the `TimelineEntry` records this finding describes. Empty for
    /// evidence-only findings.
    pub timeline_refs: Vec<String>,
}

impl Finding {
    /// Whether the finding is anchored to the sequence of events.
    #[must_use]
    pub fn is_evidence_only(&self) -> bool {
        self.timeline_refs.is_empty()
    }
}
