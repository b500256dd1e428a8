use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Prose fetched ahead of assembly by the host, typically from a generative
/// model. Every slot is optional; the assembler falls back to data-only text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Enrichment {
    #[serde(default)]
    pub executive_summary: Option<String>,
    #[serde(default)]
    pub introduction: Option<String>,
    /// One entry per recommendation, in order.
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl Enrichment {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        blank(self.executive_summary.as_deref())
            && blank(self.introduction.as_deref())
            && self.recommendations.iter().all(|r| r.trim().is_empty())
    }
}

fn blank(text: Option<&str>) -> bool {
    text.is_none_or(|t| t.trim().is_empty())
}
