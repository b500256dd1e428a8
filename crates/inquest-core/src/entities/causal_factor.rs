use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::FactorCategory;

/// Title prefixes accepted by the negative-phrasing grammar.
///
/// Titles describe an absence or failure, never a positive statement.
pub const NEGATIVE_PREFIXES: [&str; 5] = [
    "Failure of",
    "Inadequate",
    "Lack of",
    "Absence of",
    "Insufficient",
];

/// Return the matched prefix if `title` starts with one of
/// [`NEGATIVE_PREFIXES`], compared case-insensitively on a word boundary.
#[must_use]
pub fn negative_prefix(title: &str) -> Option<&'static str> {
    let trimmed = title.trim_start();
    NEGATIVE_PREFIXES.into_iter().find(|prefix| {
        trimmed
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
            && trimmed[prefix.len()..]
                .chars()
                .next()
                .is_none_or(|c| !c.is_alphanumeric())
    })
}

/// Whether `title` satisfies the negative-phrasing grammar.
#[must_use]
pub fn has_negative_phrasing(title: &str) -> bool {
    negative_prefix(title).is_some()
}

/// A causal factor identified by the investigation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CausalFactor {
    pub id: String,
    pub category: FactorCategory,
    /// Always negatively phrased after normalization.
    pub title: String,
    pub description: String,
    pub analysis_text: String,
    /// Ids of supporting `Evidence`.
    pub evidence_support: Vec<String>,
    /// The timeline entry this factor is attached to, if any.
    pub timeline_entry_id: Option<String>,
}

impl CausalFactor {
    /// The text after the grammar prefix, e.g. `"pre-flight checks"` for
    /// `"Inadequate pre-flight checks"`.
    #[must_use]
    pub fn title_subject(&self) -> &str {
        negative_prefix(&self.title).map_or(self.title.trim(), |prefix| {
            self.title.trim_start()[prefix.len()..].trim()
        })
    }
}
