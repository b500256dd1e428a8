//! Record normalizer settings.

use serde::{Deserialize, Serialize};

/// Default cap on causal factor titles, in characters.
const fn default_title_max_chars() -> usize {
    80
}

/// Shortest title cap that still leaves room after the longest prefix.
pub const MIN_TITLE_MAX_CHARS: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct NormalizerConfig {
    /// Maximum length of a causal factor title after rewriting.
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            title_max_chars: default_title_max_chars(),
        }
    }
}
