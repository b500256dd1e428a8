//! Text recovery settings.

use serde::{Deserialize, Serialize};

const fn enabled() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParserConfig {
    /// Recover the complete leading elements of truncated arrays and objects.
    #[serde(default = "enabled")]
    pub repair: bool,

    /// Fall back to a greedy pattern search for the first `{...}` or `[...]`.
    #[serde(default = "enabled")]
    pub lenient: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            repair: enabled(),
            lenient: enabled(),
        }
    }
}
