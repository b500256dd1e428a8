//! Last-resort greedy pattern search.

use regex::Regex;
use serde_json::Value;

/// Greedy spans tried in order: first brace to last brace, then first
/// bracket to last bracket.
const PATTERNS: [&str; 2] = [r"(?s)\{.*\}", r"(?s)\[.*\]"];

/// Parse the first greedy `{...}` or `[...]` span that yields valid JSON.
pub(crate) fn lenient_match(text: &str) -> Option<Value> {
    for pattern in PATTERNS {
        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(error) => {
                tracing::warn!(%error, pattern, "lenient pattern failed to compile");
                continue;
            }
        };
        if let Some(found) = re.find(text) {
            if let Ok(value) = serde_json::from_str::<Value>(found.as_str()) {
                return Some(value);
            }
        }
    }
    None
}
