//! Error returned when no recovery strategy produced a value.

use crate::extract::Strategy;

/// No strategy recovered a value. Carries the original text for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no structured value recovered from {} bytes of text (tried: {})", .text.len(), format_attempts(.attempted))]
pub struct ParseFailure {
    pub text: String,
    pub attempted: Vec<Strategy>,
}

fn format_attempts(attempted: &[Strategy]) -> String {
    if attempted.is_empty() {
        return "nothing".to_string();
    }
    attempted
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
