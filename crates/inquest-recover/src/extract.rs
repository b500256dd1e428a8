//! Strategy pipeline.

use inquest_config::ParserConfig;
use inquest_core::enums::Confidence;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ParseFailure;
use crate::fence::strip_code_fence;
use crate::lenient::lenient_match;
use crate::repair::repair_truncated;
use crate::scanner::{Balance, find_balanced, opening_candidates};

/// Candidate openings tried before the scan gives up.
const MAX_CANDIDATES: usize = 64;

/// Which strategy produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Direct,
    Fenced,
    Balanced,
    Repaired,
    Lenient,
}

impl Strategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Fenced => "fenced",
            Self::Balanced => "balanced",
            Self::Repaired => "repaired",
            Self::Lenient => "lenient",
        }
    }

    #[must_use]
    pub const fn confidence(self) -> Confidence {
        match self {
            Self::Direct | Self::Fenced | Self::Balanced => Confidence::High,
            Self::Lenient => Confidence::Medium,
            Self::Repaired => Confidence::Low,
        }
    }
}

/// A value recovered from text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recovered {
    pub value: Value,
    pub strategy: Strategy,
    pub confidence: Confidence,
}

impl Recovered {
    fn new(value: Value, strategy: Strategy) -> Self {
        Self {
            value,
            strategy,
            confidence: strategy.confidence(),
        }
    }

    /// Whether trailing content was lost to truncation.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.strategy == Strategy::Repaired
    }
}

/// Extract one structured value from `text` with every strategy enabled.
///
/// # Errors
///
/// Returns [`ParseFailure`] when no strategy recovers a value.
///
/// # Examples
///
/// ```
/// use inquest_recover::{extract, Strategy};
///
/// let text = "Here you go:\n```json\n[{\"id\": \"EV-1\"}]\n```";
/// let recovered = extract(text).unwrap();
/// assert_eq!(recovered.strategy, Strategy::Fenced);
/// assert_eq!(recovered.value[0]["id"], "EV-1");
/// ```
pub fn extract(text: &str) -> Result<Recovered, ParseFailure> {
    extract_with(text, &ParserConfig::default())
}

/// Extract one structured value from `text`, honoring `config` switches.
///
/// # Errors
///
/// Returns [`ParseFailure`] carrying `text` when no enabled strategy succeeds.
pub fn extract_with(text: &str, config: &ParserConfig) -> Result<Recovered, ParseFailure> {
    let trimmed = text.trim();
    let mut attempted = Vec::with_capacity(5);

    attempted.push(Strategy::Direct);
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Ok(Recovered::new(value, Strategy::Direct));
    }

    attempted.push(Strategy::Fenced);
    let fenced = strip_code_fence(trimmed);
    if let Some(inner) = fenced {
        if let Ok(value) = serde_json::from_str::<Value>(inner) {
            return Ok(Recovered::new(value, Strategy::Fenced));
        }
        tracing::debug!("fenced body is not valid JSON; scanning");
    }

    // Scan the fence body when there is one, so commentary outside the fence
    // cannot contribute stray brackets.
    let scope = fenced.unwrap_or(trimmed);
    attempted.push(Strategy::Balanced);
    if let Some((value, strategy)) = scan(scope, config.repair, &mut attempted) {
        return Ok(Recovered::new(value, strategy));
    }

    if config.lenient {
        attempted.push(Strategy::Lenient);
        if let Some(value) = lenient_match(trimmed) {
            return Ok(Recovered::new(value, Strategy::Lenient));
        }
    }

    tracing::warn!(
        bytes = text.len(),
        attempts = attempted.len(),
        "no structured value recovered"
    );
    Err(ParseFailure {
        text: text.to_string(),
        attempted,
    })
}

/// Walk candidate openings in order. A closed container that parses wins.
/// An unterminated one is repaired in place; when nothing can be salvaged
/// from it the walk moves on to the next opening. Without repair the walk
/// stops at the first unterminated container.
fn scan(scope: &str, repair: bool, attempted: &mut Vec<Strategy>) -> Option<(Value, Strategy)> {
    for start in opening_candidates(scope).take(MAX_CANDIDATES) {
        match find_balanced(scope, start) {
            Balance::Closed { end } => {
                if let Ok(value) = serde_json::from_str::<Value>(&scope[start..end]) {
                    return Some((value, Strategy::Balanced));
                }
            }
            Balance::Unterminated if repair => {
                if !attempted.contains(&Strategy::Repaired) {
                    attempted.push(Strategy::Repaired);
                }
                tracing::debug!(start, "unterminated container; entering repair mode");
                if let Some(repaired) = repair_truncated(scope, start) {
                    return Some((repaired.value, Strategy::Repaired));
                }
            }
            Balance::Unterminated => return None,
            Balance::Mismatched { .. } => {}
        }
    }
    None
}
