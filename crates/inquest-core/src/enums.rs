//! Closed classification sets used by investigation records.
//!
//! All enums use `snake_case` serialization. Strict parsing (`FromStr`)
//! accepts only the canonical label; `classify` is the lenient mapping used
//! at the normalizer boundary, where free-text labels from model output are
//! folded onto the closed set via a synonym table.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Lower-case a label and fold separators so `"Root-Cause"` and
/// `"root cause"` compare equal.
fn fold_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}

// ---------------------------------------------------------------------------
// TimelineKind
// ---------------------------------------------------------------------------

/// Type of a timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimelineKind {
    Action,
    Condition,
    Event,
}

impl TimelineKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::Condition => "condition",
            Self::Event => "event",
        }
    }

    /// Map a free-text label onto the closed set. `None` when nothing matches.
    #[must_use]
    pub fn classify(label: &str) -> Option<Self> {
        match fold_label(label).as_str() {
            "action" | "act" | "decision" | "task" | "human_action" | "operation" => {
                Some(Self::Action)
            }
            "condition" | "state" | "circumstance" | "situation" | "environment"
            | "environmental_condition" => Some(Self::Condition),
            "event" | "occurrence" | "incident" | "accident" | "failure" | "happening" => {
                Some(Self::Event)
            }
            _ => None,
        }
    }

    /// Title-case label for tables.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Condition => "Condition",
            Self::Event => "Event",
        }
    }
}

impl fmt::Display for TimelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimelineKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "action" => Ok(Self::Action),
            "condition" => Ok(Self::Condition),
            "event" => Ok(Self::Event),
            other => Err(CoreError::UnknownLabel {
                set: "timeline kind",
                label: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// FactorCategory
// ---------------------------------------------------------------------------

/// Causal factor category in the layered accident model.
///
/// ```text
/// organization → workplace → precondition → production → defense
/// ```
///
/// Only the initiating event is analysed across all five layers. Factors
/// attached to subsequent events must be `defense`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FactorCategory {
    Organization,
    Workplace,
    Precondition,
    Production,
    Defense,
}

impl FactorCategory {
    /// All categories in model order.
    pub const ALL: [Self; 5] = [
        Self::Organization,
        Self::Workplace,
        Self::Precondition,
        Self::Production,
        Self::Defense,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::Workplace => "workplace",
            Self::Precondition => "precondition",
            Self::Production => "production",
            Self::Defense => "defense",
        }
    }

    #[must_use]
    pub fn classify(label: &str) -> Option<Self> {
        match fold_label(label).as_str() {
            "organization" | "organisation" | "organizational" | "organisational"
            | "organizational_influence" | "organizational_influences"
            | "organisational_influences" => Some(Self::Organization),
            "workplace" | "workplace_factor" | "workplace_factors" | "supervision"
            | "supervisory" => Some(Self::Workplace),
            "precondition" | "preconditions" | "pre_condition" | "preconditions_for_unsafe_acts" => {
                Some(Self::Precondition)
            }
            "production" | "production_factor" | "unsafe_act" | "unsafe_acts" | "individual"
            | "individual_action" => Some(Self::Production),
            "defense" | "defence" | "defenses" | "defences" | "barrier" | "barriers"
            | "control" | "controls" => Some(Self::Defense),
            _ => None,
        }
    }

    /// Heading used when grouping factors in prose.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Organization => "Organisational influences",
            Self::Workplace => "Workplace factors",
            Self::Precondition => "Preconditions",
            Self::Production => "Production factors",
            Self::Defense => "Defences",
        }
    }
}

impl fmt::Display for FactorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FactorCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CoreError::UnknownLabel {
                set: "factor category",
                label: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Reliability
// ---------------------------------------------------------------------------

/// Assessed reliability of a piece of evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Reliability {
    High,
    Medium,
    Low,
    Unassessed,
}

impl Reliability {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unassessed => "unassessed",
        }
    }

    #[must_use]
    pub fn classify(label: &str) -> Option<Self> {
        match fold_label(label).as_str() {
            "high" | "reliable" | "confirmed" | "verified" | "strong" => Some(Self::High),
            "medium" | "moderate" | "probable" | "likely" => Some(Self::Medium),
            "low" | "weak" | "unreliable" | "unverified" | "anecdotal" => Some(Self::Low),
            "unassessed" | "unknown" | "not_assessed" | "n/a" | "" => Some(Self::Unassessed),
            _ => None,
        }
    }
}

impl fmt::Display for Reliability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Confidence
// ---------------------------------------------------------------------------

/// Confidence attached to a recovered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RecordKind
// ---------------------------------------------------------------------------

/// Kind of investigation record. Doubles as the normalizer's target schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Timeline,
    Evidence,
    Finding,
    CausalFactor,
    Conclusion,
}

impl RecordKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timeline => "timeline",
            Self::Evidence => "evidence",
            Self::Finding => "finding",
            Self::CausalFactor => "causal_factor",
            Self::Conclusion => "conclusion",
        }
    }

    /// Keys under which a model commonly wraps a batch of this kind.
    #[must_use]
    pub const fn batch_keys(self) -> &'static [&'static str] {
        match self {
            Self::Timeline => &["timeline", "events", "entries", "timeline_entries"],
            Self::Evidence => &["evidence", "evidence_items"],
            Self::Finding => &["findings"],
            Self::CausalFactor => &["causal_factors", "factors"],
            Self::Conclusion => &["conclusions"],
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_label(s).as_str() {
            "timeline" | "timeline_entry" => Ok(Self::Timeline),
            "evidence" => Ok(Self::Evidence),
            "finding" | "findings" => Ok(Self::Finding),
            "causal_factor" | "causal_factors" | "factor" => Ok(Self::CausalFactor),
            "conclusion" | "conclusions" => Ok(Self::Conclusion),
            _ => Err(CoreError::UnknownLabel {
                set: "record kind",
                label: s.to_string(),
            }),
        }
    }
}
