use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The eight sections of a report, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    ExecutiveSummary,
    Introduction,
    SequenceOfEvents,
    Findings,
    Analysis,
    Conclusions,
    Recommendations,
    EvidenceRegister,
}

impl Section {
    pub const ALL: [Self; 8] = [
        Self::ExecutiveSummary,
        Self::Introduction,
        Self::SequenceOfEvents,
        Self::Findings,
        Self::Analysis,
        Self::Conclusions,
        Self::Recommendations,
        Self::EvidenceRegister,
    ];

    pub const FIRST: Self = Self::ExecutiveSummary;

    /// 1-based section number.
    #[must_use]
    pub const fn number(self) -> u32 {
        match self {
            Self::ExecutiveSummary => 1,
            Self::Introduction => 2,
            Self::SequenceOfEvents => 3,
            Self::Findings => 4,
            Self::Analysis => 5,
            Self::Conclusions => 6,
            Self::Recommendations => 7,
            Self::EvidenceRegister => 8,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ExecutiveSummary => "Executive Summary",
            Self::Introduction => "Introduction",
            Self::SequenceOfEvents => "Sequence of Events",
            Self::Findings => "Findings",
            Self::Analysis => "Analysis",
            Self::Conclusions => "Conclusions",
            Self::Recommendations => "Recommendations",
            Self::EvidenceRegister => "Evidence Register",
        }
    }

    /// The only section allowed to follow this one. `None` after the last.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::ExecutiveSummary => Some(Self::Introduction),
            Self::Introduction => Some(Self::SequenceOfEvents),
            Self::SequenceOfEvents => Some(Self::Findings),
            Self::Findings => Some(Self::Analysis),
            Self::Analysis => Some(Self::Conclusions),
            Self::Conclusions => Some(Self::Recommendations),
            Self::Recommendations => Some(Self::EvidenceRegister),
            Self::EvidenceRegister => None,
        }
    }

    /// Heading text, e.g. `"4 Findings"`.
    #[must_use]
    pub fn heading(self) -> String {
        format!("{} {}", self.number(), self.title())
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExecutiveSummary => "executive_summary",
            Self::Introduction => "introduction",
            Self::SequenceOfEvents => "sequence_of_events",
            Self::Findings => "findings",
            Self::Analysis => "analysis",
            Self::Conclusions => "conclusions",
            Self::Recommendations => "recommendations",
            Self::EvidenceRegister => "evidence_register",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.as_str())
    }
}
