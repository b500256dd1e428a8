//! Diagnostics threaded through every stage of a report run.
//!
//! Nothing in the pipeline is fatal. Recovered-but-imperfect data produces a
//! [`Warning`]; a record that breaks a structural invariant produces a
//! [`ValidationFailure`]. Both are collected into [`Diagnostics`] and handed
//! back to the caller, who decides whether the totals should stop emission.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RecordKind;

/// What a warning is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WarningCode {
    /// No recovery strategy produced a value.
    NoDataRecovered,
    /// The value was repaired from truncated text.
    PartialRecovery,
    /// An element could not be turned into a record and was skipped.
    SkippedElement,
    /// A required field was missing and a default was substituted.
    DefaultSubstituted,
    /// A timestamp could not be parsed; the entry is kept as time-unknown.
    UnparsedTimestamp,
    UnrecognizedKind,
    UnrecognizedCategory,
    UnrecognizedReliability,
    /// A causal factor title was rewritten into negative form.
    TitleRewritten,
    TitleTruncated,
    NoInitiatingEvent,
    MultipleInitiatingEvents,
    /// A record refers to an id that is not in the run.
    DanglingReference,
    /// An analysis section has no supporting findings.
    TraceabilityGap,
}

impl WarningCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoDataRecovered => "no_data_recovered",
            Self::PartialRecovery => "partial_recovery",
            Self::SkippedElement => "skipped_element",
            Self::DefaultSubstituted => "default_substituted",
            Self::UnparsedTimestamp => "unparsed_timestamp",
            Self::UnrecognizedKind => "unrecognized_kind",
            Self::UnrecognizedCategory => "unrecognized_category",
            Self::UnrecognizedReliability => "unrecognized_reliability",
            Self::TitleRewritten => "title_rewritten",
            Self::TitleTruncated => "title_truncated",
            Self::NoInitiatingEvent => "no_initiating_event",
            Self::MultipleInitiatingEvents => "multiple_initiating_events",
            Self::DanglingReference => "dangling_reference",
            Self::TraceabilityGap => "traceability_gap",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural rule a record can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    /// A factor on a non-initiating event must be in the defense category.
    SubsequentEventCategory,
    /// A factor title could not be brought into negative form.
    NegativePhrasing,
}

impl ValidationRule {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SubsequentEventCategory => "subsequent_event_category",
            Self::NegativePhrasing => "negative_phrasing",
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recovered-but-imperfect data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Warning {
    pub code: WarningCode,
    pub record_kind: Option<RecordKind>,
    pub record_id: Option<String>,
    pub message: String,
}

impl Warning {
    #[must_use]
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            record_kind: None,
            record_id: None,
            message: message.into(),
        }
    }

    /// Attach the record the warning is about.
    #[must_use]
    pub fn for_record(mut self, kind: RecordKind, id: impl Into<String>) -> Self {
        self.record_kind = Some(kind);
        self.record_id = Some(id.into());
        self
    }

    #[must_use]
    pub const fn for_kind(mut self, kind: RecordKind) -> Self {
        self.record_kind = Some(kind);
        self
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.record_id {
            Some(id) => write!(f, "[{}] {id}: {}", self.code, self.message),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

/// A record that violates a structural invariant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationFailure {
    pub rule: ValidationRule,
    pub record_kind: RecordKind,
    pub record_id: String,
    pub message: String,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}: {}",
            self.rule, self.record_kind, self.record_id, self.message
        )
    }
}

/// Accumulated warnings and failures for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Diagnostics {
    pub warnings: Vec<Warning>,
    pub failures: Vec<ValidationFailure>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn fail(&mut self, failure: ValidationFailure) {
        self.failures.push(failure);
    }

    /// Record a failure unless the same rule was already recorded for the
    /// same record. Returns whether it was added.
    pub fn fail_once(&mut self, failure: ValidationFailure) -> bool {
        if self.has_failure(failure.rule, &failure.record_id) {
            return false;
        }
        self.failures.push(failure);
        true
    }

    pub fn extend(&mut self, other: Self) {
        self.warnings.extend(other.warnings);
        self.failures.extend(other.failures);
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.failures.is_empty()
    }

    /// Number of warnings with the given code.
    #[must_use]
    pub fn count(&self, code: WarningCode) -> usize {
        self.warnings.iter().filter(|w| w.code == code).count()
    }

    #[must_use]
    pub fn has_failure(&self, rule: ValidationRule, record_id: &str) -> bool {
        self.failures
            .iter()
            .any(|f| f.rule == rule && f.record_id == record_id)
    }
}
