use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TimelineKind;

/// One entry in the sequence of events.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimelineEntry {
    pub id: String,
    /// `None` when the time is unknown or could not be parsed.
    pub timestamp: Option<NaiveDateTime>,
    pub kind: TimelineKind,
    pub description: String,
    pub is_initiating_event: bool,
    pub evidence_ids: Vec<String>,
}

impl TimelineEntry {
    /// Human-readable time, e.g. `"14 March 2024 at 09:30"`.
    #[must_use]
    pub fn time_label(&self) -> Option<String> {
        self.timestamp
            .map(|ts| ts.format("%-d %B %Y at %H:%M").to_string())
    }
}
