use inquest_core::diagnostics::{Diagnostics, Warning, WarningCode};
use inquest_core::entities::TimelineEntry;
use inquest_core::enums::{RecordKind, TimelineKind};

use super::fields::RawRecord;
use super::time::parse_timestamp;
use super::{ElementContext, FromRaw};

const DESCRIPTION_KEYS: &[&str] = &["description", "desc", "event", "summary", "text"];
const TIMESTAMP_KEYS: &[&str] = &["timestamp", "time", "datetime", "date"];
const KIND_KEYS: &[&str] = &["kind", "type", "entry_type", "category"];
const INITIATING_KEYS: &[&str] = &["is_initiating_event", "initiating_event", "initiating"];
const EVIDENCE_KEYS: &[&str] = &["evidence_ids", "evidence", "evidence_refs", "evidence_support"];

impl FromRaw for TimelineEntry {
    const KIND: RecordKind = RecordKind::Timeline;

    fn from_raw(raw: &RawRecord<'_>, ctx: &mut ElementContext<'_>) -> Option<Self> {
        let Some(description) = raw.block(DESCRIPTION_KEYS) else {
            ctx.skip(Self::KIND, "no description");
            return None;
        };
        let id = ctx.id_or_default(raw, Self::KIND, "TL");

        let timestamp = match raw.raw(TIMESTAMP_KEYS) {
            None => None,
            Some(value) => {
                let parsed = parse_timestamp(value);
                if parsed.is_none() {
                    ctx.warn(
                        Self::KIND,
                        &id,
                        WarningCode::UnparsedTimestamp,
                        format!("timestamp {value} not understood; time unknown"),
                    );
                }
                parsed
            }
        };

        let kind = match raw.line(KIND_KEYS) {
            None => TimelineKind::Event,
            Some(label) => TimelineKind::classify(&label).unwrap_or_else(|| {
                ctx.warn(
                    Self::KIND,
                    &id,
                    WarningCode::UnrecognizedKind,
                    format!("kind {label:?} not recognised; treated as event"),
                );
                TimelineKind::Event
            }),
        };

        Some(Self {
            id,
            timestamp,
            kind,
            description,
            is_initiating_event: raw.flag(INITIATING_KEYS).unwrap_or(false),
            evidence_ids: raw.ids(EVIDENCE_KEYS),
        })
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

/// Check that exactly one entry is flagged as the initiating event.
///
/// Adds at most one warning and never drops entries. An empty timeline has
/// nothing to audit.
pub fn audit_initiating_events(timeline: &[TimelineEntry], diagnostics: &mut Diagnostics) {
    if timeline.is_empty() {
        return;
    }
    let initiating: Vec<&str> = timeline
        .iter()
        .filter(|entry| entry.is_initiating_event)
        .map(|entry| entry.id.as_str())
        .collect();

    match initiating.len() {
        1 => {}
        0 => {
            tracing::warn!(entries = timeline.len(), "timeline has no initiating event");
            diagnostics.warn(
                Warning::new(
                    WarningCode::NoInitiatingEvent,
                    "no timeline entry is marked as the initiating event",
                )
                .for_kind(RecordKind::Timeline),
            );
        }
        n => {
            tracing::warn!(count = n, "timeline has several initiating events");
            diagnostics.warn(
                Warning::new(
                    WarningCode::MultipleInitiatingEvents,
                    format!(
                        "{n} entries are marked as the initiating event: {}",
                        initiating.join(", ")
                    ),
                )
                .for_kind(RecordKind::Timeline),
            );
        }
    }
}
