//! Record normalizer.
//!
//! Converts an untyped recovered value into one closed set of typed records,
//! produced exactly once at this boundary. Bad elements are skipped with a
//! warning; a batch is never rejected as a whole.
//!
//! A batch may arrive as:
//! - an array of elements
//! - an object wrapping the array under a plural key (`{"findings": [...]}`)
//! - a single object, treated as a one-element batch

mod causal_factor;
mod conclusion;
mod evidence;
mod fields;
mod finding;
pub(crate) mod text;
mod time;
mod timeline;

use inquest_config::{NormalizerConfig, ParserConfig};
use inquest_core::diagnostics::{Diagnostics, Warning, WarningCode};
use inquest_core::entities::{CausalFactor, Conclusion, Evidence, Finding, TimelineEntry};
use inquest_core::enums::RecordKind;
use inquest_recover::extract_with;
use serde::Serialize;
use serde_json::Value;

use self::fields::RawRecord;

/// Records produced from one batch, with everything that went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<T> {
    pub records: Vec<T>,
    pub diagnostics: Diagnostics,
}

impl<T> Normalized<T> {
    #[must_use]
    pub fn empty(diagnostics: Diagnostics) -> Self {
        Self {
            records: Vec::new(),
            diagnostics,
        }
    }

    /// Convert each record, keeping the diagnostics.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Normalized<U> {
        Normalized {
            records: self.records.into_iter().map(f).collect(),
            diagnostics: self.diagnostics,
        }
    }
}

/// Any normalized record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum Record {
    Timeline(TimelineEntry),
    Evidence(Evidence),
    Finding(Finding),
    CausalFactor(CausalFactor),
    Conclusion(Conclusion),
}

/// Per-element state handed to each record's converter.
pub(crate) struct ElementContext<'a> {
    /// 1-based position in the batch.
    pub position: usize,
    pub config: &'a NormalizerConfig,
    pub diagnostics: &'a mut Diagnostics,
}

impl ElementContext<'_> {
    pub(crate) fn warn(&mut self, kind: RecordKind, id: &str, code: WarningCode, message: String) {
        tracing::warn!(record = %id, %code, "{message}");
        self.diagnostics
            .warn(Warning::new(code, message).for_record(kind, id));
    }

    /// The element's id, or `{prefix}-{position}` with a warning.
    pub(crate) fn id_or_default(
        &mut self,
        raw: &RawRecord<'_>,
        kind: RecordKind,
        prefix: &str,
    ) -> String {
        if let Some(id) = raw.line(&["id", "ref", "identifier"]) {
            return id;
        }
        let id = format!("{prefix}-{}", self.position);
        self.warn(
            kind,
            &id,
            WarningCode::DefaultSubstituted,
            format!("element {} has no id; assigned {id}", self.position),
        );
        id
    }

    /// Skip the current element with a warning.
    pub(crate) fn skip(&mut self, kind: RecordKind, reason: &str) {
        let message = format!("skipped {kind} element {}: {reason}", self.position);
        tracing::warn!(position = self.position, %kind, "{message}");
        self.diagnostics
            .warn(Warning::new(WarningCode::SkippedElement, message).for_kind(kind));
    }
}

/// Conversion from one raw element into a typed record.
pub(crate) trait FromRaw: Sized {
    const KIND: RecordKind;

    /// `None` means the element was skipped; the converter has already
    /// recorded why.
    fn from_raw(raw: &RawRecord<'_>, ctx: &mut ElementContext<'_>) -> Option<Self>;

    /// Identity used to reject duplicates within one batch.
    fn id(&self) -> Option<&str>;
}

/// Normalize `value` against `schema`.
#[must_use]
pub fn normalize(value: &Value, schema: RecordKind, config: &NormalizerConfig) -> Normalized<Record> {
    match schema {
        RecordKind::Timeline => normalize_timeline(value, config).map(Record::Timeline),
        RecordKind::Evidence => normalize_evidence(value, config).map(Record::Evidence),
        RecordKind::Finding => normalize_findings(value, config).map(Record::Finding),
        RecordKind::CausalFactor => {
            normalize_causal_factors(value, config).map(Record::CausalFactor)
        }
        RecordKind::Conclusion => normalize_conclusions(value, config).map(Record::Conclusion),
    }
}

/// Recover a value from model text, then normalize it.
///
/// A parse failure becomes a `no_data_recovered` warning on an empty batch;
/// a repaired (truncated) value adds a `partial_recovery` warning.
#[must_use]
pub fn normalize_text(
    text: &str,
    schema: RecordKind,
    parser: &ParserConfig,
    config: &NormalizerConfig,
) -> Normalized<Record> {
    match recover(text, schema, parser) {
        Ok((value, diagnostics)) => {
            let mut normalized = normalize(&value, schema, config);
            let mut merged = diagnostics;
            merged.extend(normalized.diagnostics);
            normalized.diagnostics = merged;
            normalized
        }
        Err(diagnostics) => Normalized::empty(diagnostics),
    }
}

/// Run the text recovery parser for one schema, translating its outcome
/// into diagnostics.
///
/// # Errors
///
/// Returns the diagnostics describing the failure when nothing was recovered.
pub fn recover(
    text: &str,
    schema: RecordKind,
    parser: &ParserConfig,
) -> Result<(Value, Diagnostics), Diagnostics> {
    let mut diagnostics = Diagnostics::new();
    match extract_with(text, parser) {
        Ok(recovered) => {
            if recovered.is_partial() {
                diagnostics.warn(
                    Warning::new(
                        WarningCode::PartialRecovery,
                        format!("{schema} output was truncated; trailing element discarded"),
                    )
                    .for_kind(schema),
                );
            }
            Ok((recovered.value, diagnostics))
        }
        Err(failure) => {
            diagnostics.warn(
                Warning::new(WarningCode::NoDataRecovered, failure.to_string()).for_kind(schema),
            );
            Err(diagnostics)
        }
    }
}

#[must_use]
pub fn normalize_timeline(value: &Value, config: &NormalizerConfig) -> Normalized<TimelineEntry> {
    let mut normalized = normalize_batch::<TimelineEntry>(value, config);
    timeline::audit_initiating_events(&normalized.records, &mut normalized.diagnostics);
    normalized
}

#[must_use]
pub fn normalize_evidence(value: &Value, config: &NormalizerConfig) -> Normalized<Evidence> {
    normalize_batch(value, config)
}

#[must_use]
pub fn normalize_findings(value: &Value, config: &NormalizerConfig) -> Normalized<Finding> {
    normalize_batch(value, config)
}

#[must_use]
pub fn normalize_causal_factors(
    value: &Value,
    config: &NormalizerConfig,
) -> Normalized<CausalFactor> {
    normalize_batch(value, config)
}

#[must_use]
pub fn normalize_conclusions(value: &Value, config: &NormalizerConfig) -> Normalized<Conclusion> {
    normalize_batch(value, config)
}

pub use timeline::audit_initiating_events;

fn normalize_batch<T: FromRaw>(value: &Value, config: &NormalizerConfig) -> Normalized<T> {
    let mut diagnostics = Diagnostics::new();
    let elements = batch_elements(value, T::KIND);
    let mut records: Vec<T> = Vec::with_capacity(elements.len());

    for (index, element) in elements.into_iter().enumerate() {
        let mut ctx = ElementContext {
            position: index + 1,
            config,
            diagnostics: &mut diagnostics,
        };
        let Some(map) = element.as_object() else {
            ctx.skip(T::KIND, "not an object");
            continue;
        };
        let Some(record) = T::from_raw(&RawRecord::new(map), &mut ctx) else {
            continue;
        };
        if let Some(id) = record.id() {
            if records.iter().any(|existing| existing.id() == Some(id)) {
                let reason = format!("duplicate id {id}");
                ctx.skip(T::KIND, &reason);
                continue;
            }
        }
        records.push(record);
    }

    tracing::debug!(kind = %T::KIND, kept = records.len(), "normalized batch");
    Normalized {
        records,
        diagnostics,
    }
}

/// Flatten the accepted batch shapes into a list of elements.
fn batch_elements(value: &Value, kind: RecordKind) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => {
            let wrapped = kind
                .batch_keys()
                .iter()
                .chain(["items", "records", "data"].iter())
                .find_map(|key| map.get(*key).and_then(Value::as_array));
            wrapped.map_or_else(|| vec![value], |items| items.iter().collect())
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn wrapped_batches_are_unwrapped() {
        let value = json!({"findings": [{"statement": "A"}, {"statement": "B"}]});
        let normalized = normalize_findings(&value, &NormalizerConfig::default());
        assert_eq!(normalized.records.len(), 2);
    }

    #[test]
    fn single_object_is_a_one_element_batch() {
        let value = json!({"id": "EV-1", "descriptor": "Photo of gauge"});
        let normalized = normalize_evidence(&value, &NormalizerConfig::default());
        assert_eq!(normalized.records.len(), 1);
        assert!(normalized.diagnostics.is_clean());
    }

    #[test]
    fn scalars_yield_nothing() {
        let normalized = normalize(&json!("nope"), RecordKind::Evidence, &NormalizerConfig::default());
        assert!(normalized.records.is_empty());
    }

    #[test]
    fn non_objects_are_skipped_with_warning() {
        let value = json!([{"id": "EV-1", "descriptor": "Log"}, 42, "text"]);
        let normalized = normalize_evidence(&value, &NormalizerConfig::default());
        assert_eq!(normalized.records.len(), 1);
        assert_eq!(normalized.diagnostics.count(WarningCode::SkippedElement), 2);
    }

    #[test]
    fn duplicate_ids_keep_the_first() {
        let value = json!([
            {"id": "EV-1", "descriptor": "First"},
            {"id": "EV-1", "descriptor": "Second"}
        ]);
        let normalized = normalize_evidence(&value, &NormalizerConfig::default());
        assert_eq!(normalized.records.len(), 1);
        assert_eq!(normalized.records[0].descriptor, "First");
        assert_eq!(normalized.diagnostics.count(WarningCode::SkippedElement), 1);
    }

    #[test]
    fn unparseable_text_is_no_data_recovered() {
        let normalized = normalize_text(
            "I was unable to produce a timeline.",
            RecordKind::Timeline,
            &ParserConfig::default(),
            &NormalizerConfig::default(),
        );
        assert!(normalized.records.is_empty());
        assert_eq!(normalized.diagnostics.count(WarningCode::NoDataRecovered), 1);
    }

    #[test]
    fn truncated_text_is_flagged_partial() {
        let text = r#"```json
[{"statement": "A"}, {"statement": "B"}, {"statem"#;
        let normalized = normalize_text(
            text,
            RecordKind::Finding,
            &ParserConfig::default(),
            &NormalizerConfig::default(),
        );
        assert_eq!(normalized.records.len(), 2);
        assert_eq!(normalized.diagnostics.count(WarningCode::PartialRecovery), 1);
    }
}
