//! Assembly bundles: every record collection plus optional enrichment in
//! one JSON document.
//!
//! Each collection is either an already-structured array or the raw model
//! text it came from. Either way it goes through the normalizer, so typed
//! and recovered input obey the same invariants.

use inquest_config::{InquestConfig, NormalizerConfig};
use inquest_core::diagnostics::Diagnostics;
use inquest_core::enums::RecordKind;
use inquest_records::normalize::{
    Normalized, normalize_causal_factors, normalize_conclusions, normalize_evidence,
    normalize_findings, normalize_timeline, recover,
};
use inquest_report::{Enrichment, ReportInput};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct Bundle {
    /// Array of timeline entries, or raw model text.
    #[serde(default)]
    pub timeline: Option<Value>,
    #[serde(default)]
    pub evidence: Option<Value>,
    #[serde(default)]
    pub findings: Option<Value>,
    #[serde(default)]
    pub causal_factors: Option<Value>,
    #[serde(default)]
    pub conclusions: Option<Value>,
    #[serde(default)]
    pub enrichment: Enrichment,
}

impl Bundle {
    /// Normalize every collection into report input.
    pub fn into_input(self, config: &InquestConfig) -> ReportInput {
        let mut diagnostics = Diagnostics::new();
        let mut collect = |field: Option<Value>, kind: RecordKind| {
            load(field, kind, config, &mut diagnostics)
        };
        let timeline = collect(self.timeline, RecordKind::Timeline);
        let evidence = collect(self.evidence, RecordKind::Evidence);
        let findings = collect(self.findings, RecordKind::Finding);
        let causal_factors = collect(self.causal_factors, RecordKind::CausalFactor);
        let conclusions = collect(self.conclusions, RecordKind::Conclusion);

        ReportInput {
            timeline: batch(timeline, normalize_timeline, &config.normalizer, &mut diagnostics),
            evidence: batch(evidence, normalize_evidence, &config.normalizer, &mut diagnostics),
            findings: batch(findings, normalize_findings, &config.normalizer, &mut diagnostics),
            causal_factors: batch(
                causal_factors,
                normalize_causal_factors,
                &config.normalizer,
                &mut diagnostics,
            ),
            conclusions: batch(
                conclusions,
                normalize_conclusions,
                &config.normalizer,
                &mut diagnostics,
            ),
            enrichment: self.enrichment,
            diagnostics,
        }
    }
}

/// Turn one bundle field into a structured value, recovering raw text
/// first. `None` when the field is absent or nothing could be recovered.
fn load(
    field: Option<Value>,
    kind: RecordKind,
    config: &InquestConfig,
    diagnostics: &mut Diagnostics,
) -> Option<Value> {
    match field? {
        Value::String(text) => match recover(&text, kind, &config.parser) {
            Ok((value, recovered)) => {
                diagnostics.extend(recovered);
                Some(value)
            }
            Err(failed) => {
                diagnostics.extend(failed);
                None
            }
        },
        value => Some(value),
    }
}

fn batch<T>(
    value: Option<Value>,
    normalize: fn(&Value, &NormalizerConfig) -> Normalized<T>,
    config: &NormalizerConfig,
    diagnostics: &mut Diagnostics,
) -> Vec<T> {
    let Some(value) = value else {
        return Vec::new();
    };
    let normalized = normalize(&value, config);
    diagnostics.extend(normalized.diagnostics);
    normalized.records
}

#[cfg(test)]
mod tests {
    use inquest_core::diagnostics::WarningCode;
    use serde_json::json;

    use super::Bundle;
    use inquest_config::InquestConfig;

    #[test]
    fn typed_and_raw_collections_are_both_normalized() {
        let bundle: Bundle = serde_json::from_value(json!({
            "timeline": [
                {"id": "TL-1", "description": "Engine fire warning", "is_initiating_event": true}
            ],
            "evidence": "Register follows:\n```json\n[{\"id\": \"EV-1\", \"descriptor\": \"FDR\"}]\n```",
            "causal_factors": "I could not identify any causal factors."
        }))
        .expect("bundle");
        let input = bundle.into_input(&InquestConfig::default());
        assert_eq!(input.timeline.len(), 1);
        assert_eq!(input.evidence[0].descriptor, "FDR");
        assert!(input.causal_factors.is_empty());
        assert!(input.findings.is_empty());
        assert_eq!(input.diagnostics.count(WarningCode::NoDataRecovered), 1);
    }

    #[test]
    fn enrichment_is_carried_through() {
        let bundle: Bundle = serde_json::from_value(json!({
            "enrichment": {"recommendations": ["Review fuel policy"]}
        }))
        .expect("bundle");
        let input = bundle.into_input(&InquestConfig::default());
        assert_eq!(input.enrichment.recommendations, vec!["Review fuel policy"]);
        assert!(input.diagnostics.is_clean());
    }
}
