use inquest_core::entities::Conclusion;
use inquest_core::enums::RecordKind;

use super::fields::RawRecord;
use super::{ElementContext, FromRaw};

const STATEMENT_KEYS: &[&str] = &["statement", "text", "conclusion", "description", "content"];
const FACTOR_KEYS: &[&str] = &[
    "causal_factor_refs",
    "causal_factors",
    "factor_refs",
    "factors",
];

impl FromRaw for Conclusion {
    const KIND: RecordKind = RecordKind::Conclusion;

    fn from_raw(raw: &RawRecord<'_>, ctx: &mut ElementContext<'_>) -> Option<Self> {
        let Some(statement) = raw.block(STATEMENT_KEYS) else {
            ctx.skip(Self::KIND, "no statement");
            return None;
        };
        Some(Self {
            statement,
            causal_factor_refs: raw.ids(FACTOR_KEYS),
        })
    }

    // Conclusions carry no identity; repeats are kept.
    fn id(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use inquest_config::NormalizerConfig;
    use serde_json::json;

    use super::super::normalize_conclusions;

    #[test]
    fn factor_refs_accept_aliases() {
        let value = json!([{"conclusion": "Fuel planning was deficient.", "factors": ["CF-1", "CF-2"]}]);
        let normalized = normalize_conclusions(&value, &NormalizerConfig::default());
        assert_eq!(normalized.records[0].causal_factor_refs, vec!["CF-1", "CF-2"]);
    }
}
