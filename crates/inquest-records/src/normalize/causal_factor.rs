use inquest_core::diagnostics::{ValidationFailure, ValidationRule, WarningCode};
use inquest_core::entities::CausalFactor;
use inquest_core::enums::{FactorCategory, RecordKind};

use super::fields::RawRecord;
use super::text::{cap_title, enforce_negative_phrasing, first_sentence};
use super::{ElementContext, FromRaw};

const TITLE_KEYS: &[&str] = &["title", "name", "factor", "heading"];
const DESCRIPTION_KEYS: &[&str] = &["description", "desc", "summary", "details"];
const ANALYSIS_KEYS: &[&str] = &["analysis_text", "analysis", "discussion"];
const CATEGORY_KEYS: &[&str] = &["category", "type", "classification", "level"];
const EVIDENCE_KEYS: &[&str] = &["evidence_support", "evidence", "evidence_ids", "evidence_refs"];
const TIMELINE_KEYS: &[&str] = &[
    "timeline_entry_id",
    "timeline_entry",
    "timeline_ref",
    "event_id",
    "attached_to",
];

impl FromRaw for CausalFactor {
    const KIND: RecordKind = RecordKind::CausalFactor;

    fn from_raw(raw: &RawRecord<'_>, ctx: &mut ElementContext<'_>) -> Option<Self> {
        let description = raw.block(DESCRIPTION_KEYS).unwrap_or_default();
        let raw_title = raw
            .line(TITLE_KEYS)
            .or_else(|| Some(first_sentence(&description)).filter(|s| !s.is_empty()));
        let Some(raw_title) = raw_title else {
            ctx.skip(Self::KIND, "no title or description");
            return None;
        };
        let id = ctx.id_or_default(raw, Self::KIND, "CF");

        let (title, rewritten) = enforce_negative_phrasing(&raw_title);
        if rewritten {
            ctx.warn(
                Self::KIND,
                &id,
                WarningCode::TitleRewritten,
                format!("title {raw_title:?} rewritten as {title:?}"),
            );
        }
        let (title, truncated) = cap_title(&title, ctx.config.title_max_chars);
        if truncated {
            ctx.warn(
                Self::KIND,
                &id,
                WarningCode::TitleTruncated,
                format!("title shortened to {} characters", title.chars().count()),
            );
        }

        let category = match raw.line(CATEGORY_KEYS) {
            None => {
                ctx.warn(
                    Self::KIND,
                    &id,
                    WarningCode::DefaultSubstituted,
                    "no category; treated as precondition".to_string(),
                );
                FactorCategory::Precondition
            }
            Some(label) => FactorCategory::classify(&label).unwrap_or_else(|| {
                ctx.warn(
                    Self::KIND,
                    &id,
                    WarningCode::UnrecognizedCategory,
                    format!("category {label:?} not recognised; treated as precondition"),
                );
                FactorCategory::Precondition
            }),
        };

        let factor = Self {
            id,
            category,
            title,
            description,
            analysis_text: raw.block(ANALYSIS_KEYS).unwrap_or_default(),
            evidence_support: raw.ids(EVIDENCE_KEYS),
            timeline_entry_id: raw.line(TIMELINE_KEYS),
        };

        if factor.title_subject().is_empty() {
            tracing::warn!(record = %factor.id, "causal factor title has no subject");
            ctx.diagnostics.fail(ValidationFailure {
                rule: ValidationRule::NegativePhrasing,
                record_kind: Self::KIND,
                record_id: factor.id.clone(),
                message: format!("title {:?} names nothing after its prefix", factor.title),
            });
            return None;
        }
        Some(factor)
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}
