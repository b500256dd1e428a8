use inquest_core::entities::Finding;
use inquest_core::enums::RecordKind;

use super::fields::RawRecord;
use super::{ElementContext, FromRaw};

const STATEMENT_KEYS: &[&str] = &["statement", "text", "finding", "description", "content"];
const EVIDENCE_KEYS: &[&str] = &["evidence_support", "evidence", "evidence_ids", "evidence_refs"];
const TIMELINE_KEYS: &[&str] = &["timeline_refs", "timeline", "timeline_ids", "events"];

impl FromRaw for Finding {
    const KIND: RecordKind = RecordKind::Finding;

    fn from_raw(raw: &RawRecord<'_>, ctx: &mut ElementContext<'_>) -> Option<Self> {
        let Some(statement) = raw.block(STATEMENT_KEYS) else {
            ctx.skip(Self::KIND, "no statement");
            return None;
        };
        Some(Self {
            id: ctx.id_or_default(raw, Self::KIND, "F"),
            statement,
            evidence_support: raw.ids(EVIDENCE_KEYS),
            timeline_refs: raw.ids(TIMELINE_KEYS),
        })
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}
