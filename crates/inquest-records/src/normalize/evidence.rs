use inquest_core::diagnostics::WarningCode;
use inquest_core::entities::Evidence;
use inquest_core::enums::{RecordKind, Reliability};

use super::fields::RawRecord;
use super::{ElementContext, FromRaw};

const DESCRIPTOR_KEYS: &[&str] = &["descriptor", "description", "name", "title", "summary"];
const RELIABILITY_KEYS: &[&str] = &["reliability", "confidence", "grade"];

impl FromRaw for Evidence {
    const KIND: RecordKind = RecordKind::Evidence;

    fn from_raw(raw: &RawRecord<'_>, ctx: &mut ElementContext<'_>) -> Option<Self> {
        let Some(descriptor) = raw.line(DESCRIPTOR_KEYS) else {
            ctx.skip(Self::KIND, "no descriptor");
            return None;
        };
        let id = ctx.id_or_default(raw, Self::KIND, "EV");

        let reliability = match raw.line(RELIABILITY_KEYS) {
            None => Reliability::Unassessed,
            Some(label) => Reliability::classify(&label).unwrap_or_else(|| {
                ctx.warn(
                    Self::KIND,
                    &id,
                    WarningCode::UnrecognizedReliability,
                    format!("reliability {label:?} not recognised; marked unassessed"),
                );
                Reliability::Unassessed
            }),
        };

        Some(Self {
            id,
            descriptor,
            reliability,
        })
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}
