use inquest_config::InquestConfig;
use inquest_core::diagnostics::Diagnostics;
use inquest_core::enums::RecordKind;
use inquest_records::{Record, normalize_text};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NormalizeArgs;
use crate::input::read_text;
use crate::output::output;

#[derive(Debug, Serialize)]
struct NormalizeResponse {
    kind: RecordKind,
    records: Vec<Record>,
    diagnostics: Diagnostics,
}

/// Handle `inq normalize`.
pub fn handle(args: &NormalizeArgs, config: &InquestConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind: RecordKind = args.kind.parse()?;
    let text = read_text(&args.input)?;
    let normalized = normalize_text(&text, kind, &config.parser, &config.normalizer);

    output(
        &NormalizeResponse {
            kind,
            records: normalized.records,
            diagnostics: normalized.diagnostics,
        },
        flags.format,
    )
}
