use anyhow::bail;
use inquest_core::diagnostics::Diagnostics;
use inquest_core::entities::{CausalFactor, Conclusion, Evidence, Finding, TimelineEntry};
use inquest_core::render::Block;
use inquest_report::Report;
use schemars::{Schema, schema_for};

use crate::bundle::Bundle;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Names accepted by `inq schema`.
pub const SCHEMA_NAMES: [&str; 9] = [
    "timeline",
    "evidence",
    "finding",
    "causal_factor",
    "conclusion",
    "diagnostics",
    "block",
    "report",
    "bundle",
];

/// Handle `inq schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_named(&args.type_name)?;
    output(&schema, flags.format)
}

fn schema_named(name: &str) -> anyhow::Result<Schema> {
    let schema = match name.replace('-', "_").as_str() {
        "timeline" | "timeline_entry" => schema_for!(TimelineEntry),
        "evidence" => schema_for!(Evidence),
        "finding" => schema_for!(Finding),
        "causal_factor" => schema_for!(CausalFactor),
        "conclusion" => schema_for!(Conclusion),
        "diagnostics" => schema_for!(Diagnostics),
        "block" => schema_for!(Block),
        "report" => schema_for!(Report),
        "bundle" => schema_for!(Bundle),
        _ => bail!(
            "unknown schema '{name}'; expected one of: {}",
            SCHEMA_NAMES.join(", ")
        ),
    };
    Ok(schema)
}
