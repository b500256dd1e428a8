use std::io::Write;

use anyhow::{Context, bail};
use inquest_config::{InquestConfig, ReportConfig};
use inquest_core::diagnostics::Diagnostics;
use inquest_core::render::DocumentEmitter;
use inquest_report::generate;

use crate::bundle::Bundle;
use crate::cli::root_commands::AssembleArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::input::read_text;
use crate::output::{MarkdownEmitter, output};

/// Handle `inq assemble`.
pub fn handle(args: &AssembleArgs, config: &InquestConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let raw = read_text(&args.bundle)?;
    let bundle: Bundle = serde_json::from_str(&raw)
        .with_context(|| format!("invalid bundle {}", args.bundle.display()))?;

    let report_config = report_config(args, &config.report);
    let report = generate(bundle.into_input(config), &report_config);

    match flags.format {
        OutputFormat::Markdown => {
            let stdout = std::io::stdout();
            let mut emitter = MarkdownEmitter::new(stdout.lock());
            emitter.emit(&report.blocks).context("failed to write markdown")?;
            if !flags.quiet {
                summarize(&report.diagnostics)?;
            }
        }
        OutputFormat::Json | OutputFormat::Raw => output(&report, flags.format)?,
    }

    let failures = report.diagnostics.failures.len();
    if report_config.exceeds_failure_limit(failures) {
        bail!(
            "{failures} validation failure(s) exceed the limit of {}",
            report_config.max_failures.unwrap_or_default()
        );
    }
    Ok(())
}

/// Command-line overrides on top of the loaded report settings.
fn report_config(args: &AssembleArgs, base: &ReportConfig) -> ReportConfig {
    ReportConfig {
        title: args.title.clone().unwrap_or_else(|| base.title.clone()),
        max_failures: args.max_failures.or(base.max_failures),
        ..base.clone()
    }
}

/// Diagnostics go to stderr when stdout carries the document itself.
fn summarize(diagnostics: &Diagnostics) -> anyhow::Result<()> {
    let mut stderr = std::io::stderr().lock();
    for warning in &diagnostics.warnings {
        writeln!(stderr, "warning: {warning}")?;
    }
    for failure in &diagnostics.failures {
        writeln!(stderr, "failure: {failure}")?;
    }
    Ok(())
}
