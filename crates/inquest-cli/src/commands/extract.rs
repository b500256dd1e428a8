use inquest_config::InquestConfig;
use inquest_recover::extract_with;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExtractArgs;
use crate::input::read_text;
use crate::output::output;

/// Handle `inq extract`.
pub fn handle(args: &ExtractArgs, config: &InquestConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_text(&args.input)?;
    let recovered = extract_with(&text, &config.parser)?;
    if recovered.is_partial() && !flags.quiet {
        tracing::warn!(strategy = recovered.strategy.as_str(), "recovered value is partial");
    }
    output(&recovered, flags.format)
}
