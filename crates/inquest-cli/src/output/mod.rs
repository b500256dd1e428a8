use serde::Serialize;

use crate::cli::OutputFormat;

pub mod markdown;

pub use markdown::MarkdownEmitter;

/// Render a serializable response to a string in the requested format.
///
/// Markdown has no native form for arbitrary data, so it gets a fenced
/// JSON block.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Markdown => Ok(format!(
            "```json\n{}\n```",
            serde_json::to_string_pretty(value)?
        )),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}
