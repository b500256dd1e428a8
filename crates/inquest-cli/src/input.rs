//! Reading command input from a file or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Read `path` to a string; `-` reads stdin.
pub fn read_text(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
