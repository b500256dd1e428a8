//! Error types shared by every Inquest crate.
//!
//! Domain-specific errors (`ParseFailure`, `AssemblyError`, `ConfigError`)
//! live in their own crates. `anyhow` is only used at the CLI boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A label could not be mapped onto a closed classification set.
    #[error("Unknown {set} label: '{label}'")]
    UnknownLabel { set: &'static str, label: String },
}
