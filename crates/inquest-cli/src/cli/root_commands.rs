use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Recover a JSON value from raw model output.
    Extract(ExtractArgs),
    /// Recover and normalize one batch of records.
    Normalize(NormalizeArgs),
    /// Assemble a full report from a bundle of records.
    Assemble(AssembleArgs),
    /// Print the JSON schema of a record or output type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    /// File holding model output, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct NormalizeArgs {
    /// Record kind: timeline, evidence, finding, causal_factor, conclusion.
    #[arg(short, long)]
    pub kind: String,

    /// File holding model output, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct AssembleArgs {
    /// JSON bundle of record collections and optional enrichment.
    pub bundle: PathBuf,

    /// Exit non-zero after printing when validation failures exceed this
    /// count. Overrides `report.max_failures`.
    #[arg(long)]
    pub max_failures: Option<u32>,

    /// Document title. Overrides `report.title`.
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// One of: timeline, evidence, finding, causal_factor, conclusion,
    /// diagnostics, block, report, bundle.
    pub type_name: String,
}
