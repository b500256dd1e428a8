use anyhow::Context;
use inquest_config::InquestConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod assemble;
pub mod extract;
pub mod normalize;
pub mod schema;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Commands::Schema(args) = &command {
        return schema::handle(args, flags);
    }

    let config = InquestConfig::load_with_dotenv().context("failed to load inquest configuration")?;
    match command {
        Commands::Extract(args) => extract::handle(&args, &config, flags),
        Commands::Normalize(args) => normalize::handle(&args, &config, flags),
        Commands::Assemble(args) => assemble::handle(&args, &config, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched"),
    }
}
