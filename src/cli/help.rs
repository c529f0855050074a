//! CLI command-name contract for logging spans.

use crate::cli::parse::Commands;

/// Command name string for log spans (e.g. "generate", "plan").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate { .. } => "generate",
        Commands::Plan { .. } => "plan",
    }
}
