//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::SweepError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &SweepError) -> String {
    match e {
        SweepError::CreateOutputDir { path, source }
            if source.kind() == std::io::ErrorKind::AlreadyExists =>
        {
            format!(
                "Sweep directory {:?} was created by another process; re-run to use its configs",
                path
            )
        }
        _ => format!("Error: {}", e),
    }
}
