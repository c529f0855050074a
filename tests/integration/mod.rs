//! Integration tests for hlrn-sweep

mod cli_commands;
mod generate_sweep;
mod logging_default;
