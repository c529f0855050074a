//! CLI domain: parse, route, help, output, and presentation only.
//! No sweep logic; the route table dispatches to the sweep module.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_outcome_json, format_outcome_text, format_plan_json, format_plan_text,
};
pub use route::RunContext;
