//! CLI route: single route table and run context. Dispatches to the sweep module and
//! presentation.

use crate::cli::command_name;
use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_outcome_json, format_outcome_text, format_plan_json, format_plan_text,
};
use crate::config::{ConfigLoader, SweepConfig};
use crate::error::SweepError;
use crate::sweep::{SweepGenerator, SweepPlan};
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info_span};

/// Runtime context for CLI execution: workspace root and loaded configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: SweepConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, SweepError> {
        let config = match config_path {
            Some(ref cfg_path) => ConfigLoader::load_from_file(&workspace_root.join(cfg_path))?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(workspace_root, config))
    }

    pub fn with_config(workspace_root: PathBuf, config: SweepConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, SweepError> {
        let span = info_span!("command", name = command_name(command));
        let _entered = span.enter();

        match command {
            Commands::Generate {
                input,
                target,
                format,
            } => {
                let input = self.resolve(input);
                let target = target
                    .as_ref()
                    .map(|t| self.resolve(t))
                    .unwrap_or_else(|| input.clone());
                let document = read_document(&input)?;

                let generator = SweepGenerator::new(self.config.sweep.clone())?;
                let outcome = generator.generate(&document, &target)?;
                debug!(
                    status = outcome.status(),
                    files = outcome.files().len(),
                    "Generate finished"
                );
                match format {
                    OutputFormat::Json => format_outcome_json(&outcome),
                    OutputFormat::Text => Ok(format_outcome_text(&outcome)),
                }
            }
            Commands::Plan { input, format } => {
                let document = read_document(&self.resolve(input))?;
                let plan = SweepPlan::build(&document, &self.config.sweep)?;
                match format {
                    OutputFormat::Json => format_plan_json(&plan),
                    OutputFormat::Text => Ok(format_plan_text(&plan)),
                }
            }
        }
    }

    /// Relative paths are taken relative to the workspace root.
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workspace_root.join(path)
        }
    }
}

fn read_document(path: &Path) -> Result<Value, SweepError> {
    let text = std::fs::read_to_string(path).map_err(|source| SweepError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_yaml::from_str(&text)?)
}
