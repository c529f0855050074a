//! Config loading facade: the only entry point that assembles sources.

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::SweepConfig;
use crate::error::SweepError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads [`SweepConfig`] from defaults, config files and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace files,
    /// `HLRN_SWEEP__*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<SweepConfig, SweepError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: SweepConfig = builder.build()?.try_deserialize()?;
        config.validate_or_err()?;
        debug!(workspace = %workspace_root.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from a single file, replacing the global and
    /// workspace files. Environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<SweepConfig, SweepError> {
        if !path.exists() {
            return Err(SweepError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true));
        let builder = environment::add_to_builder(builder);

        let config: SweepConfig = builder.build()?.try_deserialize()?;
        config.validate_or_err()?;
        Ok(config)
    }

    /// Global config file location, if a home directory can be determined.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    /// Defaults only, without reading any source.
    pub fn defaults() -> Result<SweepConfig, SweepError> {
        let config: SweepConfig = merge_policy::builder_with_defaults()?
            .build()?
            .try_deserialize()?;
        Ok(config)
    }
}
