//! Workspace config file source: hlrn-sweep.toml and hlrn-sweep.{env}.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

/// Base workspace config file.
pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join("hlrn-sweep.toml")
}

/// Add workspace config files to builder.
/// Precedence: hlrn-sweep.toml (base) then hlrn-sweep.{HLRN_SWEEP_ENV}.toml when the
/// variable is set.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = builder;

    let base_config_path = workspace_config_path(workspace_root);
    if base_config_path.exists() {
        builder = builder.add_source(File::from(base_config_path).required(false));
    }

    if let Ok(env_name) = std::env::var("HLRN_SWEEP_ENV") {
        let env_config_path = workspace_root.join(format!("hlrn-sweep.{}.toml", env_name));
        if env_config_path.exists() {
            builder = builder.add_source(File::from(env_config_path).required(false));
        }
    }

    Ok(builder)
}
