//! Merge rules: defaults, override order, conflict handling.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("sweep.marker", crate::sweep::DEFAULT_MARKER)?
        .set_default("sweep.extension", "yaml")?
        .set_default("sweep.file_prefix", "sweep_")?
        .set_default("sweep.on_empty", "identity")
}
