//! Environment source: HLRN_SWEEP__SWEEP__MARKER=... style overrides.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Add the environment override source to builder. Highest precedence.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("HLRN_SWEEP")
            .prefix_separator("__")
            .separator("__"),
    )
}
