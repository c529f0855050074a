//! Sweep generation settings (the `[sweep]` config section).

use super::marker::{SweepMarker, DEFAULT_MARKER};
use serde::{Deserialize, Serialize};

/// What to generate for a document that has no sweep axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptySweepPolicy {
    /// One config equal to the input.
    #[default]
    Identity,
    /// No configs.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepSettings {
    /// Key prefix marking a sweep axis
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Extension of generated configs, without the dot: `yaml` or `yml`
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Generated configs are named `<file_prefix><index>.<extension>`
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    #[serde(default)]
    pub on_empty: EmptySweepPolicy,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_extension() -> String {
    "yaml".to_string()
}

fn default_file_prefix() -> String {
    "sweep_".to_string()
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            extension: default_extension(),
            file_prefix: default_file_prefix(),
            on_empty: EmptySweepPolicy::default(),
        }
    }
}

impl SweepSettings {
    pub fn marker(&self) -> SweepMarker {
        SweepMarker::new(self.marker.clone())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.marker.is_empty() {
            return Err("Sweep marker cannot be empty".to_string());
        }
        // Dots would make dotted axis paths ambiguous.
        if self.marker.contains('.') {
            return Err(format!("Sweep marker '{}' cannot contain '.'", self.marker));
        }
        if self.extension.is_empty() {
            return Err("Sweep file extension cannot be empty".to_string());
        }
        if self.extension.starts_with('.') {
            return Err(format!(
                "Sweep file extension '{}' must not start with '.'",
                self.extension
            ));
        }
        // Configs are always serialized as YAML.
        if !matches!(self.extension.as_str(), "yaml" | "yml") {
            return Err(format!(
                "Sweep file extension '{}' is not supported (must be 'yaml' or 'yml')",
                self.extension
            ));
        }
        if self.file_prefix.is_empty() {
            return Err("Sweep file prefix cannot be empty".to_string());
        }
        if self.file_prefix.contains(&['/', '\\'][..]) {
            return Err(format!(
                "Sweep file prefix '{}' cannot contain path separators",
                self.file_prefix
            ));
        }
        Ok(())
    }
}
