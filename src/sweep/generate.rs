//! Sweep directory generation.

use super::axes::discover_axes;
use super::materialize::materialize;
use super::settings::{EmptySweepPolicy, SweepSettings};
use super::tree::SweepDocument;
use crate::error::SweepError;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Result of a generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepOutcome {
    /// Configs written by this call, in generation order.
    Generated(Vec<PathBuf>),
    /// The sweep directory already existed; its configs were left untouched.
    Resumed(Vec<PathBuf>),
}

impl SweepOutcome {
    pub fn files(&self) -> &[PathBuf] {
        match self {
            SweepOutcome::Generated(files) | SweepOutcome::Resumed(files) => files,
        }
    }

    pub fn into_files(self) -> Vec<PathBuf> {
        match self {
            SweepOutcome::Generated(files) | SweepOutcome::Resumed(files) => files,
        }
    }

    pub fn is_resumed(&self) -> bool {
        matches!(self, SweepOutcome::Resumed(_))
    }

    pub fn status(&self) -> &'static str {
        match self {
            SweepOutcome::Generated(_) => "generated",
            SweepOutcome::Resumed(_) => "resumed",
        }
    }
}

/// Expands sweep documents into per-combination config files.
#[derive(Debug, Clone, Default)]
pub struct SweepGenerator {
    settings: SweepSettings,
}

impl SweepGenerator {
    /// Create a generator; settings that would produce unusable file names
    /// are rejected.
    pub fn new(settings: SweepSettings) -> Result<Self, SweepError> {
        settings.validate().map_err(SweepError::ConfigError)?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &SweepSettings {
        &self.settings
    }

    /// Directory holding the configs for `target`: the target with its
    /// extension removed (`runs/lr.yaml` -> `runs/lr`).
    pub fn output_dir(target: &Path) -> PathBuf {
        target.with_extension("")
    }

    /// Path of the `index`-th config inside `dir`.
    pub fn config_path(&self, dir: &Path, index: usize) -> PathBuf {
        dir.join(format!(
            "{}{}.{}",
            self.settings.file_prefix, index, self.settings.extension
        ))
    }

    /// Generate one config per combination under the output directory of
    /// `target`.
    ///
    /// An existing output directory is never regenerated: its configs are
    /// returned as [`SweepOutcome::Resumed`]. Otherwise the directory is
    /// created (failing if another process created it first) and every
    /// combination is written. A failure partway leaves the files written so
    /// far in place.
    ///
    /// The target must have an extension, and its output directory must not
    /// be an existing non-directory.
    pub fn generate(&self, document: &Value, target: &Path) -> Result<SweepOutcome, SweepError> {
        let dir = Self::output_dir(target);
        if dir == target {
            return Err(SweepError::InvalidTarget {
                path: target.to_path_buf(),
                reason: "target has no extension, so it cannot name a sweep directory".to_string(),
            });
        }
        if dir.exists() && !dir.is_dir() {
            return Err(SweepError::InvalidTarget {
                path: target.to_path_buf(),
                reason: format!("{} exists and is not a directory", dir.display()),
            });
        }
        if dir.is_dir() {
            warn!(
                dir = %dir.display(),
                "Sweep directory already exists; using existing sweep configs"
            );
            return Ok(SweepOutcome::Resumed(self.existing_configs(&dir)?));
        }

        let sweep = SweepDocument::parse(document, &self.settings.marker())?;
        let axes = discover_axes(&sweep).flatten();
        debug!(axes = axes.len(), "Discovered sweep axes");

        create_output_dir(&dir)?;

        if axes.is_empty() && self.settings.on_empty == EmptySweepPolicy::Skip {
            info!(dir = %dir.display(), "No sweep axes found; nothing to generate");
            return Ok(SweepOutcome::Generated(Vec::new()));
        }
        for axis in axes.iter().filter(|axis| axis.candidates.is_empty()) {
            warn!(axis = %axis.path, "Sweep axis has no candidates; no configs will be generated");
        }

        let mut files = Vec::new();
        for (index, combination) in axes.combinations().enumerate() {
            let config = materialize(&sweep, &combination)?;
            let path = self.config_path(&dir, index);
            let text = serde_yaml::to_string(&config)?;
            fs::write(&path, text).map_err(|source| SweepError::WriteConfig {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "Wrote sweep config");
            files.push(path);
        }

        info!(dir = %dir.display(), count = files.len(), "Generated sweep configs");
        Ok(SweepOutcome::Generated(files))
    }

    /// Configs with the configured extension directly inside `dir`, ordered
    /// by generation index; files without an index follow, sorted by name.
    pub fn existing_configs(&self, dir: &Path) -> Result<Vec<PathBuf>, SweepError> {
        let mut found = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| SweepError::ReadOutputDir {
                path: dir.to_path_buf(),
                message: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.into_path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(self.settings.extension.as_str()) {
                found.push(path);
            }
        }

        found.sort_by_cached_key(|path| {
            let index = self.config_index(path);
            (index.is_none(), index, path.file_name().map(|n| n.to_os_string()))
        });
        Ok(found)
    }

    fn config_index(&self, path: &Path) -> Option<usize> {
        path.file_stem()?
            .to_str()?
            .strip_prefix(self.settings.file_prefix.as_str())?
            .parse()
            .ok()
    }
}

fn create_output_dir(dir: &Path) -> Result<(), SweepError> {
    if let Some(parent) = dir.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SweepError::CreateOutputDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::create_dir(dir).map_err(|source| SweepError::CreateOutputDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Generate a sweep with default settings and return the config paths.
pub fn generate_sweep(document: &Value, target: impl AsRef<Path>) -> Result<Vec<PathBuf>, SweepError> {
    SweepGenerator::default()
        .generate(document, target.as_ref())
        .map(SweepOutcome::into_files)
}
