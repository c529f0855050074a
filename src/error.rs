//! Error types for sweep expansion.

use std::path::PathBuf;
use thiserror::Error;

/// Document-shape errors raised while parsing or rebuilding a sweep document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("Expected a mapping at '{path}', found {found}")]
    NotAMapping { path: String, found: String },

    #[error("Sweep axis '{path}' must hold a sequence of candidates, found {found}")]
    InvalidCandidates { path: String, found: String },

    #[error("Sweep marker at '{path}' has no parameter name after the prefix")]
    EmptyAxisName { path: String },

    #[error("Key '{key}' at '{path}' collides with another key once the sweep marker is stripped")]
    KeyCollision { path: String, key: String },

    #[error("No value chosen for sweep axis '{path}'")]
    MissingChoice { path: String },

    #[error("Combination assigns '{path}', which is not a sweep axis of this document")]
    UnknownAxis { path: String },
}

/// Errors surfaced by sweep generation and the CLI.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Malformed sweep document: {0}")]
    Structure(#[from] StructureError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to read input {path:?}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid sweep target {path:?}: {reason}")]
    InvalidTarget { path: PathBuf, reason: String },

    #[error("Failed to create sweep directory {path:?}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write sweep config {path:?}: {source}")]
    WriteConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list sweep directory {path:?}: {message}")]
    ReadOutputDir { path: PathBuf, message: String },

    #[error("Sweep would produce more combinations than can be counted")]
    TooManyCombinations,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for SweepError {
    fn from(err: config::ConfigError) -> Self {
        SweepError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for SweepError {
    fn from(err: serde_json::Error) -> Self {
        SweepError::Serialization(err.to_string())
    }
}
