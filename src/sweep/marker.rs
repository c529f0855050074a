//! Reserved key prefix that turns a mapping entry into a sweep axis.

use std::fmt;

/// Prefix used when no other marker is configured.
pub const DEFAULT_MARKER: &str = "_sweep_";

/// The key prefix recognised as a sweep marker.
///
/// Only consulted at the parse boundary: once a document is parsed into a
/// [`SweepDocument`](super::SweepDocument), axes are explicit nodes and the
/// prefix no longer matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SweepMarker(String);

impl SweepMarker {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    pub fn prefix(&self) -> &str {
        &self.0
    }

    /// Axis name for `key` if it carries the marker. Only the leading prefix is
    /// removed; later occurrences are part of the name.
    pub fn strip<'a>(&self, key: &'a str) -> Option<&'a str> {
        key.strip_prefix(self.0.as_str())
    }

    /// Marker key for an axis name (inverse of [`strip`](Self::strip)).
    pub fn mark(&self, name: &str) -> String {
        format!("{}{}", self.0, name)
    }
}

impl Default for SweepMarker {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl fmt::Display for SweepMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
