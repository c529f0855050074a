//! Tagged sweep document.
//!
//! A parsed configuration where every sweep axis is an explicit [`Node::Axis`]
//! instead of a prefixed key. All later stages work on this tree.

use super::marker::SweepMarker;
use crate::error::{StructureError, SweepError};
use serde_yaml::{Mapping, Value};
use std::collections::HashSet;

/// One node of a sweep document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Scalar, sequence, null or tagged value used as is.
    Leaf(Value),
    /// Nested mapping.
    Map(Vec<Entry>),
    /// Expansion axis.
    Axis(Axis),
}

/// A mapping entry. For axes, `key` is already the stripped parameter name.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: Value,
    /// Text used for this key in dotted axis paths.
    pub label: String,
    pub node: Node,
}

/// A parameter to expand over.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub name: String,
    /// Candidates are opaque: nested mappings are never scanned for markers.
    pub candidates: Vec<Value>,
}

/// Configuration document with its sweep axes tagged.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDocument {
    entries: Vec<Entry>,
    marker: SweepMarker,
}

impl SweepDocument {
    /// Parse a document, recognising keys that start with `marker` as axes.
    pub fn parse(value: &Value, marker: &SweepMarker) -> Result<Self, StructureError> {
        let mapping = value.as_mapping().ok_or_else(|| StructureError::NotAMapping {
            path: dotted(&[]),
            found: describe(value).to_string(),
        })?;
        let entries = parse_mapping(mapping, marker, &mut Vec::new())?;
        Ok(Self {
            entries,
            marker: marker.clone(),
        })
    }

    pub fn from_yaml_str(text: &str, marker: &SweepMarker) -> Result<Self, SweepError> {
        let value: Value = serde_yaml::from_str(text)?;
        Ok(Self::parse(&value, marker)?)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn marker(&self) -> &SweepMarker {
        &self.marker
    }
}

fn parse_mapping(
    mapping: &Mapping,
    marker: &SweepMarker,
    path: &mut Vec<String>,
) -> Result<Vec<Entry>, StructureError> {
    let mut entries = Vec::with_capacity(mapping.len());
    let mut output_keys = HashSet::new();

    for (key, value) in mapping {
        let label = key_label(key);
        path.push(label.clone());

        let axis_name = key.as_str().and_then(|k| marker.strip(k));
        let entry = match axis_name {
            Some(name) => {
                if name.is_empty() {
                    return Err(StructureError::EmptyAxisName { path: dotted(path) });
                }
                let candidates = match value {
                    Value::Sequence(items) => items.clone(),
                    other => {
                        return Err(StructureError::InvalidCandidates {
                            path: dotted(path),
                            found: describe(other).to_string(),
                        })
                    }
                };
                Entry {
                    key: Value::String(name.to_string()),
                    label: name.to_string(),
                    node: Node::Axis(Axis {
                        name: name.to_string(),
                        candidates,
                    }),
                }
            }
            None => {
                let node = match value {
                    Value::Mapping(inner) => Node::Map(parse_mapping(inner, marker, path)?),
                    other => Node::Leaf(other.clone()),
                };
                Entry {
                    key: key.clone(),
                    label,
                    node,
                }
            }
        };
        path.pop();

        // Source keys are unique, so a repeat can only come from a stripped
        // axis name. `1` and "1" are different keys.
        if !output_keys.insert(entry.key.clone()) {
            return Err(StructureError::KeyCollision {
                path: dotted(path),
                key: entry.label,
            });
        }
        entries.push(entry);
    }

    Ok(entries)
}

/// Text of a mapping key as it appears in a dotted path.
pub(crate) fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| describe(other).to_string()),
    }
}

pub(crate) fn dotted(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
