//! Sweep axis discovery and flattening.

use super::expand::Combinations;
use super::marker::SweepMarker;
use super::tree::{Node, SweepDocument};
use serde::{Serialize, Serializer};
use serde_yaml::{Mapping, Value};
use std::fmt;

/// Keys from the document root to one axis. The last segment is the axis
/// name with the marker stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxisPath {
    segments: Vec<String>,
}

impl AxisPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True if the path consists of exactly `segments`.
    pub fn matches<S: AsRef<str>>(&self, segments: &[S]) -> bool {
        self.segments.len() == segments.len()
            && self
                .segments
                .iter()
                .zip(segments)
                .all(|(own, other)| own == other.as_ref())
    }

    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Dotted path with the marker restored on the axis name, e.g. `a._sweep_x`.
    pub fn marker_key(&self, marker: &SweepMarker) -> String {
        match self.segments.split_last() {
            Some((name, parents)) => parents
                .iter()
                .cloned()
                .chain(std::iter::once(marker.mark(name)))
                .collect::<Vec<_>>()
                .join("."),
            None => String::new(),
        }
    }
}

impl fmt::Display for AxisPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl Serialize for AxisPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Node of an [`AxisTree`].
#[derive(Debug, Clone, PartialEq)]
pub enum AxisNode {
    Axis(Vec<Value>),
    Branch(AxisTree),
}

/// Pruned mirror of a document holding only the branches that lead to axes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisTree {
    entries: Vec<(String, AxisNode)>,
}

impl AxisTree {
    pub fn entries(&self) -> &[(String, AxisNode)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Collapse nesting into one entry per axis, in document order.
    pub fn flatten(&self) -> FlatAxes {
        let mut axes = Vec::new();
        flatten_into(self, &mut Vec::new(), &mut axes);
        FlatAxes { axes }
    }

    /// The tree as a YAML mapping, axis keys written with `marker`.
    pub fn to_value(&self, marker: &SweepMarker) -> Value {
        let mut mapping = Mapping::new();
        for (key, node) in &self.entries {
            match node {
                AxisNode::Axis(candidates) => {
                    mapping.insert(
                        Value::String(marker.mark(key)),
                        Value::Sequence(candidates.clone()),
                    );
                }
                AxisNode::Branch(subtree) => {
                    mapping.insert(Value::String(key.clone()), subtree.to_value(marker));
                }
            }
        }
        Value::Mapping(mapping)
    }
}

fn flatten_into(tree: &AxisTree, prefix: &mut Vec<String>, out: &mut Vec<FlatAxis>) {
    for (key, node) in &tree.entries {
        prefix.push(key.clone());
        match node {
            AxisNode::Axis(candidates) => out.push(FlatAxis {
                path: AxisPath::new(prefix.clone()),
                candidates: candidates.clone(),
            }),
            AxisNode::Branch(subtree) => flatten_into(subtree, prefix, out),
        }
        prefix.pop();
    }
}

/// Find every axis in `document`. Branches without axes are pruned; a
/// document without axes yields an empty tree.
pub fn discover_axes(document: &SweepDocument) -> AxisTree {
    discover_in(document.entries())
}

fn discover_in(entries: &[super::tree::Entry]) -> AxisTree {
    let mut tree = AxisTree::default();
    for entry in entries {
        match &entry.node {
            Node::Axis(axis) => tree
                .entries
                .push((entry.label.clone(), AxisNode::Axis(axis.candidates.clone()))),
            Node::Map(children) => {
                let subtree = discover_in(children);
                if !subtree.is_empty() {
                    tree.entries
                        .push((entry.label.clone(), AxisNode::Branch(subtree)));
                }
            }
            Node::Leaf(_) => {}
        }
    }
    tree
}

/// One axis of the expansion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatAxis {
    pub path: AxisPath,
    pub candidates: Vec<Value>,
}

/// Axes in expansion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlatAxes {
    axes: Vec<FlatAxis>,
}

impl FlatAxes {
    pub fn new(axes: Vec<FlatAxis>) -> Self {
        Self { axes }
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlatAxis> {
        self.axes.iter()
    }

    pub fn as_slice(&self) -> &[FlatAxis] {
        &self.axes
    }

    /// Axis at `segments`. Keys may contain dots, so lookups never go
    /// through the dotted rendering.
    pub fn get<S: AsRef<str>>(&self, segments: &[S]) -> Option<&FlatAxis> {
        self.axes.iter().find(|axis| axis.path.matches(segments))
    }

    /// Product of the candidate counts; `None` on overflow. No axes gives 1.
    pub fn combination_count(&self) -> Option<usize> {
        self.axes
            .iter()
            .try_fold(1usize, |acc, axis| acc.checked_mul(axis.candidates.len()))
    }

    /// Lazily enumerate every combination in lexicographic order.
    pub fn combinations(&self) -> Combinations<'_> {
        Combinations::new(self)
    }
}

impl<'a> IntoIterator for &'a FlatAxes {
    type Item = &'a FlatAxis;
    type IntoIter = std::slice::Iter<'a, FlatAxis>;

    fn into_iter(self) -> Self::IntoIter {
        self.axes.iter()
    }
}
