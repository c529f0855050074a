//! Dry-run summary of a sweep.

use super::axes::{discover_axes, FlatAxes};
use super::settings::{EmptySweepPolicy, SweepSettings};
use super::tree::SweepDocument;
use crate::error::SweepError;
use serde::Serialize;
use serde_yaml::Value;

#[derive(Debug, Clone, Serialize)]
pub struct PlannedAxis {
    /// Dotted path with the marker stripped, as written in generated configs
    pub path: String,
    /// Dotted path as written in the input document
    pub marker_key: String,
    pub candidates: Vec<Value>,
}

/// Axes of a document and the number of configs a generation would write.
#[derive(Debug, Clone, Serialize)]
pub struct SweepPlan {
    pub axes: Vec<PlannedAxis>,
    /// Product of the candidate counts
    pub combinations: usize,
    /// Configs a generation would write, after the zero-axis policy
    pub outputs: usize,
    /// Pruned tree of the input holding only the sweep axes
    pub tree: Value,
}

impl SweepPlan {
    pub fn build(document: &Value, settings: &SweepSettings) -> Result<Self, SweepError> {
        let marker = settings.marker();
        let sweep = SweepDocument::parse(document, &marker)?;
        let tree = discover_axes(&sweep);
        let flat: FlatAxes = tree.flatten();

        let combinations = flat
            .combination_count()
            .ok_or(SweepError::TooManyCombinations)?;
        let outputs = if flat.is_empty() && settings.on_empty == EmptySweepPolicy::Skip {
            0
        } else {
            combinations
        };

        let axes = flat
            .iter()
            .map(|axis| PlannedAxis {
                path: axis.path.to_string(),
                marker_key: axis.path.marker_key(&marker),
                candidates: axis.candidates.clone(),
            })
            .collect();

        Ok(Self {
            axes,
            combinations,
            outputs,
            tree: tree.to_value(&marker),
        })
    }
}
