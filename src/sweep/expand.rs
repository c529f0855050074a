//! Cartesian product over sweep axes.

use super::axes::{AxisPath, FlatAxes, FlatAxis};
use serde_yaml::Value;

/// One chosen candidate per axis, in axis order.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination {
    choices: Vec<(AxisPath, Value)>,
}

impl Combination {
    pub fn new(choices: Vec<(AxisPath, Value)>) -> Self {
        Self { choices }
    }

    pub fn choices(&self) -> &[(AxisPath, Value)] {
        &self.choices
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Value chosen for the axis at `segments` (e.g. `["a", "b", "z"]`).
    pub fn get<S: AsRef<str>>(&self, segments: &[S]) -> Option<&Value> {
        self.choices
            .iter()
            .find(|(axis, _)| axis.matches(segments))
            .map(|(_, value)| value)
    }
}

/// Iterator over all combinations of a [`FlatAxes`].
///
/// Order is lexicographic in axis order: the first axis varies slowest. With
/// no axes it yields a single empty combination; an axis without candidates
/// makes it yield nothing.
pub struct Combinations<'a> {
    axes: &'a [FlatAxis],
    cursor: Option<Vec<usize>>,
}

impl<'a> Combinations<'a> {
    pub fn new(axes: &'a FlatAxes) -> Self {
        let axes = axes.as_slice();
        let cursor = if axes.iter().any(|axis| axis.candidates.is_empty()) {
            None
        } else {
            Some(vec![0; axes.len()])
        };
        Self { axes, cursor }
    }
}

impl Iterator for Combinations<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        let cursor = self.cursor.as_mut()?;

        let choices = self
            .axes
            .iter()
            .zip(cursor.iter())
            .map(|(axis, &index)| (axis.path.clone(), axis.candidates[index].clone()))
            .collect();

        // Odometer step; wrapping every position means the product is done.
        let mut exhausted = true;
        for position in (0..cursor.len()).rev() {
            cursor[position] += 1;
            if cursor[position] < self.axes[position].candidates.len() {
                exhausted = false;
                break;
            }
            cursor[position] = 0;
        }
        if exhausted {
            self.cursor = None;
        }

        Some(Combination { choices })
    }
}

/// Collect every combination of `axes`.
pub fn expand(axes: &FlatAxes) -> Vec<Combination> {
    axes.combinations().collect()
}
