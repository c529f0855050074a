//! Sweep expansion.
//!
//! Turns one configuration whose marked keys hold candidate lists into one
//! concrete configuration per combination of candidates:
//!
//! 1. [`SweepDocument::parse`] tags marked keys as axes.
//! 2. [`discover_axes`] prunes the document down to the axes.
//! 3. [`AxisTree::flatten`] lists the axes with their dotted paths.
//! 4. [`FlatAxes::combinations`] walks the Cartesian product.
//! 5. [`materialize`] rebuilds the document for one combination.
//!
//! [`SweepGenerator`] runs the pipeline and writes the results to disk.

mod axes;
mod expand;
mod generate;
mod marker;
mod materialize;
mod plan;
mod settings;
mod tree;

pub use axes::{discover_axes, AxisNode, AxisPath, AxisTree, FlatAxes, FlatAxis};
pub use expand::{expand, Combination, Combinations};
pub use generate::{generate_sweep, SweepGenerator, SweepOutcome};
pub use marker::{SweepMarker, DEFAULT_MARKER};
pub use materialize::materialize;
pub use plan::{PlannedAxis, SweepPlan};
pub use settings::{EmptySweepPolicy, SweepSettings};
pub use tree::{Axis, Entry, Node, SweepDocument};
