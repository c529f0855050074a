//! hlrn-sweep: Sweep Configuration Expansion
//!
//! Expands one configuration document whose marked keys hold candidate lists into
//! one concrete configuration file per combination of candidates, ready to be
//! packaged as cluster jobs.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod sweep;

pub use error::{StructureError, SweepError};
pub use sweep::{generate_sweep, SweepGenerator, SweepOutcome};
