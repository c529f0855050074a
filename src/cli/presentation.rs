//! Presentation: plan and generation result formatters (text and JSON).

use crate::error::SweepError;
use crate::sweep::{SweepOutcome, SweepPlan};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde_json::json;

pub fn format_plan_text(plan: &SweepPlan) -> String {
    if plan.axes.is_empty() {
        return format!(
            "No sweep axes found.\n  Configs to generate: {}",
            plan.outputs
        );
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Axis", "Key", "Count", "Candidates"]);
    for axis in &plan.axes {
        let candidates: Vec<String> = axis.candidates.iter().map(render_candidate).collect();
        table.add_row(vec![
            axis.path.clone(),
            axis.marker_key.clone(),
            axis.candidates.len().to_string(),
            candidates.join(", "),
        ]);
    }

    format!(
        "Sweep axes ({}):\n{}\n  Configs to generate: {}",
        plan.axes.len(),
        table,
        plan.outputs
    )
}

pub fn format_plan_json(plan: &SweepPlan) -> Result<String, SweepError> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// One path per line. Resumed sweeps are flagged by the warning log, not here,
/// so the output can be piped straight into job submission.
pub fn format_outcome_text(outcome: &SweepOutcome) -> String {
    outcome
        .files()
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_outcome_json(outcome: &SweepOutcome) -> Result<String, SweepError> {
    let files: Vec<String> = outcome
        .files()
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    let out = json!({ "status": outcome.status(), "files": files });
    Ok(serde_json::to_string_pretty(&out)?)
}

/// Compact single-line rendering of a candidate value.
fn render_candidate(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| "?".to_string()),
    }
}
