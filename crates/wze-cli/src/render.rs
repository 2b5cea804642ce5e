// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Human-readable output for scene runs.

use crate::scene::Outcome;
use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::Table;

/// Renders final actor positions as a table followed by a one-line summary.
pub fn outcome_table(outcome: &Outcome) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_MARKDOWN)
        .set_header(vec!["actor", "layer", "x", "y"]);
    for actor in &outcome.actors {
        table.add_row(vec![
            actor.name.clone(),
            actor.layer.to_string(),
            format!("{:.3}", actor.position[0]),
            format!("{:.3}", actor.position[1]),
        ]);
    }

    let totals = &outcome.totals;
    format!(
        "{table}\n{} ticks, {} passes, {} corrections, {} branch pushes, max depth {} (epsilon {})",
        outcome.ticks,
        totals.passes,
        totals.corrections,
        totals.branch_pushes,
        totals.max_depth,
        outcome.epsilon
    )
}
