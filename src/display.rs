use crate::policy::{PolicyFilterMap, PolicyFilterSet};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};
use std::fmt::Write as _;

fn create_descriptor_table(policy: &PolicyFilterSet) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![
            "#", "Flag", "Event", "Category", "Field", "Op", "Values", "Filter",
        ]);

    for (idx, d) in policy.descriptors.iter().enumerate() {
        let category = d
            .option_category
            .as_ref()
            .map(|c| c.as_str())
            .unwrap_or("");
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&d.full),
            Cell::new(&d.event_name),
            Cell::new(category),
            Cell::new(&d.option_field),
            Cell::new(d.operator.as_str()),
            Cell::new(&d.values),
            Cell::new(&d.residual_filter),
        ]);
    }

    table
}

fn policy_title(policy: &PolicyFilterSet) -> String {
    if policy.name.is_empty() {
        format!("POLICY {}", policy.id)
    } else {
        format!("POLICY {} ({})", policy.id, policy.name)
    }
}

/// Format a policy map as text, one table per policy.
pub fn format_policy_map_text(map: &PolicyFilterMap) -> String {
    let mut out = String::new();

    for policy in map.iter() {
        let _ = writeln!(out, "{}", policy_title(policy).bold().bright_white());
        let _ = writeln!(
            out,
            "Selected: {}  Excluded: {}",
            policy.selected().count().to_string().green().bold(),
            policy.excluded().count().to_string().red().bold()
        );

        if policy.descriptors.is_empty() {
            let _ = writeln!(out, "{}", "No event flags given".yellow());
        } else {
            let _ = writeln!(out, "{}", create_descriptor_table(policy));
        }
    }

    out
}

/// Format a policy map as pretty printed JSON keyed by policy id.
pub fn format_policy_map_json(map: &PolicyFilterMap) -> serde_json::Result<String> {
    serde_json::to_string_pretty(map)
}

pub fn display_policy_map(map: &PolicyFilterMap) {
    print!("{}", format_policy_map_text(map));
}
