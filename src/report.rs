//! Plan document rendering and file export
//!
//! Renders a [`TravelPlan`] into the printable plan document (trip summary,
//! bordered allocation table, itinerary lines) and writes the JSON and report
//! files. The table builders are shared with the CLI output.

use std::fs;
use std::path::Path;

use comfy_table::{Cell, ContentArrangement, Table, presets};

use crate::Result;
use crate::error::TripBudgetError;
use crate::models::TravelPlan;

/// Static cost-saving tips shown beneath the itinerary
pub const COST_SAVING_TIPS: [&str; 4] = [
    "Book intercity transport in advance to lock lower fares.",
    "Use day passes for public transport instead of taxis.",
    "Bundle attractions (city pass) if you plan 3+ paid entries.",
    "Eat one local street-food meal per day to cut costs ~20–30%.",
];

/// Build the bordered allocation table (Category | Share % | Amount)
#[must_use]
pub fn allocation_table(plan: &TravelPlan) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Category"),
            Cell::new("Share %"),
            Cell::new("Amount"),
        ]);

    for row in &plan.allocation {
        table.add_row(vec![
            Cell::new(row.category.label()),
            Cell::new(format!("{:.1}", row.share_percent)),
            Cell::new(&row.amount_display),
        ]);
    }
    table
}

/// Build the per-day breakdown table (Category | Per day)
#[must_use]
pub fn per_day_table(plan: &TravelPlan) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("Category"), Cell::new("Per day")]);

    for (category, amount) in &plan.per_day {
        table.add_row(vec![
            Cell::new(category.label()),
            Cell::new(plan.currency.format_amount(*amount)),
        ]);
    }
    table
}

/// Render the printable plan document.
///
/// Content mirrors the downloadable plan: a title, the trip summary lines,
/// the allocation table and the draft itinerary. Layout beyond that is
/// presentational.
#[must_use]
pub fn render_report(plan: &TravelPlan) -> String {
    let mut out = String::new();

    out.push_str("Travel Budget Plan\n");
    out.push_str("==================\n\n");

    out.push_str(&format!("Destination: {}\n", plan.destination));
    out.push_str(&format!("Dates: {} → {}\n", plan.start, plan.end_date()));
    out.push_str(&format!("Days: {}\n", plan.days));
    out.push_str(&format!("Travelers: {}\n", plan.travelers));
    out.push_str(&format!(
        "Total Budget: {}\n",
        plan.currency.format_amount(plan.total_budget)
    ));
    out.push_str(&format!(
        "Budget / person / day: {}\n",
        plan.currency.format_amount(plan.per_person_per_day)
    ));

    out.push_str("\nBudget Allocation\n");
    out.push_str(&allocation_table(plan).to_string());
    out.push('\n');

    out.push_str("\nItinerary (Draft)\n");
    for day in &plan.itinerary {
        out.push_str(&format!(
            "Day {}: {} | {} | {}\n",
            day.day, day.morning, day.afternoon_evening, day.notes
        ));
    }

    out
}

/// Serialize the full plan as pretty JSON
pub fn to_json_pretty(plan: &TravelPlan) -> Result<String> {
    serde_json::to_string_pretty(plan)
        .map_err(|e| TripBudgetError::export(format!("could not serialize plan: {e}")))
}

/// Write the plan as a JSON file
pub fn write_json(plan: &TravelPlan, path: &Path) -> Result<()> {
    let json = to_json_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write the rendered plan document to a file
pub fn write_report(plan: &TravelPlan, path: &Path) -> Result<()> {
    fs::write(path, render_report(plan))?;
    Ok(())
}
