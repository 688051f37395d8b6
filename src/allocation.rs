//! Budget allocation math: weight normalization, allocation rows and the
//! per-day breakdown
//!
//! Everything in this module is a pure function over the category maps in
//! [`crate::models`]. No I/O, no randomness, no shared state.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{AllocationPercent, AllocationRow, Category, Currency, WeightSet};

/// Normalize raw category weights to percentages summing to 100.
///
/// A zero weight total falls back to equal shares across all categories.
/// That is the defined policy for "all sliders at zero", not an error, so
/// this function is total over non-negative inputs.
#[must_use]
pub fn normalize_weights(weights: &WeightSet) -> AllocationPercent {
    let total: f64 = weights.values().sum();
    if total == 0.0 {
        let share = 100.0 / weights.len() as f64;
        return weights.keys().map(|&category| (category, share)).collect();
    }

    weights
        .iter()
        .map(|(&category, &weight)| (category, weight / total * 100.0))
        .collect()
}

/// Build display-ready allocation rows, ordered descending by share.
///
/// Amounts are computed from the unrounded share; only the displayed
/// `share_percent` is rounded to one decimal. Ties keep the canonical
/// category order since the sort is stable.
#[must_use]
pub fn build_allocation(
    percent: &AllocationPercent,
    total_budget: f64,
    currency: Currency,
) -> Vec<AllocationRow> {
    let mut rows: Vec<AllocationRow> = percent
        .iter()
        .map(|(&category, &pct)| {
            let amount = total_budget * (pct / 100.0);
            AllocationRow {
                category,
                share_percent: (pct * 10.0).round() / 10.0,
                amount,
                amount_display: currency.format_amount(amount),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.share_percent
            .partial_cmp(&a.share_percent)
            .unwrap_or(Ordering::Equal)
    });
    rows
}

/// Split the total budget into per-day amounts per category.
///
/// Day counts of zero or below are clamped to 1 so the division is always
/// defined. The clamp is the documented edge-case policy, not an error.
#[must_use]
pub fn per_day_breakdown(
    percent: &AllocationPercent,
    total_budget: f64,
    days: i64,
) -> BTreeMap<Category, f64> {
    let divisor = days.max(1) as f64;
    percent
        .iter()
        .map(|(&category, &pct)| (category, total_budget * (pct / 100.0) / divisor))
        .collect()
}
