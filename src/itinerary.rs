//! Draft itinerary generation based on the daily budget tier
//!
//! The per-person-per-day figure selects one of three fixed activity lists.
//! Each trip day gets two distinct activities sampled from that list, so
//! repeated runs produce varied but structurally identical itineraries. The
//! random source is passed in explicitly to keep generation testable.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::ItineraryDay;

/// Candidate activities for daily budgets under 50
const LOW_TIER_ACTIVITIES: [&str; 5] = [
    "Self-guided city walk",
    "Local street food tour",
    "Public park & viewpoint",
    "Free museum/gallery day",
    "Beach sunset & night market",
];

/// Candidate activities for daily budgets from 50 up to 120
const MID_TIER_ACTIVITIES: [&str; 5] = [
    "Guided city tour",
    "Cultural show or cooking class",
    "Day-pass for metro/transport",
    "Boat ride / short cruise",
    "Museum + specialty café",
];

/// Candidate activities for daily budgets of 120 and above
const HIGH_TIER_ACTIVITIES: [&str; 5] = [
    "Theme park or adventure activity",
    "Full-day guided excursion",
    "Scenic railway or hot air balloon (location permitting)",
    "Private food tasting tour",
    "Fine dining experience",
];

/// Budget-per-day bracket selecting which activity list to sample from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    Mid,
    High,
}

impl BudgetTier {
    /// Classify a budget-per-day figure into its tier
    #[must_use]
    pub fn classify(budget_per_day: f64) -> Self {
        match budget_per_day {
            b if b < 50.0 => BudgetTier::Low,
            b if b < 120.0 => BudgetTier::Mid,
            _ => BudgetTier::High,
        }
    }

    /// The fixed candidate activity list for this tier
    #[must_use]
    pub fn activities(&self) -> &'static [&'static str] {
        match self {
            BudgetTier::Low => &LOW_TIER_ACTIVITIES,
            BudgetTier::Mid => &MID_TIER_ACTIVITIES,
            BudgetTier::High => &HIGH_TIER_ACTIVITIES,
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetTier::Low => write!(f, "low"),
            BudgetTier::Mid => write!(f, "mid"),
            BudgetTier::High => write!(f, "high"),
        }
    }
}

/// Generate a draft itinerary with one record per day from 1 to `days`.
///
/// Each day picks two distinct activities from the tier list for
/// `budget_per_day`, assigns the first to the morning and the second to the
/// afternoon/evening slot, and attaches a destination note. Output depends on
/// the passed RNG; seed it for reproducible results.
pub fn generate_itinerary<R: Rng + ?Sized>(
    days: u32,
    destination: &str,
    budget_per_day: f64,
    rng: &mut R,
) -> Vec<ItineraryDay> {
    let tier = BudgetTier::classify(budget_per_day);
    let ideas = tier.activities();

    (1..=days)
        .map(|day| {
            let (morning, afternoon_evening) = pick_two_distinct(ideas, rng);
            ItineraryDay {
                day,
                morning: morning.to_string(),
                afternoon_evening: afternoon_evening.to_string(),
                notes: format!("Adjust based on {destination} opening times."),
            }
        })
        .collect()
}

/// Sample two distinct entries uniformly without replacement.
///
/// Every list this is called with has five entries; the assertion guards
/// future list edits against breaking the two-distinct-picks contract.
fn pick_two_distinct<'a, R: Rng + ?Sized>(
    ideas: &'a [&'a str],
    rng: &mut R,
) -> (&'a str, &'a str) {
    debug_assert!(ideas.len() >= 2, "activity list needs at least two entries");

    let first = rng.random_range(0..ideas.len());
    let mut second = rng.random_range(0..ideas.len() - 1);
    if second >= first {
        second += 1;
    }
    (ideas[first], ideas[second])
}
