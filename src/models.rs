//! Core data models for trip parameters, budget allocation and itineraries
//!
//! This module contains the value objects shared by the planner, the CLI and
//! the API: category and currency enums, validated trip parameters and the
//! assembled travel plan. All of them are plain immutable data.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Days, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::TripBudgetError;

/// Smallest accepted trip length in days
pub const MIN_TRIP_DAYS: u32 = 1;
/// Largest accepted trip length in days
pub const MAX_TRIP_DAYS: u32 = 60;

/// Smallest accepted traveler count
pub const MIN_TRAVELERS: u32 = 1;
/// Largest accepted traveler count
pub const MAX_TRAVELERS: u32 = 20;

/// The five fixed budget categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Accommodation,
    Food,
    Transport,
    Activities,
    Shopping,
}

impl Category {
    /// All categories in canonical display order
    pub const ALL: [Category; 5] = [
        Category::Accommodation,
        Category::Food,
        Category::Transport,
        Category::Activities,
        Category::Shopping,
    ];

    /// Human-readable category label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Category::Accommodation => "Accommodation",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Activities => "Activities",
            Category::Shopping => "Shopping",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Category weights as entered by the user, before normalization
pub type WeightSet = BTreeMap<Category, f64>;

/// Normalized category shares summing to 100
pub type AllocationPercent = BTreeMap<Category, f64>;

/// Supported display currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum Currency {
    LKR,
    USD,
    EUR,
    INR,
}

impl Currency {
    /// Currency code used as the display prefix
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::LKR => "LKR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::INR => "INR",
        }
    }

    /// Format an amount as `"<CODE> <thousands-separated, 2 decimals>"`
    #[must_use]
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{} {}", self.code(), thousands_2dp(amount))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Format a number with comma thousands separators and two decimals
fn thousands_2dp(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some(parts) => parts,
        None => (formatted.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if amount < 0.0 {
        format!("-{grouped}.{frac_part}")
    } else {
        format!("{grouped}.{frac_part}")
    }
}

/// Whether the entered budget covers the whole group or a single traveler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetMode {
    #[default]
    Total,
    PerPerson,
}

impl BudgetMode {
    /// Resolve the entered budget figure to a group total
    #[must_use]
    pub fn resolve_total(&self, entered: f64, travelers: u32) -> f64 {
        match self {
            BudgetMode::Total => entered,
            BudgetMode::PerPerson => entered * f64::from(travelers),
        }
    }
}

impl fmt::Display for BudgetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetMode::Total => write!(f, "Total (group)"),
            BudgetMode::PerPerson => write!(f, "Per person"),
        }
    }
}

/// Validated input parameters for one trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripParameters {
    /// Destination label, used in itinerary notes and the plan summary
    pub destination: String,
    /// First day of the trip
    pub start: NaiveDate,
    /// Trip length in days (1-60)
    pub days: u32,
    /// Number of travelers sharing the budget (1-20)
    pub travelers: u32,
    /// Display currency for all amounts
    pub currency: Currency,
    /// Total budget for the whole group
    pub total_budget: f64,
}

impl TripParameters {
    /// Check all parameter ranges, returning the first violation
    pub fn validate(&self) -> Result<(), TripBudgetError> {
        if self.destination.trim().is_empty() {
            return Err(TripBudgetError::validation("destination must not be empty"));
        }
        if !(MIN_TRIP_DAYS..=MAX_TRIP_DAYS).contains(&self.days) {
            return Err(TripBudgetError::validation(format!(
                "day count must be between {MIN_TRIP_DAYS} and {MAX_TRIP_DAYS}, got {}",
                self.days
            )));
        }
        if !(MIN_TRAVELERS..=MAX_TRAVELERS).contains(&self.travelers) {
            return Err(TripBudgetError::validation(format!(
                "traveler count must be between {MIN_TRAVELERS} and {MAX_TRAVELERS}, got {}",
                self.travelers
            )));
        }
        if !self.total_budget.is_finite() || self.total_budget < 0.0 {
            return Err(TripBudgetError::validation(format!(
                "total budget must be a non-negative number, got {}",
                self.total_budget
            )));
        }
        Ok(())
    }

    /// Last day of the trip (`start` for a one-day trip)
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(u64::from(self.days.saturating_sub(1))))
            .unwrap_or(self.start)
    }

    /// Budget per person per day, the figure that drives itinerary tiering
    #[must_use]
    pub fn per_person_per_day(&self) -> f64 {
        (self.total_budget / f64::from(self.travelers.max(1))) / f64::from(self.days.max(1))
    }
}

/// One display row of the budget allocation table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRow {
    /// Budget category
    pub category: Category,
    /// Share of the total budget, rounded to one decimal
    pub share_percent: f64,
    /// Allocated amount at full precision
    pub amount: f64,
    /// Formatted amount, e.g. `"LKR 60,000.00"`
    pub amount_display: String,
}

/// One generated itinerary day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based day index
    pub day: u32,
    /// Morning activity label
    pub morning: String,
    /// Afternoon or evening activity label, distinct from the morning one
    pub afternoon_evening: String,
    /// Destination-specific reminder note
    pub notes: String,
}

/// Complete computed plan for one trip, ready for rendering and export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPlan {
    /// Destination label
    pub destination: String,
    /// First day of the trip
    pub start: NaiveDate,
    /// Trip length in days
    pub days: u32,
    /// Number of travelers
    pub travelers: u32,
    /// Display currency
    pub currency: Currency,
    /// Total group budget
    pub total_budget: f64,
    /// Budget per person per day
    pub per_person_per_day: f64,
    /// Normalized share per category
    pub allocation_percent: AllocationPercent,
    /// Allocation table rows, descending by share
    pub allocation: Vec<AllocationRow>,
    /// Per-day amount per category
    pub per_day: BTreeMap<Category, f64>,
    /// Draft itinerary, one record per trip day
    pub itinerary: Vec<ItineraryDay>,
    /// When this plan was generated
    pub generated_at: DateTime<Utc>,
}

impl TravelPlan {
    /// Last day of the trip
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(u64::from(self.days.saturating_sub(1))))
            .unwrap_or(self.start)
    }
}
