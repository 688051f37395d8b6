//! `TripBudget` - travel budget allocation and draft itinerary planning
//!
//! This library provides the core functionality for normalizing category
//! weights, splitting a trip budget into allocations and per-day amounts,
//! and generating randomized draft itineraries.

pub mod allocation;
pub mod api;
pub mod config;
pub mod error;
pub mod itinerary;
pub mod models;
pub mod planner;
pub mod report;
pub mod web;

// Re-export core types for public API
pub use allocation::{build_allocation, normalize_weights, per_day_breakdown};
pub use config::TripBudgetConfig;
pub use error::TripBudgetError;
pub use itinerary::{BudgetTier, generate_itinerary};
pub use models::{
    AllocationPercent, AllocationRow, BudgetMode, Category, Currency, ItineraryDay, TravelPlan,
    TripParameters, WeightSet,
};
pub use planner::TripPlanner;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripBudgetError>;
