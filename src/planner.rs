//! Trip Plan Assembly Module
//!
//! This module combines the allocation math and the itinerary generator into
//! a single service that turns validated trip inputs into a complete
//! [`TravelPlan`] ready for rendering and export.

use chrono::Utc;
use rand::Rng;
use tracing::{debug, info};

use crate::Result;
use crate::allocation::{build_allocation, normalize_weights, per_day_breakdown};
use crate::error::TripBudgetError;
use crate::itinerary::{BudgetTier, generate_itinerary};
use crate::models::{TravelPlan, TripParameters, WeightSet};

/// Trip planning service
pub struct TripPlanner;

impl TripPlanner {
    /// Assemble a complete travel plan
    ///
    /// Validates the parameters and weights, derives the allocation and the
    /// per-day breakdown, and generates a draft itinerary driven by the
    /// budget-per-person-per-day figure.
    pub fn build_plan<R: Rng + ?Sized>(
        params: &TripParameters,
        weights: &WeightSet,
        rng: &mut R,
    ) -> Result<TravelPlan> {
        params.validate()?;
        Self::validate_weights(weights)?;

        info!(
            "Planning {}-day trip to {} for {} travelers",
            params.days, params.destination, params.travelers
        );

        let percent = normalize_weights(weights);
        let allocation = build_allocation(&percent, params.total_budget, params.currency);
        let per_day = per_day_breakdown(&percent, params.total_budget, i64::from(params.days));

        let per_person_per_day = params.per_person_per_day();
        debug!(
            "Budget per person per day: {:.2} ({} tier)",
            per_person_per_day,
            BudgetTier::classify(per_person_per_day)
        );

        let itinerary =
            generate_itinerary(params.days, &params.destination, per_person_per_day, rng);

        Ok(TravelPlan {
            destination: params.destination.clone(),
            start: params.start,
            days: params.days,
            travelers: params.travelers,
            currency: params.currency,
            total_budget: params.total_budget,
            per_person_per_day,
            allocation_percent: percent,
            allocation,
            per_day,
            itinerary,
            generated_at: Utc::now(),
        })
    }

    /// Check that weights form a usable set
    ///
    /// An all-zero set is fine (it falls back to equal shares); negative or
    /// non-finite entries and an empty set are rejected.
    fn validate_weights(weights: &WeightSet) -> Result<()> {
        if weights.is_empty() {
            return Err(TripBudgetError::validation(
                "at least one category weight is required",
            ));
        }
        for (category, weight) in weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(TripBudgetError::validation(format!(
                    "weight for {category} must be a non-negative number, got {weight}"
                )));
            }
        }
        Ok(())
    }
}
