use axum::{
    Router,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::TripBudgetConfig;
use crate::error::TripBudgetError;
use crate::models::{BudgetMode, Category, Currency, TravelPlan, TripParameters, WeightSet};
use crate::planner::TripPlanner;

/// Category weights as submitted by the form, one slider per category
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiWeights {
    pub accommodation: f64,
    pub food: f64,
    pub transport: f64,
    pub activities: f64,
    pub shopping: f64,
}

impl ApiWeights {
    fn to_weight_set(&self) -> WeightSet {
        WeightSet::from([
            (Category::Accommodation, self.accommodation),
            (Category::Food, self.food),
            (Category::Transport, self.transport),
            (Category::Activities, self.activities),
            (Category::Shopping, self.shopping),
        ])
    }
}

/// Plan request mirroring the trip form
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanRequest {
    pub destination: String,
    pub start: NaiveDate,
    pub days: u32,
    pub travelers: u32,
    pub currency: Currency,
    /// Budget amount as entered, interpreted per `budget_mode`
    pub budget: f64,
    #[serde(default)]
    pub budget_mode: BudgetMode,
    pub weights: ApiWeights,
    /// Optional fixed seed for a reproducible itinerary
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Configured form defaults for prefilling a client
#[derive(Debug, Serialize, Deserialize)]
pub struct DefaultsResponse {
    pub destination: String,
    pub days: u32,
    pub travelers: u32,
    pub currency: Currency,
    pub budget: f64,
    pub budget_mode: BudgetMode,
    pub weights: ApiWeights,
}

impl From<&TripBudgetConfig> for DefaultsResponse {
    fn from(config: &TripBudgetConfig) -> Self {
        Self {
            destination: config.defaults.destination.clone(),
            days: config.defaults.days,
            travelers: config.defaults.travelers,
            currency: config.defaults.currency,
            budget: config.defaults.budget,
            budget_mode: config.defaults.budget_mode,
            weights: ApiWeights {
                accommodation: f64::from(config.weights.accommodation),
                food: f64::from(config.weights.food),
                transport: f64::from(config.weights.transport),
                activities: f64::from(config.weights.activities),
                shopping: f64::from(config.weights.shopping),
            },
        }
    }
}

pub fn router() -> Router {
    Router::new()
        .route("/plan", post(create_plan))
        .route("/defaults", get(get_defaults))
}

async fn create_plan(Json(payload): Json<PlanRequest>) -> Result<Json<TravelPlan>, StatusCode> {
    let params = TripParameters {
        destination: payload.destination.clone(),
        start: payload.start,
        days: payload.days,
        travelers: payload.travelers,
        currency: payload.currency,
        total_budget: payload
            .budget_mode
            .resolve_total(payload.budget, payload.travelers),
    };
    let weights = payload.weights.to_weight_set();

    let plan = match payload.seed {
        Some(seed) => {
            let mut rng = SmallRng::seed_from_u64(seed);
            TripPlanner::build_plan(&params, &weights, &mut rng)
        }
        None => TripPlanner::build_plan(&params, &weights, &mut rand::rng()),
    }
    .map_err(|e| {
        warn!("Plan request rejected: {}", e);
        match e {
            TripBudgetError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    })?;

    Ok(Json(plan))
}

async fn get_defaults() -> Result<Json<DefaultsResponse>, StatusCode> {
    let config = TripBudgetConfig::load().map_err(|e| {
        warn!("Could not load configuration: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(DefaultsResponse::from(&config)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_request() -> PlanRequest {
        PlanRequest {
            destination: "Kandy".to_string(),
            start: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            days: 5,
            travelers: 2,
            currency: Currency::LKR,
            budget: 150_000.0,
            budget_mode: BudgetMode::Total,
            weights: ApiWeights {
                accommodation: 40.0,
                food: 25.0,
                transport: 15.0,
                activities: 15.0,
                shopping: 5.0,
            },
            seed: Some(42),
        }
    }

    #[tokio::test]
    async fn test_create_plan_returns_complete_plan() {
        let Json(plan) = create_plan(Json(create_test_request())).await.unwrap();

        assert_eq!(plan.destination, "Kandy");
        assert_eq!(plan.itinerary.len(), 5);
        assert_eq!(plan.allocation.len(), 5);
        assert!((plan.total_budget - 150_000.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_per_person_budget_is_multiplied_by_travelers() {
        let mut request = create_test_request();
        request.budget = 75_000.0;
        request.budget_mode = BudgetMode::PerPerson;

        let Json(plan) = create_plan(Json(request)).await.unwrap();
        assert!((plan.total_budget - 150_000.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_invalid_request_maps_to_unprocessable_entity() {
        let mut request = create_test_request();
        request.days = 0;

        let status = create_plan(Json(request)).await.unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_seeded_requests_are_reproducible() {
        let Json(first) = create_plan(Json(create_test_request())).await.unwrap();
        let Json(second) = create_plan(Json(create_test_request())).await.unwrap();
        assert_eq!(first.itinerary, second.itinerary);
    }

    #[tokio::test]
    async fn test_defaults_mirror_the_configuration() {
        let Json(defaults) = get_defaults().await.unwrap();

        assert_eq!(defaults.destination, "Kandy");
        assert_eq!(defaults.currency, Currency::LKR);
        let weight_sum = defaults.weights.accommodation
            + defaults.weights.food
            + defaults.weights.transport
            + defaults.weights.activities
            + defaults.weights.shopping;
        assert!((weight_sum - 100.0).abs() < f64::EPSILON);
    }
}
