//! Configuration management for the `TripBudget` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TripBudgetError;
use crate::models::{
    BudgetMode, Category, Currency, MAX_TRAVELERS, MAX_TRIP_DAYS, MIN_TRAVELERS, MIN_TRIP_DAYS,
    WeightSet,
};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TripBudget` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripBudgetConfig {
    /// Trip form defaults
    #[serde(default)]
    pub defaults: TripDefaultsConfig,
    /// Default category weights
    #[serde(default)]
    pub weights: WeightsConfig,
    /// API server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default values for the trip form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripDefaultsConfig {
    /// Destination label
    #[serde(default = "default_destination")]
    pub destination: String,
    /// Trip length in days
    #[serde(default = "default_days")]
    pub days: u32,
    /// Number of travelers
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    /// Display currency
    #[serde(default = "default_currency")]
    pub currency: Currency,
    /// Budget amount as entered
    #[serde(default = "default_budget")]
    pub budget: f64,
    /// How the budget amount is interpreted
    #[serde(default)]
    pub budget_mode: BudgetMode,
}

/// Default category weights (0-100 each, normalized at plan time)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_weight_accommodation")]
    pub accommodation: u32,
    #[serde(default = "default_weight_food")]
    pub food: u32,
    #[serde(default = "default_weight_transport")]
    pub transport: u32,
    #[serde(default = "default_weight_activities")]
    pub activities: u32,
    #[serde(default = "default_weight_shopping")]
    pub shopping: u32,
}

impl WeightsConfig {
    /// Convert to the weight map consumed by the planner
    #[must_use]
    pub fn to_weight_set(&self) -> WeightSet {
        WeightSet::from([
            (Category::Accommodation, f64::from(self.accommodation)),
            (Category::Food, f64::from(self.food)),
            (Category::Transport, f64::from(self.transport)),
            (Category::Activities, f64::from(self.activities)),
            (Category::Shopping, f64::from(self.shopping)),
        ])
    }
}

/// API server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the API server listens on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_destination() -> String {
    "Kandy".to_string()
}

fn default_days() -> u32 {
    5
}

fn default_travelers() -> u32 {
    2
}

fn default_currency() -> Currency {
    Currency::LKR
}

fn default_budget() -> f64 {
    150_000.0
}

fn default_weight_accommodation() -> u32 {
    40
}

fn default_weight_food() -> u32 {
    25
}

fn default_weight_transport() -> u32 {
    15
}

fn default_weight_activities() -> u32 {
    15
}

fn default_weight_shopping() -> u32 {
    5
}

fn default_server_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TripDefaultsConfig {
    fn default() -> Self {
        Self {
            destination: default_destination(),
            days: default_days(),
            travelers: default_travelers(),
            currency: default_currency(),
            budget: default_budget(),
            budget_mode: BudgetMode::default(),
        }
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            accommodation: default_weight_accommodation(),
            food: default_weight_food(),
            transport: default_weight_transport(),
            activities: default_weight_activities(),
            shopping: default_weight_shopping(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for TripBudgetConfig {
    fn default() -> Self {
        Self {
            defaults: TripDefaultsConfig::default(),
            weights: WeightsConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TripBudgetConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with TRIPBUDGET_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TRIPBUDGET")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TripBudgetConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripbudget").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.defaults.destination.trim().is_empty() {
            self.defaults.destination = default_destination();
        }
        if self.defaults.days == 0 {
            self.defaults.days = default_days();
        }
        if self.defaults.travelers == 0 {
            self.defaults.travelers = default_travelers();
        }
        if self.server.port == 0 {
            self.server.port = default_server_port();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_trip_defaults()?;
        self.validate_weights()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the trip form defaults
    fn validate_trip_defaults(&self) -> Result<()> {
        if !(MIN_TRIP_DAYS..=MAX_TRIP_DAYS).contains(&self.defaults.days) {
            return Err(TripBudgetError::config(format!(
                "Default day count must be between {MIN_TRIP_DAYS} and {MAX_TRIP_DAYS}"
            ))
            .into());
        }

        if !(MIN_TRAVELERS..=MAX_TRAVELERS).contains(&self.defaults.travelers) {
            return Err(TripBudgetError::config(format!(
                "Default traveler count must be between {MIN_TRAVELERS} and {MAX_TRAVELERS}"
            ))
            .into());
        }

        if !self.defaults.budget.is_finite() || self.defaults.budget < 0.0 {
            return Err(
                TripBudgetError::config("Default budget must be a non-negative number").into(),
            );
        }

        Ok(())
    }

    /// Validate the default category weights
    fn validate_weights(&self) -> Result<()> {
        let weights = [
            ("accommodation", self.weights.accommodation),
            ("food", self.weights.food),
            ("transport", self.weights.transport),
            ("activities", self.weights.activities),
            ("shopping", self.weights.shopping),
        ];

        for (name, weight) in weights {
            if weight > 100 {
                return Err(TripBudgetError::config(format!(
                    "Default weight for {name} cannot exceed 100"
                ))
                .into());
            }
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripBudgetError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_config() {
        let config = TripBudgetConfig::default();
        assert_eq!(config.defaults.destination, "Kandy");
        assert_eq!(config.defaults.days, 5);
        assert_eq!(config.defaults.travelers, 2);
        assert_eq!(config.defaults.currency, Currency::LKR);
        assert_eq!(config.defaults.budget_mode, BudgetMode::Total);
        assert_eq!(config.weights.accommodation, 40);
        assert_eq!(config.weights.shopping, 5);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_default_weights_match_the_form() {
        let weights = TripBudgetConfig::default().weights.to_weight_set();
        let total: f64 = weights.values().sum();
        assert!((total - 100.0).abs() < f64::EPSILON);
        assert!((weights[&Category::Accommodation] - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_config_validation_day_range() {
        let mut config = TripBudgetConfig::default();
        config.defaults.days = 61;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("day count"));
    }

    #[test]
    fn test_config_validation_weight_range() {
        let mut config = TripBudgetConfig::default();
        config.weights.food = 101;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("food"));
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TripBudgetConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_negative_budget() {
        let mut config = TripBudgetConfig::default();
        config.defaults.budget = -100.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_empty_values() {
        let mut config = TripBudgetConfig::default();
        config.defaults.destination = "  ".to_string();
        config.defaults.days = 0;
        config.logging.level = String::new();

        config.apply_defaults();
        assert_eq!(config.defaults.destination, "Kandy");
        assert_eq!(config.defaults.days, 5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_environment_variable_override() {
        // SAFETY: Test environment, setting test values only
        unsafe {
            env::set_var("TRIPBUDGET_DEFAULTS_DAYS", "9");
        }

        let config =
            TripBudgetConfig::load_from_path(Some(PathBuf::from("/nonexistent/config.toml")))
                .unwrap();

        // SAFETY: Test cleanup
        unsafe {
            env::remove_var("TRIPBUDGET_DEFAULTS_DAYS");
        }

        assert_eq!(config.defaults.days, 9);
        // untouched sections keep their defaults
        assert_eq!(config.defaults.travelers, 2);
        assert_eq!(config.weights.accommodation, 40);
    }

    #[test]
    fn test_missing_config_file_falls_back_to_defaults() {
        let config =
            TripBudgetConfig::load_from_path(Some(PathBuf::from("/nonexistent/config.toml")))
                .unwrap();
        assert_eq!(config.defaults.destination, "Kandy");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_config_path_generation() {
        let path = TripBudgetConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("tripbudget"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
