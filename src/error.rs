//! Error types and handling for the `TripBudget` application

use thiserror::Error;

/// Main error type for the `TripBudget` application
#[derive(Error, Debug)]
pub enum TripBudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Plan export errors (JSON or report document)
    #[error("Export error: {message}")]
    Export { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TripBudgetError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new export error
    pub fn export<S: Into<String>>(message: S) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripBudgetError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TripBudgetError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripBudgetError::Export { message } => {
                format!("Plan export failed ({message}). The rest of the plan is unaffected.")
            }
            TripBudgetError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TripBudgetError::General { message } => message.clone(),
        }
    }
}
