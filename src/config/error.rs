//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Unknown default strategy: {0}")]
    UnknownStrategy(String),

    #[error("Default risk weight must be a finite number")]
    InvalidRiskWeight,

    #[error("At least one sweep weight is required")]
    EmptySweep,

    #[error("Sweep weights must be finite numbers")]
    InvalidSweepWeight,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
