//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised by explicit value object validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error(
        "Outcome values must satisfy best >= expected >= worst, \
         got best={best}, expected={expected}, worst={worst}"
    )]
    InvalidOutcomeOrdering { best: f64, expected: f64, worst: f64 },

    #[error("Criterion '{criterion}' weight must be between 0 and 1, got {weight}")]
    InvalidCriterionWeight { criterion: String, weight: f64 },
}

impl ValidationError {
    /// Creates an outcome ordering validation error.
    pub fn invalid_outcome_ordering(best: f64, expected: f64, worst: f64) -> Self {
        ValidationError::InvalidOutcomeOrdering {
            best,
            expected,
            worst,
        }
    }

    /// Creates a criterion weight validation error.
    pub fn invalid_criterion_weight(criterion: impl Into<String>, weight: f64) -> Self {
        ValidationError::InvalidCriterionWeight {
            criterion: criterion.into(),
            weight,
        }
    }
}

/// Error codes for every failure the engine can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    InvalidOutcomeOrdering,
    InvalidCriterionWeight,

    // Pre-flight errors
    MissingOutcome,
    DuplicateOption,

    // Lookup errors
    UnknownStrategy,

    // Scenario loading errors
    ScenarioIo,
    ScenarioFormat,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidOutcomeOrdering => "INVALID_OUTCOME_ORDERING",
            ErrorCode::InvalidCriterionWeight => "INVALID_CRITERION_WEIGHT",
            ErrorCode::MissingOutcome => "MISSING_OUTCOME",
            ErrorCode::DuplicateOption => "DUPLICATE_OPTION",
            ErrorCode::UnknownStrategy => "UNKNOWN_STRATEGY",
            ErrorCode::ScenarioIo => "SCENARIO_IO",
            ErrorCode::ScenarioFormat => "SCENARIO_FORMAT",
        };
        write!(f, "{}", s)
    }
}

/// Failures surfaced by scoring, orchestration and scenario loading.
///
/// Every variant is terminal for the call that produced it; no partial
/// result accompanies an error.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Option '{option}' is missing outcomes for: {}", .missing.join(", "))]
    MissingOutcome { option: String, missing: Vec<String> },

    #[error("Option '{0}' appears more than once")]
    DuplicateOption(String),

    #[error("Strategy '{0}' not found")]
    UnknownStrategy(String),

    #[error("Failed to read scenario '{path}': {source}")]
    ScenarioIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scenario document: {0}")]
    ScenarioFormat(String),
}

impl AnalysisError {
    /// Creates a missing outcome error for an option.
    pub fn missing_outcome(option: impl Into<String>, missing: Vec<String>) -> Self {
        AnalysisError::MissingOutcome {
            option: option.into(),
            missing,
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::Validation(ValidationError::InvalidOutcomeOrdering { .. }) => {
                ErrorCode::InvalidOutcomeOrdering
            }
            AnalysisError::Validation(ValidationError::InvalidCriterionWeight { .. }) => {
                ErrorCode::InvalidCriterionWeight
            }
            AnalysisError::MissingOutcome { .. } => ErrorCode::MissingOutcome,
            AnalysisError::DuplicateOption(_) => ErrorCode::DuplicateOption,
            AnalysisError::UnknownStrategy(_) => ErrorCode::UnknownStrategy,
            AnalysisError::ScenarioIo { .. } => ErrorCode::ScenarioIo,
            AnalysisError::ScenarioFormat(_) => ErrorCode::ScenarioFormat,
        }
    }
}
