//! Criterion value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A weighted dimension of comparison.
///
/// Weights across a criteria set are not required to sum to 1 and are never
/// rescaled by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    name: String,
    weight: f64,
    /// True if higher raw values are better. False for cost-like criteria.
    #[serde(default = "default_maximize")]
    maximize: bool,
}

fn default_maximize() -> bool {
    true
}

impl Criterion {
    /// Creates a criterion without validating its weight.
    pub fn new(name: impl Into<String>, weight: f64, maximize: bool) -> Self {
        Self {
            name: name.into(),
            weight,
            maximize,
        }
    }

    /// Creates a criterion where higher values are better.
    pub fn maximizing(name: impl Into<String>, weight: f64) -> Self {
        Self::new(name, weight, true)
    }

    /// Creates a criterion where lower values are better (cost, risk).
    pub fn minimizing(name: impl Into<String>, weight: f64) -> Self {
        Self::new(name, weight, false)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn maximize(&self) -> bool {
        self.maximize
    }

    /// Checks that the weight lies in `[0.0, 1.0]`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if (0.0..=1.0).contains(&self.weight) {
            Ok(())
        } else {
            Err(ValidationError::invalid_criterion_weight(
                self.name.clone(),
                self.weight,
            ))
        }
    }
}
