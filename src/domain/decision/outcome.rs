//! Outcome value object - three-point uncertainty estimate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Best / expected / worst estimate for one option on one criterion.
///
/// The ordering invariant `best >= expected >= worst` is not enforced by
/// [`Outcome::new`]; call [`Outcome::validate`] to check it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    best: f64,
    expected: f64,
    worst: f64,
}

impl Outcome {
    /// Creates an outcome without validating its ordering.
    pub fn new(best: f64, expected: f64, worst: f64) -> Self {
        Self {
            best,
            expected,
            worst,
        }
    }

    pub fn best(&self) -> f64 {
        self.best
    }

    pub fn expected(&self) -> f64 {
        self.expected
    }

    pub fn worst(&self) -> f64 {
        self.worst
    }

    /// Width of the uncertainty band (`best - worst`).
    ///
    /// Non-negative for any outcome that passes validation.
    pub fn spread(&self) -> f64 {
        self.best - self.worst
    }

    /// Checks `best >= expected >= worst`.
    ///
    /// NaN in any position fails the check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.best >= self.expected && self.expected >= self.worst {
            Ok(())
        } else {
            Err(ValidationError::invalid_outcome_ordering(
                self.best,
                self.expected,
                self.worst,
            ))
        }
    }
}
