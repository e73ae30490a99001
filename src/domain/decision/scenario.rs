//! Scenario - a complete decision problem ready for scoring.

use super::{Criterion, OptionEvaluation};
use crate::domain::foundation::ValidationError;

/// Criteria plus the evaluations to be scored against them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scenario {
    criteria: Vec<Criterion>,
    options: Vec<OptionEvaluation>,
}

impl Scenario {
    pub fn new(criteria: Vec<Criterion>, options: Vec<OptionEvaluation>) -> Self {
        Self { criteria, options }
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn options(&self) -> &[OptionEvaluation] {
        &self.options
    }

    /// Validates every criterion weight, then every outcome ordering.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.criteria.iter().try_for_each(Criterion::validate)?;
        self.options.iter().try_for_each(OptionEvaluation::validate)
    }
}
