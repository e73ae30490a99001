//! Expected-Value strategy - the default scoring strategy.

use super::strategy::{weighted_sum, CriterionValues, Scores, ScoringStrategy, StrategyKind};
use super::risk_adjust;
use crate::domain::decision::{Criterion, OptionEvaluation, Outcome};
use crate::domain::foundation::AnalysisError;

/// Scores options on their risk-adjusted values.
///
/// With `risk_weight = 0` this is pure expected-value scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectedValueStrategy;

impl ScoringStrategy for ExpectedValueStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ExpectedValue
    }

    fn evaluate(
        &self,
        options: &[OptionEvaluation],
        criteria: &[Criterion],
        risk_weight: f64,
    ) -> Result<Scores, AnalysisError> {
        weighted_sum(options, criteria, |criterion, outcomes| CriterionValues {
            values: outcomes
                .iter()
                .map(|outcome| risk_adjust(outcome, risk_weight, criterion.maximize()))
                .collect(),
            maximize: criterion.maximize(),
        })
    }
}

/// Weighted scoring on the `expected` point alone, ignoring the spread.
pub fn score_expected_values(
    options: &[OptionEvaluation],
    criteria: &[Criterion],
) -> Result<Scores, AnalysisError> {
    weighted_sum(options, criteria, |criterion, outcomes| CriterionValues {
        values: outcomes.iter().map(Outcome::expected).collect(),
        maximize: criterion.maximize(),
    })
}
