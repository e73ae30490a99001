//! Risk-Averse strategy.
//!
//! Currently derives the same per-criterion value as the Expected-Value
//! strategy. It is a separate type so its risk model can diverge without
//! touching the default strategy or the registry identifiers.

use super::strategy::{weighted_sum, CriterionValues, Scores, ScoringStrategy, StrategyKind};
use crate::domain::decision::{Criterion, OptionEvaluation};
use crate::domain::foundation::AnalysisError;

#[derive(Debug, Clone, Copy, Default)]
pub struct RiskAverseStrategy;

impl ScoringStrategy for RiskAverseStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::RiskAverse
    }

    fn evaluate(
        &self,
        options: &[OptionEvaluation],
        criteria: &[Criterion],
        risk_weight: f64,
    ) -> Result<Scores, AnalysisError> {
        weighted_sum(options, criteria, |criterion, outcomes| {
            let maximize = criterion.maximize();
            let values = outcomes
                .iter()
                .map(|outcome| {
                    let spread = outcome.best() - outcome.worst();
                    if maximize {
                        outcome.expected() - risk_weight * spread
                    } else {
                        outcome.expected() + risk_weight * spread
                    }
                })
                .collect();
            CriterionValues { values, maximize }
        })
    }
}
