//! Regret-Minimization strategy.

use super::strategy::{weighted_sum, CriterionValues, Scores, ScoringStrategy, StrategyKind};
use crate::domain::decision::{Criterion, OptionEvaluation, Outcome};
use crate::domain::foundation::AnalysisError;

/// Scores options by how little they can be regretted in the worst case.
///
/// Regret per criterion:
/// - maximize: `max(0, max_over_options(best) - own.worst)`
/// - minimize: `max(0, own.worst - min_over_options(worst))`
///
/// Regrets are normalized with lower-is-better before weighting. The risk
/// weight is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegretMinimizationStrategy;

impl RegretMinimizationStrategy {
    /// Computes the raw regret of each outcome, index-aligned with the input.
    pub fn regrets(outcomes: &[Outcome], maximize: bool) -> Vec<f64> {
        if maximize {
            let best_of_bests = outcomes
                .iter()
                .map(Outcome::best)
                .fold(f64::NEG_INFINITY, f64::max);
            outcomes
                .iter()
                .map(|o| (best_of_bests - o.worst()).max(0.0))
                .collect()
        } else {
            let best_of_worsts = outcomes
                .iter()
                .map(Outcome::worst)
                .fold(f64::INFINITY, f64::min);
            outcomes
                .iter()
                .map(|o| (o.worst() - best_of_worsts).max(0.0))
                .collect()
        }
    }
}

impl ScoringStrategy for RegretMinimizationStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::RegretMinimization
    }

    fn evaluate(
        &self,
        options: &[OptionEvaluation],
        criteria: &[Criterion],
        _risk_weight: f64,
    ) -> Result<Scores, AnalysisError> {
        weighted_sum(options, criteria, |criterion, outcomes| CriterionValues {
            values: Self::regrets(outcomes, criterion.maximize()),
            maximize: false,
        })
    }
}
