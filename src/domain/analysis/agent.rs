//! Decision Agent - validation, scoring, ranking and breakdown in one call.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::strategy::require_outcome;
use super::{risk_adjust, Scores, ScoringStrategy};
use crate::domain::decision::{Criterion, OptionEvaluation};
use crate::domain::foundation::AnalysisError;

/// Risk weight used when the caller does not pick one.
pub const DEFAULT_RISK_WEIGHT: f64 = 0.5;

/// Option name -> criterion name -> risk-adjusted raw value.
pub type Breakdown = HashMap<String, HashMap<String, f64>>;

/// One entry of the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedOption {
    pub name: String,
    pub score: f64,
}

/// Everything the agent returns for one decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    /// Option name -> score from the active strategy.
    pub scores: Scores,
    /// Options by descending score; ties keep input order.
    pub ranking: Vec<RankedOption>,
    /// Per-criterion risk-adjusted values.
    ///
    /// Always computed with the risk-adjustment formula, whichever strategy
    /// produced `scores`. Under Regret-Minimization it explains the options
    /// in risk-adjusted terms rather than reproducing the regrets scored.
    pub breakdown: Breakdown,
}

impl DecisionResult {
    /// Returns the top-ranked option, if any.
    pub fn winner(&self) -> Option<&RankedOption> {
        self.ranking.first()
    }

    /// Returns the 0-based rank of an option.
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.ranking.iter().position(|r| r.name == name)
    }
}

/// Orchestrates a complete decision.
pub struct DecisionAgent;

impl DecisionAgent {
    /// Scores, ranks and explains the options.
    ///
    /// # Algorithm
    /// 1. Pre-flight check (see [`DecisionAgent::validate_coverage`])
    /// 2. `scores = strategy.evaluate(options, criteria, risk_weight)`
    /// 3. Stable sort by descending score
    /// 4. Risk-adjusted breakdown per option and criterion
    ///
    /// # Errors
    ///
    /// `MissingOutcome` or `DuplicateOption` from the pre-flight check, raised
    /// before any scoring runs.
    pub fn decide(
        options: &[OptionEvaluation],
        criteria: &[Criterion],
        strategy: &dyn ScoringStrategy,
        risk_weight: f64,
    ) -> Result<DecisionResult, AnalysisError> {
        Self::validate_coverage(options, criteria)?;

        let scores = strategy.evaluate(options, criteria, risk_weight)?;
        let ranking = Self::rank(options, &scores);
        let breakdown = Self::explain(options, criteria, risk_weight)?;

        debug!(
            strategy = %strategy.kind(),
            options = options.len(),
            criteria = criteria.len(),
            risk_weight,
            winner = ranking.first().map(|r| r.name.as_str()).unwrap_or(""),
            "Decision computed"
        );

        Ok(DecisionResult {
            scores,
            ranking,
            breakdown,
        })
    }

    /// Checks that option names are unique and that every evaluation has an
    /// outcome for every criterion.
    ///
    /// The first offending option is reported, with all of its missing
    /// criteria in criteria order.
    pub fn validate_coverage(
        options: &[OptionEvaluation],
        criteria: &[Criterion],
    ) -> Result<(), AnalysisError> {
        let mut seen = HashSet::with_capacity(options.len());

        for option in options {
            if !seen.insert(option.name()) {
                return Err(AnalysisError::DuplicateOption(option.name().to_string()));
            }

            let missing = option.missing_criteria(criteria);
            if !missing.is_empty() {
                return Err(AnalysisError::missing_outcome(option.name(), missing));
            }
        }

        Ok(())
    }

    /// Orders options by descending score. `sort_by` is stable, so equal
    /// scores keep their input order.
    fn rank(options: &[OptionEvaluation], scores: &Scores) -> Vec<RankedOption> {
        let mut ranking: Vec<RankedOption> = options
            .iter()
            .filter_map(|option| {
                scores.get(option.name()).map(|&score| RankedOption {
                    name: option.name().to_string(),
                    score,
                })
            })
            .collect();

        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranking
    }

    fn explain(
        options: &[OptionEvaluation],
        criteria: &[Criterion],
        risk_weight: f64,
    ) -> Result<Breakdown, AnalysisError> {
        let mut breakdown = Breakdown::with_capacity(options.len());

        for option in options {
            let mut per_criterion = HashMap::with_capacity(criteria.len());
            for criterion in criteria {
                let outcome = require_outcome(option, criterion)?;
                per_criterion.insert(
                    criterion.name().to_string(),
                    risk_adjust(outcome, risk_weight, criterion.maximize()),
                );
            }
            breakdown.insert(option.name().to_string(), per_criterion);
        }

        Ok(breakdown)
    }
}
