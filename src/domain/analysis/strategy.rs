//! Scoring strategy abstraction and the shared weighted-sum skeleton.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::normalize;
use crate::domain::decision::{Criterion, OptionEvaluation, Outcome};
use crate::domain::foundation::AnalysisError;

/// Map of option name -> aggregated score.
pub type Scores = HashMap<String, f64>;

/// The registered strategy variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    ExpectedValue,
    RiskAverse,
    RegretMinimization,
}

impl StrategyKind {
    /// Returns all strategy kinds in registration order.
    pub fn all() -> &'static [StrategyKind] {
        &[
            StrategyKind::ExpectedValue,
            StrategyKind::RiskAverse,
            StrategyKind::RegretMinimization,
        ]
    }

    /// Returns the registry identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::ExpectedValue => "expected_value",
            StrategyKind::RiskAverse => "risk_averse",
            StrategyKind::RegretMinimization => "regret_minimization",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            StrategyKind::ExpectedValue => "Expected Value",
            StrategyKind::RiskAverse => "Risk Averse",
            StrategyKind::RegretMinimization => "Regret Minimization",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AnalysisError::UnknownStrategy(s.to_string()))
    }
}

/// A way of turning evaluations into one comparable score per option.
///
/// Implementations are stateless, so a single instance may be shared across
/// threads and reused for any number of calls.
pub trait ScoringStrategy: Send + Sync + fmt::Debug {
    /// Identifies the variant.
    fn kind(&self) -> StrategyKind;

    /// Scores every option.
    ///
    /// Fails with `MissingOutcome` if an evaluation lacks a criterion.
    fn evaluate(
        &self,
        options: &[OptionEvaluation],
        criteria: &[Criterion],
        risk_weight: f64,
    ) -> Result<Scores, AnalysisError>;
}

/// Raw per-option values for one criterion, plus the direction they are
/// normalized in.
pub(crate) struct CriterionValues {
    pub values: Vec<f64>,
    pub maximize: bool,
}

/// Weighted-sum skeleton shared by all strategies.
///
/// For each criterion: collect the options' outcomes, let `derive` turn them
/// into raw values, normalize, multiply by the weight, accumulate.
///
/// # Edge Cases
/// - No criteria: every option scores 0.0
/// - No options: Returns empty Scores
pub(crate) fn weighted_sum<F>(
    options: &[OptionEvaluation],
    criteria: &[Criterion],
    mut derive: F,
) -> Result<Scores, AnalysisError>
where
    F: FnMut(&Criterion, &[Outcome]) -> CriterionValues,
{
    let mut totals = vec![0.0; options.len()];

    for criterion in criteria {
        let outcomes = outcomes_for(options, criterion)?;
        let CriterionValues { values, maximize } = derive(criterion, &outcomes);

        for (total, normalized) in totals.iter_mut().zip(normalize(&values, maximize)) {
            *total += normalized * criterion.weight();
        }
    }

    let mut scores = Scores::with_capacity(options.len());
    for (option, total) in options.iter().zip(totals) {
        *scores.entry(option.name().to_string()).or_insert(0.0) += total;
    }
    Ok(scores)
}

/// Collects each option's outcome on a criterion, index-aligned with
/// `options`.
pub(crate) fn outcomes_for(
    options: &[OptionEvaluation],
    criterion: &Criterion,
) -> Result<Vec<Outcome>, AnalysisError> {
    options
        .iter()
        .map(|option| require_outcome(option, criterion).copied())
        .collect()
}

pub(crate) fn require_outcome<'a>(
    option: &'a OptionEvaluation,
    criterion: &Criterion,
) -> Result<&'a Outcome, AnalysisError> {
    option.outcome(criterion.name()).ok_or_else(|| {
        AnalysisError::missing_outcome(option.name(), vec![criterion.name().to_string()])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::DecisionOption;

    fn evaluation(name: &str, criterion: &str, outcome: Outcome) -> OptionEvaluation {
        OptionEvaluation::builder(DecisionOption::new(name))
            .outcome(criterion, outcome)
            .build()
    }

    fn expected_values(_: &Criterion, outcomes: &[Outcome]) -> CriterionValues {
        CriterionValues {
            values: outcomes.iter().map(Outcome::expected).collect(),
            maximize: true,
        }
    }

    #[test]
    fn strategy_kind_round_trips_through_identifier() {
        for kind in StrategyKind::all() {
            assert_eq!(kind.as_str().parse::<StrategyKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn strategy_kind_rejects_unknown_identifier() {
        let result = "minimax".parse::<StrategyKind>();
        assert!(matches!(result, Err(AnalysisError::UnknownStrategy(id)) if id == "minimax"));
    }

    #[test]
    fn strategy_kind_serializes_snake_case() {
        let json = serde_json::to_string(&StrategyKind::RegretMinimization).unwrap();
        assert_eq!(json, "\"regret_minimization\"");
    }

    #[test]
    fn weighted_sum_no_criteria_scores_zero() {
        let options = vec![evaluation("A", "c", Outcome::new(1.0, 1.0, 1.0))];
        let scores = weighted_sum(&options, &[], expected_values).unwrap();
        assert_eq!(scores.get("A"), Some(&0.0));
    }

    #[test]
    fn weighted_sum_no_options_is_empty() {
        let criteria = vec![Criterion::maximizing("c", 1.0)];
        let scores = weighted_sum(&[], &criteria, expected_values).unwrap();
        assert!(scores.is_empty());
    }

    #[test]
    fn weighted_sum_applies_weight_without_rescaling_vector() {
        let options = vec![
            evaluation("A", "c", Outcome::new(10.0, 10.0, 10.0)),
            evaluation("B", "c", Outcome::new(0.0, 0.0, 0.0)),
        ];
        let criteria = vec![Criterion::maximizing("c", 0.4)];
        let scores = weighted_sum(&options, &criteria, expected_values).unwrap();
        assert!((scores["A"] - 0.4).abs() < 1e-12);
        assert_eq!(scores["B"], 0.0);
    }

    #[test]
    fn weighted_sum_reports_missing_outcome() {
        let options = vec![evaluation("A", "other", Outcome::new(1.0, 1.0, 1.0))];
        let criteria = vec![Criterion::maximizing("c", 1.0)];
        let result = weighted_sum(&options, &criteria, expected_values);
        assert!(matches!(
            result,
            Err(AnalysisError::MissingOutcome { option, missing })
                if option == "A" && missing == vec!["c".to_string()]
        ));
    }
}
