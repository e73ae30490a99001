//! OptionEvaluation - binds an option to its outcome per criterion.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Criterion, DecisionOption, Outcome};
use crate::domain::foundation::ValidationError;

/// One option together with its outcome for each criterion, keyed by
/// criterion name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionEvaluation {
    option: DecisionOption,
    outcomes: HashMap<String, Outcome>,
}

impl OptionEvaluation {
    /// Creates an evaluation from a prepared outcome map.
    pub fn new(option: DecisionOption, outcomes: HashMap<String, Outcome>) -> Self {
        Self { option, outcomes }
    }

    /// Creates a builder for constructing an evaluation outcome by outcome.
    pub fn builder(option: DecisionOption) -> OptionEvaluationBuilder {
        OptionEvaluationBuilder::new(option)
    }

    pub fn option(&self) -> &DecisionOption {
        &self.option
    }

    /// Shorthand for `self.option().name()`.
    pub fn name(&self) -> &str {
        self.option.name()
    }

    /// Gets the outcome recorded for a criterion.
    pub fn outcome(&self, criterion: &str) -> Option<&Outcome> {
        self.outcomes.get(criterion)
    }

    pub fn outcomes(&self) -> &HashMap<String, Outcome> {
        &self.outcomes
    }

    /// Returns the names of criteria this evaluation has no outcome for,
    /// in the order the criteria are given.
    pub fn missing_criteria(&self, criteria: &[Criterion]) -> Vec<String> {
        criteria
            .iter()
            .filter(|c| !self.outcomes.contains_key(c.name()))
            .map(|c| c.name().to_string())
            .collect()
    }

    /// Validates every contained outcome.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.outcomes.values().try_for_each(Outcome::validate)
    }
}

/// Builder for constructing OptionEvaluation instances.
#[derive(Debug)]
pub struct OptionEvaluationBuilder {
    option: DecisionOption,
    outcomes: HashMap<String, Outcome>,
}

impl OptionEvaluationBuilder {
    /// Creates a new builder for an option.
    pub fn new(option: DecisionOption) -> Self {
        Self {
            option,
            outcomes: HashMap::new(),
        }
    }

    /// Adds the outcome for a criterion. A repeated criterion replaces the
    /// earlier outcome.
    pub fn outcome(mut self, criterion: impl Into<String>, outcome: Outcome) -> Self {
        self.outcomes.insert(criterion.into(), outcome);
        self
    }

    /// Builds the evaluation.
    pub fn build(self) -> OptionEvaluation {
        OptionEvaluation {
            option: self.option,
            outcomes: self.outcomes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_a() -> OptionEvaluation {
        OptionEvaluation::builder(DecisionOption::new("Job A"))
            .outcome("salary", Outcome::new(100.0, 90.0, 70.0))
            .outcome("growth", Outcome::new(8.0, 6.0, 4.0))
            .build()
    }

    #[test]
    fn builder_adds_outcomes() {
        let evaluation = job_a();
        assert_eq!(evaluation.name(), "Job A");
        assert_eq!(evaluation.outcomes().len(), 2);
        assert_eq!(
            evaluation.outcome("salary"),
            Some(&Outcome::new(100.0, 90.0, 70.0))
        );
    }

    #[test]
    fn outcome_returns_none_for_unknown_criterion() {
        assert!(job_a().outcome("commute").is_none());
    }

    #[test]
    fn builder_replaces_repeated_criterion() {
        let evaluation = OptionEvaluation::builder(DecisionOption::new("A"))
            .outcome("c", Outcome::new(3.0, 2.0, 1.0))
            .outcome("c", Outcome::new(6.0, 5.0, 4.0))
            .build();
        assert_eq!(evaluation.outcome("c"), Some(&Outcome::new(6.0, 5.0, 4.0)));
    }

    #[test]
    fn missing_criteria_follows_criteria_order() {
        let criteria = vec![
            Criterion::minimizing("risk", 0.2),
            Criterion::maximizing("salary", 0.5),
            Criterion::maximizing("commute", 0.3),
        ];
        assert_eq!(
            job_a().missing_criteria(&criteria),
            vec!["risk".to_string(), "commute".to_string()]
        );
    }

    #[test]
    fn missing_criteria_empty_when_covered() {
        let criteria = vec![Criterion::maximizing("salary", 1.0)];
        assert!(job_a().missing_criteria(&criteria).is_empty());
    }

    #[test]
    fn validate_reports_bad_outcome() {
        let evaluation = OptionEvaluation::builder(DecisionOption::new("A"))
            .outcome("ok", Outcome::new(3.0, 2.0, 1.0))
            .outcome("bad", Outcome::new(1.0, 2.0, 3.0))
            .build();
        assert!(matches!(
            evaluation.validate(),
            Err(ValidationError::InvalidOutcomeOrdering { .. })
        ));
    }

    #[test]
    fn new_from_map_matches_builder() {
        let outcomes = HashMap::from([
            ("salary".to_string(), Outcome::new(100.0, 90.0, 70.0)),
            ("growth".to_string(), Outcome::new(8.0, 6.0, 4.0)),
        ]);
        let evaluation = OptionEvaluation::new(DecisionOption::new("Job A"), outcomes);
        assert_eq!(evaluation, job_a());
    }
}
