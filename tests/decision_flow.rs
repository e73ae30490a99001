//! Integration tests for the scoring pipeline.
//!
//! These tests drive the public API end to end:
//! 1. Strategies resolved by identifier from the registry
//! 2. DecisionAgent validation, scoring, ranking and breakdown
//! 3. SensitivityAnalyzer sweeps across risk weights
//! 4. Application handlers wired to an in-memory scenario source

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use decision_compass::adapters::InMemoryScenarioSource;
use decision_compass::application::{
    EvaluateDecisionCommand, EvaluateDecisionHandler, RunSensitivityCommand,
    RunSensitivityHandler,
};
use decision_compass::domain::analysis::{
    available_strategies, get_strategy, DecisionAgent, Scores, ScoringStrategy,
    SensitivityAnalyzer, StrategyKind, DEFAULT_SWEEP_WEIGHTS,
};
use decision_compass::domain::decision::{
    Criterion, DecisionOption, OptionEvaluation, Outcome, Scenario,
};
use decision_compass::domain::foundation::{AnalysisError, ErrorCode};

// =============================================================================
// Test Fixtures
// =============================================================================

fn salary_only(name: &str, best: f64, expected: f64, worst: f64) -> OptionEvaluation {
    OptionEvaluation::builder(DecisionOption::new(name))
        .outcome("salary", Outcome::new(best, expected, worst))
        .build()
}

/// Option A pays more on average but swings wider than option B.
fn salary_options() -> Vec<OptionEvaluation> {
    vec![
        salary_only("A", 10.0, 8.0, 5.0),
        salary_only("B", 9.0, 7.0, 6.0),
    ]
}

fn salary_criteria() -> Vec<Criterion> {
    vec![Criterion::maximizing("salary", 1.0)]
}

fn job_offers() -> Scenario {
    Scenario::new(
        vec![
            Criterion::maximizing("salary", 0.6),
            Criterion::minimizing("commute", 0.4),
        ],
        vec![
            OptionEvaluation::builder(DecisionOption::with_description("Job A", "Downtown office"))
                .outcome("salary", Outcome::new(100.0, 90.0, 70.0))
                .outcome("commute", Outcome::new(45.0, 30.0, 20.0))
                .build(),
            OptionEvaluation::builder(DecisionOption::new("Job B"))
                .outcome("salary", Outcome::new(95.0, 85.0, 75.0))
                .outcome("commute", Outcome::new(15.0, 10.0, 5.0))
                .build(),
        ],
    )
}

fn expected_value() -> Arc<dyn ScoringStrategy> {
    get_strategy("expected_value").unwrap()
}

/// Strategy that records how often it was asked to score.
#[derive(Debug, Default)]
struct CountingStrategy {
    calls: AtomicUsize,
}

impl ScoringStrategy for CountingStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ExpectedValue
    }

    fn evaluate(
        &self,
        options: &[OptionEvaluation],
        _criteria: &[Criterion],
        _risk_weight: f64,
    ) -> Result<Scores, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(options.iter().map(|o| (o.name().to_string(), 0.0)).collect())
    }
}

// =============================================================================
// Risk weight scenarios
// =============================================================================

#[test]
fn moderate_risk_weight_ties_both_options() {
    let result = DecisionAgent::decide(
        &salary_options(),
        &salary_criteria(),
        expected_value().as_ref(),
        0.5,
    )
    .unwrap();

    assert_eq!(result.scores["A"], 1.0);
    assert_eq!(result.scores["B"], 1.0);

    // Tied scores keep input order
    let names: Vec<_> = result.ranking.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn zero_risk_weight_prefers_higher_expected_value() {
    let result = DecisionAgent::decide(
        &salary_options(),
        &salary_criteria(),
        expected_value().as_ref(),
        0.0,
    )
    .unwrap();

    assert_eq!(result.scores["A"], 1.0);
    assert_eq!(result.scores["B"], 0.0);
    assert_eq!(result.winner().unwrap().name, "A");
    assert_eq!(result.breakdown["A"]["salary"], 8.0);
    assert_eq!(result.breakdown["B"]["salary"], 7.0);
}

#[test]
fn full_risk_weight_reverses_the_winner() {
    let result = DecisionAgent::decide(
        &salary_options(),
        &salary_criteria(),
        expected_value().as_ref(),
        1.0,
    )
    .unwrap();

    assert_eq!(result.winner().unwrap().name, "B");
    assert_eq!(result.rank_of("A"), Some(1));
    assert_eq!(result.breakdown["A"]["salary"], 3.0);
    assert_eq!(result.breakdown["B"]["salary"], 4.0);
}

#[test]
fn risk_averse_matches_expected_value() {
    let risk_averse = get_strategy("risk_averse").unwrap();

    for &weight in &DEFAULT_SWEEP_WEIGHTS {
        let ev = expected_value()
            .evaluate(&salary_options(), &salary_criteria(), weight)
            .unwrap();
        let ra = risk_averse
            .evaluate(&salary_options(), &salary_criteria(), weight)
            .unwrap();
        assert_eq!(ev, ra, "strategies diverged at risk weight {}", weight);
    }
}

#[test]
fn regret_minimization_prefers_smaller_downside() {
    let regret = get_strategy("regret_minimization").unwrap();

    // Regret against the best best (10): A = 5, B = 4
    let result =
        DecisionAgent::decide(&salary_options(), &salary_criteria(), regret.as_ref(), 0.0)
            .unwrap();

    assert_eq!(result.winner().unwrap().name, "B");
    assert_eq!(result.scores["B"], 1.0);
    assert_eq!(result.scores["A"], 0.0);
}

#[test]
fn minimizing_criterion_rewards_lower_values() {
    let scenario = job_offers();
    let result = DecisionAgent::decide(
        scenario.options(),
        scenario.criteria(),
        expected_value().as_ref(),
        0.0,
    )
    .unwrap();

    // Salary: A best (0.6). Commute: B best (0.4).
    assert!((result.scores["Job A"] - 0.6).abs() < 1e-12);
    assert!((result.scores["Job B"] - 0.4).abs() < 1e-12);
    assert_eq!(result.winner().unwrap().name, "Job A");
}

// =============================================================================
// Pre-flight validation
// =============================================================================

#[test]
fn missing_outcome_fails_before_scoring() {
    let strategy = CountingStrategy::default();
    let mut options = salary_options();
    options.push(OptionEvaluation::builder(DecisionOption::new("C")).build());

    let err = DecisionAgent::decide(&options, &salary_criteria(), &strategy, 0.5).unwrap_err();

    assert_eq!(err.code(), ErrorCode::MissingOutcome);
    assert!(err.to_string().contains("'C'"));
    assert_eq!(strategy.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn duplicate_option_names_rejected() {
    let strategy = CountingStrategy::default();
    let options = vec![
        salary_only("A", 10.0, 8.0, 5.0),
        salary_only("A", 9.0, 7.0, 6.0),
    ];

    let err = DecisionAgent::decide(&options, &salary_criteria(), &strategy, 0.5).unwrap_err();

    assert_eq!(err.code(), ErrorCode::DuplicateOption);
    assert_eq!(strategy.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn empty_option_list_yields_empty_result() {
    let result =
        DecisionAgent::decide(&[], &salary_criteria(), expected_value().as_ref(), 0.5).unwrap();

    assert!(result.scores.is_empty());
    assert!(result.ranking.is_empty());
    assert!(result.winner().is_none());
}

// =============================================================================
// Registry
// =============================================================================

#[test]
fn every_listed_strategy_resolves_to_its_kind() {
    let identifiers = available_strategies();
    assert_eq!(identifiers.len(), StrategyKind::all().len());

    for id in identifiers {
        let strategy = get_strategy(id).unwrap();
        assert_eq!(strategy.kind().as_str(), id);
    }
}

#[test]
fn unknown_strategy_identifier_rejected() {
    let err = get_strategy("maximin").unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownStrategy);
    assert_eq!(err.to_string(), "Strategy 'maximin' not found");
}

// =============================================================================
// Sensitivity sweep
// =============================================================================

#[test]
fn sweep_detects_rank_reversal() {
    let report = SensitivityAnalyzer::sweep(
        &salary_options(),
        &salary_criteria(),
        expected_value().as_ref(),
        &DEFAULT_SWEEP_WEIGHTS,
    )
    .unwrap();

    assert_eq!(report.len(), DEFAULT_SWEEP_WEIGHTS.len());
    assert_eq!(report.get(0.0).unwrap()["A"], 1.0);
    assert_eq!(report.get(1.0).unwrap()["B"], 1.0);
    assert!(report.has_rank_reversal());

    let leaders = report.leaders();
    assert_eq!(leaders.first(), Some(&(0.0, "A")));
    assert_eq!(leaders.last(), Some(&(1.0, "B")));
}

#[test]
fn sweep_matches_single_decisions() {
    let strategy = expected_value();
    let report = SensitivityAnalyzer::sweep(
        &salary_options(),
        &salary_criteria(),
        strategy.as_ref(),
        &[0.25, 0.75],
    )
    .unwrap();

    for weight in [0.25, 0.75] {
        let single =
            DecisionAgent::decide(&salary_options(), &salary_criteria(), strategy.as_ref(), weight)
                .unwrap();
        assert_eq!(report.get(weight), Some(&single.scores));
    }
}

#[test]
fn regret_sweep_is_flat() {
    let regret = get_strategy("regret_minimization").unwrap();
    let report = SensitivityAnalyzer::sweep(
        &salary_options(),
        &salary_criteria(),
        regret.as_ref(),
        &DEFAULT_SWEEP_WEIGHTS,
    )
    .unwrap();

    let first = report.get(0.0).unwrap();
    assert!(report.iter().all(|point| &point.scores == first));
    assert!(!report.has_rank_reversal());
}

// =============================================================================
// Handlers
// =============================================================================

#[test]
fn handlers_share_one_scenario_source() {
    let source = Arc::new(InMemoryScenarioSource::new(job_offers()));

    let evaluation = EvaluateDecisionHandler::new(source.clone())
        .handle(EvaluateDecisionCommand {
            strategy: "risk_averse".to_string(),
            risk_weight: 0.0,
        })
        .unwrap();
    assert_eq!(evaluation.strategy, StrategyKind::RiskAverse);
    assert_eq!(evaluation.decision.winner().unwrap().name, "Job A");

    let sweep = RunSensitivityHandler::new(source)
        .handle(RunSensitivityCommand {
            strategy: "risk_averse".to_string(),
            risk_weights: vec![0.0, 1.0],
        })
        .unwrap();
    assert_eq!(sweep.report.risk_weights(), vec![0.0, 1.0]);
    assert_eq!(sweep.report.get(0.0), Some(&evaluation.decision.scores));
}
