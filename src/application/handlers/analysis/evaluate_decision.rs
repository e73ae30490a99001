//! EvaluateDecisionHandler - Command handler for scoring a scenario.
//!
//! Resolves the requested strategy from the registry, loads the scenario
//! through its port, and runs the decision agent.

use std::sync::Arc;

use tracing::info;

use crate::domain::analysis::{get_strategy, DecisionAgent, DecisionResult, StrategyKind};
use crate::domain::foundation::AnalysisError;
use crate::ports::ScenarioSource;

/// Command to score a scenario with one strategy.
#[derive(Debug, Clone)]
pub struct EvaluateDecisionCommand {
    /// Registry identifier, e.g. `expected_value`.
    pub strategy: String,
    pub risk_weight: f64,
}

/// Result of a successful evaluation.
#[derive(Debug, Clone)]
pub struct EvaluateDecisionResult {
    /// The strategy that produced the scores.
    pub strategy: StrategyKind,
    pub decision: DecisionResult,
}

/// Handler for scoring scenarios.
pub struct EvaluateDecisionHandler {
    scenario_source: Arc<dyn ScenarioSource>,
}

impl EvaluateDecisionHandler {
    pub fn new(scenario_source: Arc<dyn ScenarioSource>) -> Self {
        Self { scenario_source }
    }

    pub fn handle(&self, cmd: EvaluateDecisionCommand) -> Result<EvaluateDecisionResult, AnalysisError> {
        // 1. Resolve the strategy before touching the scenario
        let strategy = get_strategy(&cmd.strategy)?;

        // 2. Load the scenario (validated by the source)
        let scenario = self.scenario_source.load()?;

        // 3. Run the agent
        let decision = DecisionAgent::decide(
            scenario.options(),
            scenario.criteria(),
            strategy.as_ref(),
            cmd.risk_weight,
        )?;

        info!(
            strategy = %strategy.kind(),
            risk_weight = cmd.risk_weight,
            winner = decision.winner().map(|w| w.name.as_str()).unwrap_or(""),
            "Decision evaluated"
        );

        Ok(EvaluateDecisionResult {
            strategy: strategy.kind(),
            decision,
        })
    }
}
