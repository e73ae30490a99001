//! RunSensitivityHandler - Command handler for risk-weight sweeps.

use std::sync::Arc;

use tracing::info;

use crate::domain::analysis::{get_strategy, SensitivityAnalyzer, SensitivityReport, StrategyKind};
use crate::domain::foundation::AnalysisError;
use crate::ports::ScenarioSource;

/// Command to sweep a scenario across risk weights.
#[derive(Debug, Clone)]
pub struct RunSensitivityCommand {
    /// Registry identifier, e.g. `risk_averse`.
    pub strategy: String,
    /// Weights to evaluate, in the order they should be reported.
    pub risk_weights: Vec<f64>,
}

/// Result of a successful sweep.
#[derive(Debug, Clone)]
pub struct RunSensitivityResult {
    pub strategy: StrategyKind,
    pub report: SensitivityReport,
}

/// Handler for sensitivity sweeps.
pub struct RunSensitivityHandler {
    scenario_source: Arc<dyn ScenarioSource>,
}

impl RunSensitivityHandler {
    pub fn new(scenario_source: Arc<dyn ScenarioSource>) -> Self {
        Self { scenario_source }
    }

    pub fn handle(&self, cmd: RunSensitivityCommand) -> Result<RunSensitivityResult, AnalysisError> {
        let strategy = get_strategy(&cmd.strategy)?;
        let scenario = self.scenario_source.load()?;

        let report = SensitivityAnalyzer::sweep(
            scenario.options(),
            scenario.criteria(),
            strategy.as_ref(),
            &cmd.risk_weights,
        )?;

        info!(
            strategy = %strategy.kind(),
            points = report.len(),
            rank_reversal = report.has_rank_reversal(),
            "Sensitivity sweep finished"
        );

        Ok(RunSensitivityResult {
            strategy: strategy.kind(),
            report,
        })
    }
}
