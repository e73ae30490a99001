//! In-memory scenario source for tests and embedded callers.

use crate::domain::decision::Scenario;
use crate::domain::foundation::AnalysisError;
use crate::ports::ScenarioSource;

/// Serves a clone of a scenario built in code.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScenarioSource {
    scenario: Scenario,
}

impl InMemoryScenarioSource {
    pub fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }
}

impl ScenarioSource for InMemoryScenarioSource {
    /// Validates on every load, matching what file-backed sources guarantee.
    fn load(&self) -> Result<Scenario, AnalysisError> {
        self.scenario.validate()?;
        Ok(self.scenario.clone())
    }
}
