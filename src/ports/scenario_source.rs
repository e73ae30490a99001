//! ScenarioSource port - Interface for obtaining a decision scenario.
//!
//! The engine never cares where options and criteria come from; a file,
//! a fixture or hardcoded data all look the same behind this port.

use crate::domain::decision::Scenario;
use crate::domain::foundation::AnalysisError;

/// Port for loading a scenario to score.
///
/// Implementations must return a scenario whose criteria and outcomes have
/// already passed `Scenario::validate`.
pub trait ScenarioSource: Send + Sync {
    fn load(&self) -> Result<Scenario, AnalysisError>;
}
