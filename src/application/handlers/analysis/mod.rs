//! Analysis command handlers.
//!
//! Handlers that load a scenario and run the decision agent or the
//! sensitivity sweep against it.

mod evaluate_decision;
mod run_sensitivity;

pub use evaluate_decision::{EvaluateDecisionCommand, EvaluateDecisionHandler, EvaluateDecisionResult};
pub use run_sensitivity::{RunSensitivityCommand, RunSensitivityHandler, RunSensitivityResult};
