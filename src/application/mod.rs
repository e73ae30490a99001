//! Application layer - Commands and Handlers.
//!
//! This layer resolves strategies by identifier, pulls scenarios through
//! ports, and hands both to the pure domain services.

pub mod handlers;

pub use handlers::{
    EvaluateDecisionCommand, EvaluateDecisionHandler, EvaluateDecisionResult,
    RunSensitivityCommand, RunSensitivityHandler, RunSensitivityResult,
};
