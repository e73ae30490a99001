//! Decision value objects.
//!
//! Immutable data carriers supplied by callers before any scoring runs.
//! Validation is explicit: construct first, call `validate()` when needed.
//!
//! # Components
//!
//! - `DecisionOption` - A candidate choice under evaluation
//! - `Outcome` - Three-point (best / expected / worst) estimate
//! - `Criterion` - Weighted comparison dimension with a direction
//! - `OptionEvaluation` - An option bound to its outcome per criterion
//! - `Scenario` - A complete set of criteria and evaluations

mod criterion;
mod evaluation;
mod option;
mod outcome;
mod scenario;

pub use criterion::Criterion;
pub use evaluation::{OptionEvaluation, OptionEvaluationBuilder};
pub use option::DecisionOption;
pub use outcome::Outcome;
pub use scenario::Scenario;
