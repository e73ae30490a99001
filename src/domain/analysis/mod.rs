//! Analysis Module - Pure scoring services for decisions under uncertainty.
//!
//! # Components
//!
//! - `normalize` - Direction-aware min-max rescaling
//! - `risk_adjust` - Collapses a best/expected/worst outcome into one value
//! - `ScoringStrategy` - Expected-Value, Risk-Averse, Regret-Minimization
//! - `get_strategy` - Static registry from identifier to strategy
//! - `DecisionAgent` - Validation, scoring, ranking and breakdown
//! - `SensitivityAnalyzer` - Re-scoring across a range of risk weights
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. They take value objects as input
//! and return computed results; nothing here performs I/O or holds mutable
//! state, so every entry point may be called concurrently.

mod agent;
mod expected_value;
mod normalizer;
mod regret_minimization;
mod registry;
mod risk_adjustment;
mod risk_averse;
mod sensitivity;
mod strategy;

// Re-export all public types
pub use agent::{Breakdown, DecisionAgent, DecisionResult, RankedOption, DEFAULT_RISK_WEIGHT};
pub use expected_value::{score_expected_values, ExpectedValueStrategy};
pub use normalizer::normalize;
pub use regret_minimization::RegretMinimizationStrategy;
pub use registry::{available_strategies, get_strategy};
pub use risk_adjustment::risk_adjust;
pub use risk_averse::RiskAverseStrategy;
pub use sensitivity::{SensitivityAnalyzer, SensitivityReport, SweepPoint, DEFAULT_SWEEP_WEIGHTS};
pub use strategy::{Scores, ScoringStrategy, StrategyKind};
