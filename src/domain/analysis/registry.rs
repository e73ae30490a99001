//! Strategy Registry - static lookup from identifier to strategy.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

use super::{
    ExpectedValueStrategy, RegretMinimizationStrategy, RiskAverseStrategy, ScoringStrategy,
    StrategyKind,
};
use crate::domain::foundation::AnalysisError;

/// Process-wide strategy table, populated on first access and read-only
/// afterwards.
static STRATEGIES: Lazy<HashMap<&'static str, Arc<dyn ScoringStrategy>>> = Lazy::new(|| {
    StrategyKind::all()
        .iter()
        .map(|kind| (kind.as_str(), instantiate(*kind)))
        .collect()
});

fn instantiate(kind: StrategyKind) -> Arc<dyn ScoringStrategy> {
    match kind {
        StrategyKind::ExpectedValue => Arc::new(ExpectedValueStrategy),
        StrategyKind::RiskAverse => Arc::new(RiskAverseStrategy),
        StrategyKind::RegretMinimization => Arc::new(RegretMinimizationStrategy),
    }
}

/// Looks up a strategy by identifier.
///
/// # Errors
///
/// Returns `UnknownStrategy` for any identifier other than
/// `expected_value`, `risk_averse` or `regret_minimization`.
pub fn get_strategy(identifier: &str) -> Result<Arc<dyn ScoringStrategy>, AnalysisError> {
    STRATEGIES
        .get(identifier)
        .cloned()
        .ok_or_else(|| AnalysisError::UnknownStrategy(identifier.to_string()))
}

/// Registered identifiers in registration order.
pub fn available_strategies() -> Vec<&'static str> {
    StrategyKind::all().iter().map(StrategyKind::as_str).collect()
}
