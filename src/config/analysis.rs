//! Analysis defaults configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{get_strategy, StrategyKind, DEFAULT_RISK_WEIGHT, DEFAULT_SWEEP_WEIGHTS};

/// Defaults applied when a caller does not choose explicitly
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Registry identifier of the strategy to use
    #[serde(default = "default_strategy")]
    pub default_strategy: String,

    /// Risk weight for single evaluations
    #[serde(default = "default_risk_weight")]
    pub default_risk_weight: f64,

    /// Risk weights for sensitivity sweeps (comma-separated in env)
    #[serde(default = "default_sweep_weights")]
    pub sweep_weights: Vec<f64>,
}

fn default_strategy() -> String {
    StrategyKind::ExpectedValue.as_str().to_string()
}

fn default_risk_weight() -> f64 {
    DEFAULT_RISK_WEIGHT
}

fn default_sweep_weights() -> Vec<f64> {
    DEFAULT_SWEEP_WEIGHTS.to_vec()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_strategy: default_strategy(),
            default_risk_weight: default_risk_weight(),
            sweep_weights: default_sweep_weights(),
        }
    }
}

impl AnalysisConfig {
    /// Validate analysis defaults
    pub fn validate(&self) -> Result<(), ValidationError> {
        if get_strategy(&self.default_strategy).is_err() {
            return Err(ValidationError::UnknownStrategy(self.default_strategy.clone()));
        }

        // Out-of-range weights are allowed (they extrapolate), non-finite ones are not
        if !self.default_risk_weight.is_finite() {
            return Err(ValidationError::InvalidRiskWeight);
        }

        if self.sweep_weights.is_empty() {
            return Err(ValidationError::EmptySweep);
        }

        if self.sweep_weights.iter().any(|w| !w.is_finite()) {
            return Err(ValidationError::InvalidSweepWeight);
        }

        Ok(())
    }
}
