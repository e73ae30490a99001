//! Sensitivity Sweep - re-scores options across a range of risk weights.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, trace};

use super::{DecisionAgent, Scores, ScoringStrategy};
use crate::domain::decision::{Criterion, OptionEvaluation};
use crate::domain::foundation::AnalysisError;

/// Risk weights swept when the caller does not supply any.
pub const DEFAULT_SWEEP_WEIGHTS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Scores produced at one risk weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub risk_weight: f64,
    pub scores: Scores,
}

/// Risk weight -> scores, keyed by the literal weights supplied.
///
/// Keys keep the order in which they were first supplied. A repeated weight
/// overwrites the earlier entry's scores in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitivityReport {
    points: Vec<SweepPoint>,
    option_order: Vec<String>,
}

impl SensitivityReport {
    fn new(option_order: Vec<String>) -> Self {
        Self {
            points: Vec::new(),
            option_order,
        }
    }

    fn insert(&mut self, risk_weight: f64, scores: Scores) {
        match self.points.iter_mut().find(|p| p.risk_weight == risk_weight) {
            Some(point) => point.scores = scores,
            None => self.points.push(SweepPoint {
                risk_weight,
                scores,
            }),
        }
    }

    /// Gets the scores computed for a risk weight.
    pub fn get(&self, risk_weight: f64) -> Option<&Scores> {
        self.points
            .iter()
            .find(|p| p.risk_weight == risk_weight)
            .map(|p| &p.scores)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SweepPoint> {
        self.points.iter()
    }

    /// The distinct risk weights, in first-supplied order.
    pub fn risk_weights(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.risk_weight).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Top-scoring option at each risk weight.
    ///
    /// Scores compare with `f64::total_cmp` and ties go to the option supplied
    /// first, matching the agent's ranking.
    pub fn leaders(&self) -> Vec<(f64, &str)> {
        self.points
            .iter()
            .filter_map(|p| self.leader_of(&p.scores).map(|name| (p.risk_weight, name)))
            .collect()
    }

    /// Returns true if the top-scoring option changes anywhere in the sweep.
    pub fn has_rank_reversal(&self) -> bool {
        let leaders = self.leaders();
        leaders
            .windows(2)
            .any(|pair| pair[0].1 != pair[1].1)
    }

    fn leader_of(&self, scores: &Scores) -> Option<&str> {
        let mut leader: Option<(&str, f64)> = None;
        for name in &self.option_order {
            let Some(&score) = scores.get(name) else {
                continue;
            };
            match leader {
                Some((_, best)) if score.total_cmp(&best) != Ordering::Greater => {}
                _ => leader = Some((name.as_str(), score)),
            }
        }
        leader.map(|(name, _)| name)
    }
}

/// Runs a strategy across several risk weights.
pub struct SensitivityAnalyzer;

impl SensitivityAnalyzer {
    /// Evaluates `strategy` once per supplied weight.
    ///
    /// Runs are independent of each other. Weights are neither sorted nor
    /// deduplicated; see [`SensitivityReport`] for how repeats are stored.
    ///
    /// # Errors
    ///
    /// Coverage problems are reported before the first run, exactly as
    /// [`DecisionAgent::decide`] reports them.
    pub fn sweep(
        options: &[OptionEvaluation],
        criteria: &[Criterion],
        strategy: &dyn ScoringStrategy,
        risk_weights: &[f64],
    ) -> Result<SensitivityReport, AnalysisError> {
        DecisionAgent::validate_coverage(options, criteria)?;

        let mut report =
            SensitivityReport::new(options.iter().map(|o| o.name().to_string()).collect());

        for &risk_weight in risk_weights {
            let scores = strategy.evaluate(options, criteria, risk_weight)?;
            trace!(risk_weight, "Sweep point evaluated");
            report.insert(risk_weight, scores);
        }

        debug!(
            strategy = %strategy.kind(),
            points = report.len(),
            rank_reversal = report.has_rank_reversal(),
            "Sensitivity sweep completed"
        );

        Ok(report)
    }
}
