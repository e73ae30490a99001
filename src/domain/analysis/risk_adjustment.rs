//! Risk Adjustment - collapses a three-point outcome into one estimate.

use crate::domain::decision::Outcome;

/// Risk-adjusted estimate of an outcome.
///
/// With `spread = best - worst`:
/// - `maximize`: `expected - risk_weight * spread` (uncertainty discounts)
/// - otherwise: `expected + risk_weight * spread` (uncertainty inflates the
///   effective cost)
///
/// `risk_weight = 0` yields the plain expected value. The weight is not
/// range-checked; values outside `[0, 1]` extrapolate linearly.
pub fn risk_adjust(outcome: &Outcome, risk_weight: f64, maximize: bool) -> f64 {
    let spread = outcome.spread();
    if maximize {
        outcome.expected() - risk_weight * spread
    } else {
        outcome.expected() + risk_weight * spread
    }
}
