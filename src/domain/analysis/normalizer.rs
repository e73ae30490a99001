//! Normalizer - direction-aware min-max rescaling to `[0, 1]`.

/// Rescales `values` so that 1.0 always means "best on this dimension".
///
/// Output is index-aligned with the input.
///
/// # Algorithm
/// - `maximize`: `(v - min) / (max - min)`
/// - otherwise: `(max - v) / (max - min)`
///
/// # Edge Cases
/// - Empty input: Returns an empty Vec
/// - All values equal: Every element maps to 1.0, a tie counts as favorable
/// - `max - min` overflows: Everything is halved first, so the extremes
///   still map to exactly 0.0 and 1.0
pub fn normalize(values: &[f64], maximize: bool) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        return vec![1.0; values.len()];
    }

    // Halving is exact for normal values and keeps the range finite
    let scale = if (max - min).is_finite() { 1.0 } else { 0.5 };
    let (min, max) = (min * scale, max * scale);
    let range = max - min;

    values
        .iter()
        .map(|&v| {
            let v = v * scale;
            if maximize {
                (v - min) / range
            } else {
                (max - v) / range
            }
        })
        .collect()
}
