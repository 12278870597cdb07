//! Impact Calculator
//!
//! HCM impact: `I = a * T(s) * C(s)`, every factor clamped to [0, 1].
//! Total over all f64 inputs, including NaN and infinities.

/// Clamp a signal to [0, 1].
///
/// `+inf` maps to 1.0 and `-inf` to 0.0. NaN maps to 0.0: a signal that is
/// not a number carries no evidence, so it is read as the most benign value.
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    if x < 0.0 {
        return 0.0;
    }
    if x > 1.0 {
        return 1.0;
    }
    x
}

/// Compute impact from anomaly score, trust weight and centrality.
pub fn compute_impact(anomaly_score: f64, trust_weight: f64, centrality: f64) -> f64 {
    let a = clamp01(anomaly_score);
    let t = clamp01(trust_weight);
    let c = clamp01(centrality);
    a * t * c
}
