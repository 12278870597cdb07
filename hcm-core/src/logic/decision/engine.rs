//! Governance Decision Engine
//!
//! Decision logic only - types live in `types`.
//! Input: DeviceEvent + GovernanceConfig
//! Output: GovernanceDecision

use super::rules::{REASON_ALLOW, REASON_CONTAIN, REASON_DEFER};
use super::types::*;
use crate::logic::impact::{clamp01, compute_impact};

// ============================================================================
// MAIN DECISION FUNCTION
// ============================================================================

/// Formal HCM decision logic, first match wins:
///   1) a <= theta_a          => ALLOW
///   2) else I < theta_I      => DEFER
///   3) else                  => CONTAIN
/// where I = a * T(s) * C(s) over clamped inputs.
///
/// Total for every f64 input. Equality on theta_a allows, equality on
/// theta_I contains.
pub fn decide(event: &DeviceEvent, config: &GovernanceConfig) -> GovernanceDecision {
    let a = clamp01(event.anomaly_score);
    let t = clamp01(event.trust_weight);
    let c = clamp01(event.centrality);
    let impact = compute_impact(a, t, c);

    let details = AuditDetails {
        device_id: event.device_id.clone(),
        anomaly_score: a,
        trust_weight: t,
        centrality: c,
        theta_a: config.theta_a,
        theta_i: config.theta_i,
    };

    let (decision, reason) = if a <= config.theta_a {
        (Decision::Allow, REASON_ALLOW)
    } else if impact < config.theta_i {
        (Decision::Defer, REASON_DEFER)
    } else {
        (Decision::Contain, REASON_CONTAIN)
    };

    log::debug!(
        "device={} a={:.3} T={:.3} C={:.3} impact={:.3} -> {}",
        event.device_id, a, t, c, impact, decision
    );

    GovernanceDecision {
        decision,
        impact,
        reason: reason.to_string(),
        details,
    }
}

/// Decision with default thresholds (theta_a = 0.5, theta_I = 0.3)
pub fn decide_default(event: &DeviceEvent) -> GovernanceDecision {
    decide(event, &GovernanceConfig::default())
}

// ============================================================================
// TESTS
// ============================================================================
