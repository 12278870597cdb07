//! Decision Types
//!
//! Core types for governance decisions.
//! No logic here - data structures only.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_THETA_A, DEFAULT_THETA_I};

// ============================================================================
// DECISION
// ============================================================================

/// Governance decision for a device event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    /// Benign - let the device act
    Allow,
    /// Suspicious but low impact - hold off on action
    Defer,
    /// High impact - block/isolate the device
    Contain,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Allow => "ALLOW",
            Decision::Defer => "DEFER",
            Decision::Contain => "CONTAIN",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            Decision::Allow => 0,
            Decision::Defer => 1,
            Decision::Contain => 2,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CONFIG
// ============================================================================

/// Governance thresholds, supplied per decision call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GovernanceConfig {
    /// Anomaly threshold
    pub theta_a: f64,
    /// Impact threshold
    #[serde(rename = "theta_I")]
    pub theta_i: f64,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            theta_a: DEFAULT_THETA_A,
            theta_i: DEFAULT_THETA_I,
        }
    }
}

impl GovernanceConfig {
    pub fn new(theta_a: f64, theta_i: f64) -> Self {
        Self { theta_a, theta_i }
    }
}

// ============================================================================
// INPUT
// ============================================================================

/// Single device event. Signals are expected in [0, 1] but not trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceEvent {
    pub device_id: String,
    /// a
    pub anomaly_score: f64,
    /// T(s)
    pub trust_weight: f64,
    /// C(s)
    pub centrality: f64,
}

impl DeviceEvent {
    pub fn new(
        device_id: impl Into<String>,
        anomaly_score: f64,
        trust_weight: f64,
        centrality: f64,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            anomaly_score,
            trust_weight,
            centrality,
        }
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Audit payload attached to every rule-based decision.
///
/// Carries the clamped inputs and the thresholds actually applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditDetails {
    pub device_id: String,
    #[serde(rename = "a")]
    pub anomaly_score: f64,
    #[serde(rename = "T")]
    pub trust_weight: f64,
    #[serde(rename = "C")]
    pub centrality: f64,
    pub theta_a: f64,
    #[serde(rename = "theta_I")]
    pub theta_i: f64,
}

/// Decision output with audit-friendly explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernanceDecision {
    pub decision: Decision,
    pub impact: f64,
    pub reason: String,
    pub details: AuditDetails,
}
