//! Decision Reasons
//!
//! One fixed reason per branch. Constants only, no logic.

/// Anomaly score at or below theta_a
pub const REASON_ALLOW: &str = "benign (below anomaly threshold)";

/// Anomalous, impact strictly below theta_I
pub const REASON_DEFER: &str = "anomalous but below impact threshold";

/// Anomalous, impact at or above theta_I
pub const REASON_CONTAIN: &str = "impact exceeds governance threshold";
