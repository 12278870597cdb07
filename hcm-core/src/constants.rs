//! Central Configuration Constants
//!
//! Single source of truth for governance defaults.

/// Default anomaly threshold (theta_a)
pub const DEFAULT_THETA_A: f64 = 0.5;

/// Default impact threshold (theta_I)
pub const DEFAULT_THETA_I: f64 = 0.3;

/// Default probability cutoff for the learned path
pub const DEFAULT_LEARNED_CUTOFF: f64 = 0.5;

/// Policy tag carried by learned decisions
pub const LEARNED_POLICY_TAG: &str = "learned";

/// Mode flag that selects the learned path. Anything else means "rule".
pub const LEARNED_MODE_FLAG: &str = "learned";
