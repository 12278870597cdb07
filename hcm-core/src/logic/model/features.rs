//! Feature Vector
//!
//! The three governance signals, clamped, in a fixed order.

use serde::{Deserialize, Serialize};

use crate::logic::decision::DeviceEvent;
use crate::logic::impact::clamp01;

/// Number of features consumed by learned scorers
pub const FEATURE_COUNT: usize = 3;

/// Canonical feature order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = ["anomaly_score", "trust_weight", "centrality"];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub anomaly_score: f64,
    pub trust_weight: f64,
    pub centrality: f64,
}

impl FeatureVector {
    /// Build from raw signals. Every value is clamped to [0, 1].
    pub fn new(anomaly_score: f64, trust_weight: f64, centrality: f64) -> Self {
        Self {
            anomaly_score: clamp01(anomaly_score),
            trust_weight: clamp01(trust_weight),
            centrality: clamp01(centrality),
        }
    }

    pub fn from_event(event: &DeviceEvent) -> Self {
        Self::new(event.anomaly_score, event.trust_weight, event.centrality)
    }

    /// Values in `FEATURE_NAMES` order
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [self.anomaly_score, self.trust_weight, self.centrality]
    }

    /// Lookup by feature name
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.as_array()[i])
    }
}

impl From<&DeviceEvent> for FeatureVector {
    fn from(event: &DeviceEvent) -> Self {
        Self::from_event(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_event_clamps() {
        let event = DeviceEvent::new("plug", 1.5, -0.2, 0.5);
        let fv = FeatureVector::from_event(&event);
        assert_eq!(fv.as_array(), [1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_get_by_name() {
        let fv = FeatureVector::new(0.1, 0.2, 0.3);
        assert_eq!(fv.get("anomaly_score"), Some(0.1));
        assert_eq!(fv.get("trust_weight"), Some(0.2));
        assert_eq!(fv.get("centrality"), Some(0.3));
        assert_eq!(fv.get("entropy"), None);
    }
}
