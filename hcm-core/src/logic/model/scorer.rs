//! Scorer trait and learned decision types
//!
//! A learned scorer only distinguishes two classes: its probability is
//! thresholded into CONTAIN or DEFER. It never emits ALLOW.

use serde::{Deserialize, Serialize};

use super::features::FeatureVector;
use crate::constants::{DEFAULT_LEARNED_CUTOFF, LEARNED_POLICY_TAG};
use crate::logic::decision::Decision;
use crate::logic::impact::clamp01;

// ============================================================================
// LEARNED DECISION
// ============================================================================

/// Decision classes a learned scorer can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LearnedClass {
    Contain,
    Defer,
}

impl LearnedClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearnedClass::Contain => "CONTAIN",
            LearnedClass::Defer => "DEFER",
        }
    }
}

impl From<LearnedClass> for Decision {
    fn from(class: LearnedClass) -> Self {
        match class {
            LearnedClass::Contain => Decision::Contain,
            LearnedClass::Defer => Decision::Defer,
        }
    }
}

impl std::fmt::Display for LearnedClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output of the learned path: `{decision, confidence, policy: "learned"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnedDecision {
    pub decision: LearnedClass,
    /// Predicted probability of the CONTAIN class (0.0 - 1.0)
    pub confidence: f64,
    pub policy: String,
}

impl LearnedDecision {
    pub fn new(decision: LearnedClass, confidence: f64) -> Self {
        Self {
            decision,
            confidence,
            policy: LEARNED_POLICY_TAG.to_string(),
        }
    }
}

// ============================================================================
// MODEL INFO
// ============================================================================

/// Model metadata, reported by the policy status endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub model_type: String,
    /// File path, or "<memory>"
    pub source: String,
    pub features: Vec<String>,
    pub cutoff: f64,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

// ============================================================================
// SCORER TRAIT
// ============================================================================

/// Pluggable learned scorer (logistic, tree ensemble, remote, ...)
pub trait Scorer: Send + Sync {
    fn describe(&self) -> ModelInfo;

    /// Probability-like score for the CONTAIN class
    fn probability(&self, features: &FeatureVector) -> f64;

    fn cutoff(&self) -> f64 {
        DEFAULT_LEARNED_CUTOFF
    }

    /// CONTAIN when probability >= cutoff, DEFER otherwise
    fn decide(&self, features: &FeatureVector) -> LearnedDecision {
        let confidence = clamp01(self.probability(features));
        let class = if confidence >= self.cutoff() {
            LearnedClass::Contain
        } else {
            LearnedClass::Defer
        };
        LearnedDecision::new(class, confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl Scorer for Fixed {
        fn describe(&self) -> ModelInfo {
            ModelInfo {
                name: "fixed".to_string(),
                model_type: "constant".to_string(),
                source: "<memory>".to_string(),
                features: vec![],
                cutoff: self.cutoff(),
                loaded_at: chrono::Utc::now(),
            }
        }

        fn probability(&self, _features: &FeatureVector) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_default_cutoff_splits_classes() {
        let fv = FeatureVector::new(0.0, 0.0, 0.0);
        assert_eq!(Fixed(0.49).decide(&fv).decision, LearnedClass::Defer);
        assert_eq!(Fixed(0.5).decide(&fv).decision, LearnedClass::Contain);
        assert_eq!(Fixed(0.99).decide(&fv).decision, LearnedClass::Contain);
    }

    #[test]
    fn test_confidence_is_clamped() {
        let fv = FeatureVector::new(0.0, 0.0, 0.0);
        assert_eq!(Fixed(1.7).decide(&fv).confidence, 1.0);
        assert_eq!(Fixed(f64::NAN).decide(&fv).confidence, 0.0);
    }

    #[test]
    fn test_learned_decision_shape() {
        let value = serde_json::to_value(LearnedDecision::new(LearnedClass::Contain, 0.8)).unwrap();
        assert_eq!(value["decision"], "CONTAIN");
        assert_eq!(value["confidence"], 0.8);
        assert_eq!(value["policy"], "learned");
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_learned_class_maps_to_decision() {
        assert_eq!(Decision::from(LearnedClass::Contain), Decision::Contain);
        assert_eq!(Decision::from(LearnedClass::Defer), Decision::Defer);
    }
}
