//! HCM Engine Core
//!
//! Governance containment decisions for smart-home device events.
//!
//! ## Structure
//! - `logic::impact` - Clamp and impact calculation (I = a * T * C)
//! - `logic::decision` - Rule-based governance decision (ALLOW / DEFER / CONTAIN)
//! - `logic::model` - Pluggable learned scorer + resolve-once model slot
//! - `logic::policy` - Policy selector (rule vs learned, with fallback)
//!
//! ## Usage
//! ```
//! use hcm_core::{decide, Decision, DeviceEvent, GovernanceConfig};
//!
//! let event = DeviceEvent::new("camera", 0.9, 0.9, 0.6);
//! let out = decide(&event, &GovernanceConfig::default());
//! assert_eq!(out.decision, Decision::Contain);
//! ```

pub mod constants;
pub mod logic;

// Re-export main types for convenience
pub use logic::impact::{clamp01, compute_impact};

pub use logic::decision::{
    decide,
    decide_default,
    AuditDetails,
    Decision,
    DeviceEvent,
    GovernanceConfig,
    GovernanceDecision,
};

pub use logic::model::{
    FeatureVector,
    LearnedClass,
    LearnedDecision,
    LearnedModel,
    LogisticModel,
    ModelError,
    ModelInfo,
    Scorer,
};

pub use logic::policy::{PolicyMode, PolicyOutcome, PolicySelector, SelectorStatus};
