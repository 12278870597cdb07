//! Model Module - Learned Scoring Capability
//!
//! Optional alternative to the rule-based decision. The model is resolved
//! once at startup into a `LearnedModel` slot; a failed load becomes
//! `Unavailable` instead of an error.
//!
//! ## Structure
//! - `features`: Feature vector built from clamped event signals
//! - `scorer`: `Scorer` trait + learned decision types
//! - `logistic`: Logistic model loaded from a JSON model file
//! - `loader`: Resolve-once model slot (Available / Unavailable)
//! - `error`: Load errors

pub mod error;
pub mod features;
pub mod scorer;
pub mod logistic;
pub mod loader;

// Re-export common types
pub use error::ModelError;
pub use features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use scorer::{LearnedClass, LearnedDecision, ModelInfo, Scorer};
pub use logistic::{LogisticModel, ModelFile};
pub use loader::LearnedModel;
