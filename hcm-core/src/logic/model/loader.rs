//! Learned Model Slot
//!
//! Resolved once at startup. Load failures are captured as `Unavailable`
//! and never propagated; callers check presence, not error state.

use std::path::Path;
use std::sync::Arc;

use super::logistic::LogisticModel;
use super::scorer::{ModelInfo, Scorer};

const NO_MODEL_CONFIGURED: &str = "no model configured";

#[derive(Clone)]
pub enum LearnedModel {
    Available(Arc<dyn Scorer>),
    Unavailable { reason: String },
}

impl LearnedModel {
    /// Load the logistic model at `path`, swallowing any failure.
    ///
    /// `cutoff_override` replaces the threshold stored in the model file.
    pub fn load(path: Option<&Path>, cutoff_override: Option<f64>) -> Self {
        let Some(path) = path else {
            log::info!("No learned model configured, learned mode will use rule-based policy");
            return Self::unavailable(NO_MODEL_CONFIGURED);
        };

        let loaded = LogisticModel::from_file(path).and_then(|model| match cutoff_override {
            Some(cutoff) => model.with_cutoff(cutoff),
            None => Ok(model),
        });

        match loaded {
            Ok(model) => {
                let info = model.describe();
                log::info!(
                    "Learned model '{}' loaded from {} (cutoff {:.2})",
                    info.name, info.source, info.cutoff
                );
                Self::available(model)
            }
            Err(e) => {
                log::warn!("Learned model unavailable ({}), falling back to rule-based policy", e);
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn available<S: Scorer + 'static>(scorer: S) -> Self {
        LearnedModel::Available(Arc::new(scorer))
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        LearnedModel::Unavailable { reason: reason.into() }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, LearnedModel::Available(_))
    }

    pub fn scorer(&self) -> Option<&dyn Scorer> {
        match self {
            LearnedModel::Available(scorer) => Some(scorer.as_ref()),
            LearnedModel::Unavailable { .. } => None,
        }
    }

    pub fn info(&self) -> Option<ModelInfo> {
        self.scorer().map(|s| s.describe())
    }

    pub fn unavailable_reason(&self) -> Option<&str> {
        match self {
            LearnedModel::Available(_) => None,
            LearnedModel::Unavailable { reason } => Some(reason.as_str()),
        }
    }
}

impl Default for LearnedModel {
    fn default() -> Self {
        Self::unavailable(NO_MODEL_CONFIGURED)
    }
}

impl std::fmt::Debug for LearnedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LearnedModel::Available(scorer) => f
                .debug_tuple("Available")
                .field(&scorer.describe().name)
                .finish(),
            LearnedModel::Unavailable { reason } => f
                .debug_struct("Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}
