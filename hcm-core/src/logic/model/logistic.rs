//! Logistic Model
//!
//! `p = sigmoid(bias + sum(w_i * x_i))` over the clamped feature vector.
//!
//! Model file (JSON):
//! ```json
//! {
//!   "name": "hcm-logreg-v1",
//!   "features": ["anomaly_score", "trust_weight", "centrality"],
//!   "weights": [4.0, 2.5, 3.0],
//!   "bias": -5.0,
//!   "threshold": 0.5
//! }
//! ```
//! Features may be listed in any order; weights follow that order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ModelError;
use super::features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
use super::scorer::{ModelInfo, Scorer};
use crate::constants::DEFAULT_LEARNED_CUTOFF;

const MODEL_TYPE: &str = "logistic";

fn default_name() -> String {
    "unnamed".to_string()
}

fn default_threshold() -> f64 {
    DEFAULT_LEARNED_CUTOFF
}

/// On-disk model description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    #[serde(default = "default_name")]
    pub name: String,
    pub features: Vec<String>,
    pub weights: Vec<f64>,
    pub bias: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

/// Validated logistic model, weights stored in `FEATURE_NAMES` order
#[derive(Debug, Clone)]
pub struct LogisticModel {
    name: String,
    source: String,
    weights: [f64; FEATURE_COUNT],
    bias: f64,
    cutoff: f64,
    loaded_at: chrono::DateTime<chrono::Utc>,
}

impl LogisticModel {
    /// Validate a parsed model file and reorder its weights into canonical feature order
    pub fn from_model_file(doc: ModelFile, source: &str) -> Result<Self, ModelError> {
        if doc.features.len() != FEATURE_COUNT {
            return Err(ModelError::Features(format!(
                "expected {} features, got {}",
                FEATURE_COUNT,
                doc.features.len()
            )));
        }
        if doc.weights.len() != doc.features.len() {
            return Err(ModelError::Weights(format!(
                "{} weights for {} features",
                doc.weights.len(),
                doc.features.len()
            )));
        }
        if !doc.bias.is_finite() || doc.weights.iter().any(|w| !w.is_finite()) {
            return Err(ModelError::Weights("non-finite coefficient".to_string()));
        }
        validate_cutoff(doc.threshold)?;

        let mut weights = [0.0f64; FEATURE_COUNT];
        let mut seen = [false; FEATURE_COUNT];
        for (feature, weight) in doc.features.iter().zip(doc.weights.iter()) {
            let idx = FEATURE_NAMES
                .iter()
                .position(|n| *n == feature.as_str())
                .ok_or_else(|| ModelError::Features(format!("unknown feature '{}'", feature)))?;
            if seen[idx] {
                return Err(ModelError::Features(format!("duplicate feature '{}'", feature)));
            }
            seen[idx] = true;
            weights[idx] = *weight;
        }

        Ok(Self {
            name: doc.name,
            source: source.to_string(),
            weights,
            bias: doc.bias,
            cutoff: doc.threshold,
            loaded_at: chrono::Utc::now(),
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let doc: ModelFile = serde_json::from_str(json)?;
        Self::from_model_file(doc, "<memory>")
    }

    /// Load a model from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let display = path.display().to_string();
        log::info!("Loading learned model from: {}", display);

        if !path.exists() {
            return Err(ModelError::NotFound(display));
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: display.clone(),
            source,
        })?;
        let doc: ModelFile = serde_json::from_str(&raw)?;
        Self::from_model_file(doc, &display)
    }

    /// Replace the file threshold with an operator-supplied cutoff
    pub fn with_cutoff(mut self, cutoff: f64) -> Result<Self, ModelError> {
        validate_cutoff(cutoff)?;
        self.cutoff = cutoff;
        Ok(self)
    }

    pub fn weights(&self) -> &[f64; FEATURE_COUNT] {
        &self.weights
    }
}

fn validate_cutoff(cutoff: f64) -> Result<(), ModelError> {
    if !(0.0..=1.0).contains(&cutoff) {
        return Err(ModelError::Cutoff(cutoff));
    }
    Ok(())
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl Scorer for LogisticModel {
    fn describe(&self) -> ModelInfo {
        ModelInfo {
            name: self.name.clone(),
            model_type: MODEL_TYPE.to_string(),
            source: self.source.clone(),
            features: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            cutoff: self.cutoff,
            loaded_at: self.loaded_at,
        }
    }

    fn probability(&self, features: &FeatureVector) -> f64 {
        let z = self.bias
            + features
                .as_array()
                .iter()
                .zip(self.weights.iter())
                .map(|(x, w)| x * w)
                .sum::<f64>();
        sigmoid(z)
    }

    fn cutoff(&self) -> f64 {
        self.cutoff
    }
}
