//! Decision request model

use serde::Deserialize;
use validator::Validate;

use hcm_core::{DeviceEvent, GovernanceConfig};

use crate::AppError;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DecisionRequest {
    #[validate(length(min = 1, message = "device_id must not be empty"))]
    pub device_id: String,

    #[validate(range(min = 0.0, max = 1.0))]
    pub anomaly_score: f64,

    #[validate(range(min = 0.0, max = 1.0))]
    pub trust_weight: f64,

    #[validate(range(min = 0.0, max = 1.0))]
    pub centrality: f64,

    #[validate(range(min = 0.0, max = 1.0))]
    pub theta_a: Option<f64>,

    #[serde(rename = "theta_I", alias = "theta_i")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub theta_i: Option<f64>,

    /// "rule" (default) or "learned"
    pub mode: Option<String>,
}

impl DecisionRequest {
    /// NaN slips through range checks, so reject non-finite values explicitly
    pub fn ensure_finite(&self) -> Result<(), AppError> {
        let fields = [
            ("anomaly_score", Some(self.anomaly_score)),
            ("trust_weight", Some(self.trust_weight)),
            ("centrality", Some(self.centrality)),
            ("theta_a", self.theta_a),
            ("theta_I", self.theta_i),
        ];

        for (name, value) in fields {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(AppError::ValidationError(format!(
                        "{} must be a finite number",
                        name
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn event(&self) -> DeviceEvent {
        DeviceEvent::new(
            self.device_id.clone(),
            self.anomaly_score,
            self.trust_weight,
            self.centrality,
        )
    }

    /// Request thresholds, falling back to server defaults per field
    pub fn governance(&self, defaults: &GovernanceConfig) -> GovernanceConfig {
        GovernanceConfig::new(
            self.theta_a.unwrap_or(defaults.theta_a),
            self.theta_i.unwrap_or(defaults.theta_i),
        )
    }
}
