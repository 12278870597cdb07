//! Policy Selector
//!
//! Input: PolicyMode + DeviceEvent + GovernanceConfig
//! Output: PolicyOutcome
//!
//! Holds the learned model slot resolved at startup. Immutable afterwards,
//! so one selector can be shared across threads without locking.

use super::types::{PolicyMode, PolicyOutcome, SelectorStatus};
use crate::logic::decision::{decide, DeviceEvent, GovernanceConfig};
use crate::logic::model::{FeatureVector, LearnedModel};

#[derive(Debug, Clone, Default)]
pub struct PolicySelector {
    learned: LearnedModel,
}

impl PolicySelector {
    pub fn new(learned: LearnedModel) -> Self {
        Self { learned }
    }

    /// Selector without a learned model; every call takes the rule path
    pub fn rule_only() -> Self {
        Self::default()
    }

    /// Route one event.
    ///
    /// Learned mode without an available model falls back to the rule path
    /// with the same thresholds. Never fails.
    pub fn select(
        &self,
        mode: PolicyMode,
        event: &DeviceEvent,
        config: &GovernanceConfig,
    ) -> PolicyOutcome {
        match (mode, &self.learned) {
            (PolicyMode::Learned, LearnedModel::Available(scorer)) => {
                let features = FeatureVector::from_event(event);
                let out = scorer.decide(&features);
                log::debug!(
                    "device={} learned p={:.3} -> {}",
                    event.device_id, out.confidence, out.decision
                );
                PolicyOutcome::Learned(out)
            }
            (PolicyMode::Learned, LearnedModel::Unavailable { .. }) => {
                log::debug!(
                    "device={} learned model unavailable, using rule policy",
                    event.device_id
                );
                PolicyOutcome::Rule(decide(event, config))
            }
            (PolicyMode::Rule, _) => PolicyOutcome::Rule(decide(event, config)),
        }
    }

    /// Route using a raw mode flag (see `PolicyMode::from_flag`)
    pub fn select_flag(
        &self,
        flag: Option<&str>,
        event: &DeviceEvent,
        config: &GovernanceConfig,
    ) -> PolicyOutcome {
        self.select(PolicyMode::from_flag(flag), event, config)
    }

    pub fn status(&self) -> SelectorStatus {
        SelectorStatus {
            default_mode: PolicyMode::default(),
            learned_available: self.learned.is_available(),
            model: self.learned.info(),
            fallback_reason: self.learned.unavailable_reason().map(str::to_string),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
