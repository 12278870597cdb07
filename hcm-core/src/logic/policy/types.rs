//! Policy Types

use serde::{Deserialize, Serialize};

use crate::constants::LEARNED_MODE_FLAG;
use crate::logic::decision::{Decision, GovernanceDecision};
use crate::logic::model::{LearnedDecision, ModelInfo};

// ============================================================================
// POLICY MODE
// ============================================================================

/// Caller-chosen decision source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyMode {
    #[default]
    Rule,
    Learned,
}

impl PolicyMode {
    /// Only the exact flag "learned" selects the learned path
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some(LEARNED_MODE_FLAG) => PolicyMode::Learned,
            _ => PolicyMode::Rule,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyMode::Rule => "rule",
            PolicyMode::Learned => "learned",
        }
    }
}

impl std::fmt::Display for PolicyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Decision record from whichever path served the call.
///
/// Untagged so each variant keeps its own flat shape on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PolicyOutcome {
    Rule(GovernanceDecision),
    Learned(LearnedDecision),
}

impl PolicyOutcome {
    pub fn decision(&self) -> Decision {
        match self {
            PolicyOutcome::Rule(out) => out.decision,
            PolicyOutcome::Learned(out) => out.decision.into(),
        }
    }

    /// Path that actually produced the record
    pub fn policy(&self) -> PolicyMode {
        match self {
            PolicyOutcome::Rule(_) => PolicyMode::Rule,
            PolicyOutcome::Learned(_) => PolicyMode::Learned,
        }
    }
}

// ============================================================================
// STATUS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorStatus {
    pub default_mode: PolicyMode,
    pub learned_available: bool,
    pub model: Option<ModelInfo>,
    pub fallback_reason: Option<String>,
}
