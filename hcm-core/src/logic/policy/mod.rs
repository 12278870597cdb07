//! Policy Module
//!
//! Routes a device event to the rule-based decision or the learned scorer.
//! The rule path is always available; the learned path degrades to it.
//!
//! ## Structure
//! - `types`: PolicyMode, PolicyOutcome, SelectorStatus
//! - `selector`: Routing + fallback
//!
//! ## Usage
//! ```
//! use hcm_core::{DeviceEvent, GovernanceConfig, LearnedModel, PolicyMode, PolicySelector};
//!
//! let selector = PolicySelector::new(LearnedModel::load(None, None));
//! let event = DeviceEvent::new("camera", 0.2, 0.9, 0.9);
//! let outcome = selector.select(PolicyMode::Learned, &event, &GovernanceConfig::default());
//! assert_eq!(outcome.policy(), PolicyMode::Rule);
//! ```

pub mod types;
pub mod selector;

pub use types::{PolicyMode, PolicyOutcome, SelectorStatus};
pub use selector::PolicySelector;
