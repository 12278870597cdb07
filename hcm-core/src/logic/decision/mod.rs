//! Decision Module
//!
//! Rule-based governance decision over the HCM impact scalar.
//!
//! ## Structure
//! - `types`: Core types (Decision, DeviceEvent, GovernanceConfig, GovernanceDecision)
//! - `rules`: Branch reasons
//! - `engine`: Decision logic
//!
//! ## Usage
//! ```
//! use hcm_core::logic::decision::{decide, Decision, DeviceEvent, GovernanceConfig};
//!
//! let event = DeviceEvent::new("sensor", 0.9, 0.2, 0.1);
//! let out = decide(&event, &GovernanceConfig::default());
//! match out.decision {
//!     Decision::Allow => println!("benign"),
//!     Decision::Defer => println!("watch"),
//!     Decision::Contain => println!("isolate"),
//! }
//! ```

pub mod types;
pub mod rules;
pub mod engine;


// Re-export main types for convenience
pub use types::{
    AuditDetails,
    Decision,
    DeviceEvent,
    GovernanceConfig,
    GovernanceDecision,
};

pub use rules::{REASON_ALLOW, REASON_CONTAIN, REASON_DEFER};

pub use engine::{decide, decide_default};
