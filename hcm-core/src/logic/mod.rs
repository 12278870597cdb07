//! Logic Module - Governance Engines
//!
//! - `impact/` - Impact calculator (leaf, no dependencies)
//! - `decision/` - Rule-based governance decision function
//! - `model/` - Learned scoring capability (optional, loaded once)
//! - `policy/` - Policy selector routing between rule and learned paths

pub mod impact;
pub mod decision;
pub mod model;
pub mod policy;
