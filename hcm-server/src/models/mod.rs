//! Request models

pub mod decision;

pub use decision::*;
