//! CLI library components for the eligibility assessment toolkit.

pub mod harness;
pub mod logging;
