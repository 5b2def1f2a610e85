//! Rule evaluation engine for the eligibility questionnaire.
//!
//! Answers are turned into typed variables by the declared mapping, each
//! rule's two-level AND/OR expression is evaluated over them, and the
//! runner resolves output messages and the locator flag. Every entry point
//! is a pure function of its explicit inputs: no I/O, no shared state, no
//! mutation of the config.

pub mod eval;
pub mod runner;
pub mod variables;

pub use eval::{evaluate_condition, evaluate_eligibility, evaluate_group};
pub use runner::{DEFAULT_MESSAGE_BODY, DEFAULT_MESSAGE_TITLE, run_assessment};
pub use variables::build_variables;
