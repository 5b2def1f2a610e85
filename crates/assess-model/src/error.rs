use thiserror::Error;

/// Evaluation failures.
///
/// Both variants indicate a malformed config enum: they abort the current
/// run and propagate to the caller with the offending symbol. Missing
/// messages are deliberately not in this taxonomy (the runner substitutes a
/// fixed default instead).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),
    #[error("Unsupported logic: {0}")]
    UnsupportedLogic(String),
}

pub type Result<T> = std::result::Result<T, EvalError>;
