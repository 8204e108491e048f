//! Errors raised at the input boundary.
//!
//! The numeric core never fails: invalid arithmetic (division by zero, roots
//! and logarithms of negative operands) yields NaN or an infinity, which the
//! answer display prints as-is. Only malformed requirements are rejected.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequirementsError {
    #[error("at least one operation must be selected")]
    NoOperations,
    #[error("steps must be between 2 and 5 (got {0})")]
    StepsOutOfRange(u32),
    #[error("magnitude must be between 1 and 5 (got {0})")]
    MagnitudeOutOfRange(u32),
    #[error("significant figures must be between 1 and 3 (got {0})")]
    SignificantFiguresOutOfRange(u32),
    #[error("invalid requirements JSON: {0}")]
    Json(#[from] serde_json::Error),
}
