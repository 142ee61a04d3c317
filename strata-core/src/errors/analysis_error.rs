//! Top-level analysis errors.

use super::error_code::StrataErrorCode;
use super::{GraphError, RuleError};

/// Errors that can surface from a cycle-analysis run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("Graph invariant violation: {0}")]
    Graph(#[from] GraphError),
}

impl StrataErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Rule(e) => e.error_code(),
            Self::Graph(e) => e.error_code(),
        }
    }
}
