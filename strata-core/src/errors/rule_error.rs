//! Projection rule configuration errors.
//!
//! Raised at rule-construction time, before any edge is processed.
//! These are caller mistakes, distinct from analysis results.

use super::error_code::{self, StrataErrorCode};

/// Errors constructing a projection rule.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("slice pattern '{pattern}' must contain exactly one (**) marker, found {markers}")]
    MalformedSlicePattern { pattern: String, markers: usize },

    #[error("projection mode '{mode}' requires a pattern")]
    MissingSlicePattern { mode: String },

    #[error("file-suffix rule requires a non-empty labeling table")]
    EmptyLabelingTable,
}

impl StrataErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        error_code::RULE_ERROR
    }
}
