//! Internal graph invariant violations.
//!
//! These indicate a bug in indexing or translation logic, not bad input.
//! They are fatal: never retried, never swallowed, never reported as an
//! analysis result. Empty or disconnected input is NOT an error; it
//! yields an empty cycle list.

use super::error_code::{self, StrataErrorCode};

/// Invariant violations in the integer-graph layer.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("vertex id {id} has no indexed label")]
    UnresolvedVertex { id: usize },

    #[error("no projected edge recorded for label pair '{source_label}' -> '{target_label}'")]
    MissingProjectedEdge { source_label: String, target_label: String },
}

impl StrataErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        error_code::INVARIANT_VIOLATION
    }
}
