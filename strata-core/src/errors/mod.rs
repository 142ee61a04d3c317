//! Error handling for Strata.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod error_code;
pub mod graph_error;
pub mod rule_error;

pub use analysis_error::AnalysisError;
pub use error_code::StrataErrorCode;
pub use graph_error::GraphError;
pub use rule_error::RuleError;
