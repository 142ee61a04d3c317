//! Graph projection: collapsing raw file-level edges into a smaller
//! labeled graph according to a grouping rule.

pub mod projector;
pub mod rules;

pub use projector::project;
pub use rules::{FileSuffix, InternalOnly, KeepAll, LabelPair, ProjectionRule, SlicePattern};
