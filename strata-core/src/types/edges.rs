//! Dependency edge types: the input and output boundaries of the engine.
//!
//! `RawEdge` is what the extraction front end hands us; `ProjectedEdge`
//! and `ProjectedCycle` are what the reporting layer consumes. All of
//! them serialize so a consumer can render every underlying import.

use serde::{Deserialize, Serialize};

use super::collections::SmallVec2;

/// The syntactic kind of an import. Multiple kinds may apply to one edge
/// (e.g. a statement importing both a type and a value binding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    Default,
    Named,
    Namespace,
    Type,
    Value,
}

/// One resolved import statement: a directed file-level dependency.
///
/// The extractor owns specifier resolution and tags `external`. A
/// synthetic self-edge (`source == target`) keeps otherwise-unreferenced
/// files visible upstream; the standard projection rules strip those
/// before cycle detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEdge {
    /// Resolved path of the importing file.
    pub source: String,
    /// Resolved path of the imported file.
    pub target: String,
    /// True if the target resolves outside the analyzed project.
    pub external: bool,
    /// Import kinds observed on this statement.
    #[serde(default)]
    pub import_kinds: SmallVec2<ImportKind>,
}

impl RawEdge {
    /// Convenience constructor for an internal edge with no recorded kinds.
    pub fn internal(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            external: false,
            import_kinds: SmallVec2::new(),
        }
    }
}

/// One edge of the label-level graph produced by projection.
///
/// Invariant: within one `ProjectedGraph` the `(source_label,
/// target_label)` pair is unique, and `cumulated_edges` is the non-empty,
/// input-ordered list of raw edges that collapsed into this pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedEdge {
    pub source_label: String,
    pub target_label: String,
    /// Every raw edge that mapped to this label pair, kept for reporting.
    pub cumulated_edges: Vec<RawEdge>,
}

/// A deduplicated label-level graph: no two edges share a label pair.
pub type ProjectedGraph = Vec<ProjectedEdge>;

/// One elementary cycle, as an ordered edge sequence: each edge's target
/// label equals the next edge's source label, and the last edge closes
/// back to the first edge's source. No intermediate label repeats.
pub type ProjectedCycle = Vec<ProjectedEdge>;

/// All elementary cycles found in one analysis.
pub type ProjectedCycles = Vec<ProjectedCycle>;
