//! # strata-analysis
//!
//! The Strata conformance core: collapses a raw file-level dependency
//! graph into a labeled graph via a grouping rule, then exhaustively
//! enumerates every elementary cycle, partitioned by strongly connected
//! component.
//!
//! Pipeline: raw edges → projection → label indexing → Tarjan SCC →
//! Johnson circuit enumeration → reverse translation to labeled cycles.

pub mod graph;
pub mod projection;

pub use graph::orchestrator::{
    cycles_from_projected_graph, cycles_from_raw_edges, cycles_from_raw_edges_with_rule,
};
pub use projection::projector::project;
pub use projection::rules::{
    rule_from_config, FileSuffix, InternalOnly, KeepAll, LabelPair, ProjectionRule, SlicePattern,
};
