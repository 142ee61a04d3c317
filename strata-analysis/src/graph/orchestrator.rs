//! Cycle pipeline: projection → indexing → Tarjan → Johnson → reverse
//! translation.
//!
//! Every entry point builds its own indexer and working state; nothing
//! is shared or reused across calls, so independent call sites may run
//! concurrently without interference.

use tracing::{debug, info};

use strata_core::errors::{AnalysisError, GraphError};
use strata_core::types::{ProjectedCycles, ProjectedEdge, RawEdge};

use crate::projection::projector::project;
use crate::projection::rules::{InternalOnly, ProjectionRule};

use super::cycles::find_simple_cycles;
use super::indexer::LabelIndexer;
use super::scc::find_components;

/// Find every elementary dependency cycle in a raw edge list.
///
/// Projects with the standard internal-only rule (external edges and
/// synthetic self-edges dropped), then runs the full cycle pipeline.
/// Empty input yields an empty result, not an error.
pub fn cycles_from_raw_edges(edges: &[RawEdge]) -> Result<ProjectedCycles, AnalysisError> {
    cycles_from_raw_edges_with_rule(edges, &InternalOnly)
}

/// Find every elementary cycle in a raw edge list under a caller-chosen
/// grouping rule (slice patterns, suffix tables, or custom rules).
pub fn cycles_from_raw_edges_with_rule(
    edges: &[RawEdge],
    rule: &dyn ProjectionRule,
) -> Result<ProjectedCycles, AnalysisError> {
    let projected = project(edges, rule);
    Ok(enumerate_cycles(&projected)?)
}

/// Find every elementary cycle in an already-projected label graph,
/// e.g. a slice or module graph.
pub fn cycles_from_projected_graph(
    graph: &[ProjectedEdge],
) -> Result<ProjectedCycles, AnalysisError> {
    Ok(enumerate_cycles(graph)?)
}

/// Shared tail of both entry points: index, decompose, enumerate,
/// translate back to projected edges.
fn enumerate_cycles(graph: &[ProjectedEdge]) -> Result<ProjectedCycles, GraphError> {
    let indexer = LabelIndexer::index(graph);
    let components = find_components(indexer.int_edges());
    debug!(
        edges = graph.len(),
        vertices = indexer.vertex_count(),
        components = components.len(),
        "scc decomposition complete"
    );

    let mut cycles = ProjectedCycles::new();
    for component in &components {
        for cycle in find_simple_cycles(component) {
            cycles.push(indexer.translate_cycle(&cycle)?);
        }
    }

    info!(
        edges = graph.len(),
        components = components.len(),
        cycles = cycles.len(),
        "cycle analysis complete"
    );
    Ok(cycles)
}
