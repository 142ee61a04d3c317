//! Label indexing: bidirectional mapping between string labels and dense
//! vertex ids, scoped to one computation.
//!
//! A fresh `LabelIndexer` is built per pipeline call and dropped with
//! it; no interning state ever survives across independent invocations.

use lasso::{Key, Rodeo, Spur};

use strata_core::errors::GraphError;
use strata_core::types::collections::FxHashMap;
use strata_core::types::{ProjectedCycle, ProjectedEdge};

use super::types::{IntEdge, VertexId};

/// Per-computation index over one projected graph.
///
/// Walks the projected edges in order, interning each label on first
/// sighting (ids 0, 1, 2, …) and recording an O(1) lookup from each id
/// pair back to its `ProjectedEdge` for reverse translation.
pub struct LabelIndexer<'g> {
    graph: &'g [ProjectedEdge],
    rodeo: Rodeo,
    edges: Vec<IntEdge>,
    /// (from, to) → slot of the owning edge in `graph`.
    pairs: FxHashMap<(VertexId, VertexId), usize>,
}

impl<'g> LabelIndexer<'g> {
    /// Index a projected graph. Deterministic given input order.
    pub fn index(graph: &'g [ProjectedEdge]) -> Self {
        let mut rodeo = Rodeo::default();
        let mut edges = Vec::with_capacity(graph.len());
        let mut pairs = FxHashMap::default();

        for (slot, projected) in graph.iter().enumerate() {
            let from = rodeo.get_or_intern(&projected.source_label).into_usize();
            let to = rodeo.get_or_intern(&projected.target_label).into_usize();
            edges.push(IntEdge::new(from, to));
            pairs.insert((from, to), slot);
        }

        Self {
            graph,
            rodeo,
            edges,
            pairs,
        }
    }

    /// The integer edges, in projected-edge order.
    pub fn int_edges(&self) -> &[IntEdge] {
        &self.edges
    }

    /// Number of distinct labels indexed.
    pub fn vertex_count(&self) -> usize {
        self.rodeo.len()
    }

    /// Resolve a vertex id back to its label.
    ///
    /// An unknown id is an internal invariant violation: every id handed
    /// to this indexer originated from its own interning pass.
    pub fn label_of(&self, id: VertexId) -> Result<&str, GraphError> {
        Spur::try_from_usize(id)
            .and_then(|spur| self.rodeo.try_resolve(&spur))
            .ok_or(GraphError::UnresolvedVertex { id })
    }

    /// Resolve an integer edge back to its `ProjectedEdge`.
    pub fn projected_edge(&self, edge: IntEdge) -> Result<&'g ProjectedEdge, GraphError> {
        match self.pairs.get(&(edge.from, edge.to)) {
            Some(&slot) => Ok(&self.graph[slot]),
            None => Err(GraphError::MissingProjectedEdge {
                source_label: self.label_of(edge.from)?.to_string(),
                target_label: self.label_of(edge.to)?.to_string(),
            }),
        }
    }

    /// Translate an integer cycle into its projected-edge form.
    pub fn translate_cycle(&self, cycle: &[IntEdge]) -> Result<ProjectedCycle, GraphError> {
        cycle
            .iter()
            .map(|&edge| self.projected_edge(edge).cloned())
            .collect()
    }
}
