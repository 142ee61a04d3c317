//! Edge projection: apply a rule to every raw edge and deduplicate the
//! surviving label pairs into a `ProjectedGraph`.

use tracing::debug;

use strata_core::types::collections::FxHashMap;
use strata_core::types::{ProjectedEdge, ProjectedGraph, RawEdge};

use super::rules::ProjectionRule;

/// Project raw edges into a deduplicated label-level graph.
///
/// Edges the rule drops are discarded silently. The first occurrence of
/// a label pair creates its `ProjectedEdge`; later occurrences append
/// their raw edge to `cumulated_edges`. Output order is first-occurrence
/// order, `cumulated_edges` order is input order.
pub fn project(edges: &[RawEdge], rule: &dyn ProjectionRule) -> ProjectedGraph {
    let mut projected: ProjectedGraph = Vec::new();
    // (source_label, target_label) → slot in `projected`.
    let mut slots: FxHashMap<(String, String), usize> = FxHashMap::default();

    for edge in edges {
        let Some(labels) = rule.project(edge) else {
            continue;
        };
        let key = (labels.source, labels.target);
        match slots.get(&key) {
            Some(&slot) => projected[slot].cumulated_edges.push(edge.clone()),
            None => {
                slots.insert(key.clone(), projected.len());
                projected.push(ProjectedEdge {
                    source_label: key.0,
                    target_label: key.1,
                    cumulated_edges: vec![edge.clone()],
                });
            }
        }
    }

    debug!(
        raw = edges.len(),
        projected = projected.len(),
        "projected raw edges"
    );
    projected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::rules::{InternalOnly, KeepAll};

    fn edge(source: &str, target: &str) -> RawEdge {
        RawEdge::internal(source, target)
    }

    #[test]
    fn test_duplicate_pairs_cumulate_in_input_order() {
        let edges = vec![edge("a", "b"), edge("c", "d"), edge("a", "b")];
        let graph = project(&edges, &KeepAll);

        assert_eq!(graph.len(), 2);
        assert_eq!(graph[0].source_label, "a");
        assert_eq!(graph[0].target_label, "b");
        assert_eq!(graph[0].cumulated_edges, vec![edge("a", "b"), edge("a", "b")]);
        assert_eq!(graph[1].cumulated_edges, vec![edge("c", "d")]);
    }

    #[test]
    fn test_dropped_edges_leave_no_trace() {
        let mut external = edge("a", "lib");
        external.external = true;
        let edges = vec![external, edge("a", "a"), edge("a", "b")];
        let graph = project(&edges, &InternalOnly);

        assert_eq!(graph.len(), 1);
        assert_eq!(graph[0].source_label, "a");
        assert_eq!(graph[0].target_label, "b");
    }

    #[test]
    fn test_empty_input_yields_empty_graph() {
        assert!(project(&[], &KeepAll).is_empty());
    }

    #[test]
    fn test_output_order_is_first_occurrence_order() {
        let edges = vec![edge("b", "c"), edge("a", "b"), edge("b", "c")];
        let graph = project(&edges, &KeepAll);
        let pairs: Vec<(&str, &str)> = graph
            .iter()
            .map(|e| (e.source_label.as_str(), e.target_label.as_str()))
            .collect();
        assert_eq!(pairs, vec![("b", "c"), ("a", "b")]);
    }
}
