//! Strongly-connected-component decomposition (Tarjan).
//!
//! Single-pass DFS maintaining discovery index, low-link, and an
//! explicit vertex stack. The DFS itself runs on an explicit frame stack
//! rather than recursion: the input is a file-level graph in the worst
//! case, and deep import chains would otherwise exhaust the call stack.

use super::types::{Component, IntEdge, VertexId};

/// Sentinel for vertices not yet discovered.
const UNVISITED: usize = usize::MAX;

/// DFS frame: the vertex and its next unexplored neighbor position.
struct Frame {
    vertex: VertexId,
    neighbor: usize,
}

/// Partition a directed integer graph into its non-trivial strongly
/// connected components.
///
/// A component is reported only if it can contain a cycle: more than one
/// vertex, or a single vertex carrying a self-loop. Each reported
/// component is the induced edge list over its vertex set (every input
/// edge with both endpoints inside), in input-edge order. Roots are
/// visited in ascending vertex order, which fixes the emission order of
/// components but not their membership.
pub fn find_components(edges: &[IntEdge]) -> Vec<Component> {
    let Some(max_vertex) = edges.iter().map(|e| e.from.max(e.to)).max() else {
        return Vec::new();
    };
    let vertex_count = max_vertex + 1;

    // Adjacency in input-edge order.
    let mut adjacency: Vec<Vec<VertexId>> = vec![Vec::new(); vertex_count];
    for edge in edges {
        adjacency[edge.from].push(edge.to);
    }

    let mut discovery = vec![UNVISITED; vertex_count];
    let mut low_link = vec![0usize; vertex_count];
    let mut on_stack = vec![false; vertex_count];
    let mut stack: Vec<VertexId> = Vec::new();
    let mut counter = 0usize;

    // Vertex → ordinal of the component it landed in, in pop order.
    let mut component_of = vec![UNVISITED; vertex_count];
    let mut component_sizes: Vec<usize> = Vec::new();

    let mut frames: Vec<Frame> = Vec::new();
    for root in 0..vertex_count {
        if discovery[root] != UNVISITED {
            continue;
        }
        discovery[root] = counter;
        low_link[root] = counter;
        counter += 1;
        stack.push(root);
        on_stack[root] = true;
        frames.push(Frame {
            vertex: root,
            neighbor: 0,
        });

        while !frames.is_empty() {
            let (v, next) = {
                let top = frames.len() - 1;
                let frame = &mut frames[top];
                let next = adjacency[frame.vertex].get(frame.neighbor).copied();
                if next.is_some() {
                    frame.neighbor += 1;
                }
                (frame.vertex, next)
            };

            match next {
                Some(w) if discovery[w] == UNVISITED => {
                    discovery[w] = counter;
                    low_link[w] = counter;
                    counter += 1;
                    stack.push(w);
                    on_stack[w] = true;
                    frames.push(Frame {
                        vertex: w,
                        neighbor: 0,
                    });
                }
                Some(w) => {
                    if on_stack[w] {
                        low_link[v] = low_link[v].min(discovery[w]);
                    }
                }
                None => {
                    // v is fully explored: propagate its low-link upward
                    // and pop a component if v is a root.
                    frames.pop();
                    if let Some(parent) = frames.last() {
                        let p = parent.vertex;
                        low_link[p] = low_link[p].min(low_link[v]);
                    }
                    if low_link[v] == discovery[v] {
                        let ordinal = component_sizes.len();
                        let mut size = 0;
                        loop {
                            let w = stack.pop().unwrap_or(v);
                            on_stack[w] = false;
                            component_of[w] = ordinal;
                            size += 1;
                            if w == v {
                                break;
                            }
                        }
                        component_sizes.push(size);
                    }
                }
            }
        }
    }

    // Bucket the input edges into induced per-component lists. An edge
    // belongs to a component iff both endpoints do.
    let mut induced: Vec<Component> = vec![Vec::new(); component_sizes.len()];
    for edge in edges {
        let ordinal = component_of[edge.from];
        if ordinal == component_of[edge.to] {
            induced[ordinal].push(*edge);
        }
    }

    // Output policy: a cycle is only possible with more than one vertex,
    // or a single self-looping vertex.
    induced
        .into_iter()
        .zip(component_sizes)
        .filter(|(edges, size)| *size > 1 || edges.iter().any(|e| e.from == e.to))
        .map(|(edges, _)| edges)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(usize, usize)]) -> Vec<IntEdge> {
        pairs.iter().map(|&(f, t)| IntEdge::new(f, t)).collect()
    }

    #[test]
    fn test_acyclic_chain_reports_nothing() {
        assert!(find_components(&edges(&[(0, 1), (1, 2)])).is_empty());
    }

    #[test]
    fn test_two_cycle_reports_both_edges() {
        let components = find_components(&edges(&[(0, 1), (1, 0)]));
        assert_eq!(components, vec![edges(&[(0, 1), (1, 0)])]);
    }

    #[test]
    fn test_independent_components_stay_separate() {
        let components = find_components(&edges(&[(0, 1), (1, 0), (2, 3), (3, 2)]));
        assert_eq!(components.len(), 2);
        assert!(components.contains(&edges(&[(0, 1), (1, 0)])));
        assert!(components.contains(&edges(&[(2, 3), (3, 2)])));
    }

    #[test]
    fn test_acyclic_tail_is_excluded() {
        let components = find_components(&edges(&[(0, 1), (1, 0), (2, 3), (3, 4)]));
        assert_eq!(components, vec![edges(&[(0, 1), (1, 0)])]);
    }

    #[test]
    fn test_self_loop_singleton_is_reported() {
        let components = find_components(&edges(&[(0, 1), (1, 1)]));
        assert_eq!(components, vec![edges(&[(1, 1)])]);
    }

    #[test]
    fn test_singleton_without_self_loop_is_omitted() {
        assert!(find_components(&edges(&[(0, 1)])).is_empty());
    }

    #[test]
    fn test_component_is_induced_edge_set_not_just_a_cycle() {
        // Triangle plus a chord: the chord belongs to the component too.
        let components = find_components(&edges(&[(0, 1), (1, 2), (2, 0), (0, 2)]));
        assert_eq!(components, vec![edges(&[(0, 1), (1, 2), (2, 0), (0, 2)])]);
    }

    #[test]
    fn test_eight_node_multi_scc_decomposition() {
        let input = edges(&[
            (0, 1),
            (1, 2),
            (2, 0),
            (6, 2),
            (6, 0),
            (6, 4),
            (5, 6),
            (5, 0),
            (4, 5),
            (3, 4),
            (7, 5),
            (3, 7),
            (7, 3),
        ]);
        let components = find_components(&input);
        assert_eq!(components.len(), 3);
        assert_eq!(components[0], edges(&[(0, 1), (1, 2), (2, 0)]));
        assert_eq!(components[1], edges(&[(6, 4), (5, 6), (4, 5)]));
        assert_eq!(components[2], edges(&[(3, 7), (7, 3)]));
    }
}
