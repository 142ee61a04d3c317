//! Elementary-cycle enumeration (Johnson) over one SCC's induced edges.
//!
//! Never runs across components: cross-component cycles cannot exist by
//! definition of strong connectivity. The number of elementary cycles
//! can be exponential in vertex count; no truncation is applied.
//! Completeness is a hard requirement, and any size or time limit is
//! the caller's to enforce.

use strata_core::types::collections::{FxHashMap, FxHashSet};

use super::types::{IntEdge, VertexId};

/// Enumerate every elementary cycle in one strongly connected
/// component, given its induced edge list.
///
/// Each cycle is an ordered edge sequence: consecutive edges chain
/// head-to-tail and the last edge closes back to the first vertex, with
/// no vertex repeated in between. The start vertex of each cycle is the
/// least vertex it contains, and starts are processed in ascending
/// order, so output order is deterministic for a given input.
pub fn find_simple_cycles(component: &[IntEdge]) -> Vec<Vec<IntEdge>> {
    let mut adjacency: FxHashMap<VertexId, Vec<VertexId>> = FxHashMap::default();
    let mut vertices: Vec<VertexId> = Vec::new();
    for edge in component {
        adjacency.entry(edge.from).or_default().push(edge.to);
        adjacency.entry(edge.to).or_default();
    }
    vertices.extend(adjacency.keys().copied());
    vertices.sort_unstable();

    let mut search = CycleSearch {
        adjacency,
        active: vertices.iter().copied().collect(),
        blocked: FxHashSet::default(),
        block_lists: FxHashMap::default(),
        path: Vec::new(),
        cycles: Vec::new(),
    };

    // Johnson's outer loop: enumerate all circuits through the least
    // remaining vertex, then retire it. A retired vertex cannot
    // participate in any still-to-be-found elementary cycle.
    for &start in &vertices {
        search.blocked.clear();
        search.block_lists.clear();
        search.circuit(start, start);
        search.active.remove(&start);
    }

    search.cycles
}

/// Working state for one component's enumeration. Created and dropped
/// inside a single `find_simple_cycles` call.
struct CycleSearch {
    adjacency: FxHashMap<VertexId, Vec<VertexId>>,
    /// Vertices still in the working graph (starts not yet retired).
    active: FxHashSet<VertexId>,
    blocked: FxHashSet<VertexId>,
    /// Vertices to unblock transitively when their blocker frees up.
    block_lists: FxHashMap<VertexId, FxHashSet<VertexId>>,
    path: Vec<VertexId>,
    cycles: Vec<Vec<IntEdge>>,
}

impl CycleSearch {
    /// DFS from `v` looking for circuits back to `start`. Returns true
    /// if any path through `v` closed a cycle. Recursion depth is
    /// bounded by the component's vertex count.
    fn circuit(&mut self, v: VertexId, start: VertexId) -> bool {
        let mut found = false;
        self.path.push(v);
        self.blocked.insert(v);

        let neighbors = self.adjacency.get(&v).cloned().unwrap_or_default();
        for w in neighbors {
            if !self.active.contains(&w) {
                continue;
            }
            if w == start {
                self.emit_cycle(start);
                found = true;
            } else if !self.blocked.contains(&w) && self.circuit(w, start) {
                found = true;
            }
        }

        if found {
            self.unblock(v);
        } else {
            // v stays blocked; register it for transitive unblocking on
            // every still-active successor.
            for w in self.adjacency.get(&v).cloned().unwrap_or_default() {
                if self.active.contains(&w) {
                    self.block_lists.entry(w).or_default().insert(v);
                }
            }
        }

        self.path.pop();
        found
    }

    /// The standard unblock closure: free `v` and everything blocked on it.
    fn unblock(&mut self, v: VertexId) {
        self.blocked.remove(&v);
        if let Some(dependents) = self.block_lists.remove(&v) {
            for w in dependents {
                if self.blocked.contains(&w) {
                    self.unblock(w);
                }
            }
        }
    }

    /// Materialize the current path as an edge sequence, closing back to
    /// the start vertex.
    fn emit_cycle(&mut self, start: VertexId) {
        let mut cycle: Vec<IntEdge> = self
            .path
            .windows(2)
            .map(|pair| IntEdge::new(pair[0], pair[1]))
            .collect();
        if let Some(&last) = self.path.last() {
            cycle.push(IntEdge::new(last, start));
        }
        self.cycles.push(cycle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(usize, usize)]) -> Vec<IntEdge> {
        pairs.iter().map(|&(f, t)| IntEdge::new(f, t)).collect()
    }

    /// Rotate a cycle so its least vertex comes first, for order-free compares.
    fn canonical(cycle: &[IntEdge]) -> Vec<(usize, usize)> {
        let pairs: Vec<(usize, usize)> = cycle.iter().map(|e| (e.from, e.to)).collect();
        let min_pos = pairs
            .iter()
            .enumerate()
            .min_by_key(|(_, &(from, _))| from)
            .map(|(pos, _)| pos)
            .unwrap_or(0);
        let mut rotated = pairs[min_pos..].to_vec();
        rotated.extend_from_slice(&pairs[..min_pos]);
        rotated
    }

    #[test]
    fn test_two_vertex_cycle() {
        let cycles = find_simple_cycles(&edges(&[(0, 1), (1, 0)]));
        assert_eq!(cycles, vec![edges(&[(0, 1), (1, 0)])]);
    }

    #[test]
    fn test_triangle_yields_one_cycle() {
        let cycles = find_simple_cycles(&edges(&[(0, 1), (1, 2), (2, 0)]));
        assert_eq!(cycles, vec![edges(&[(0, 1), (1, 2), (2, 0)])]);
    }

    #[test]
    fn test_self_loop_is_a_one_edge_cycle() {
        let cycles = find_simple_cycles(&edges(&[(3, 3)]));
        assert_eq!(cycles, vec![edges(&[(3, 3)])]);
    }

    #[test]
    fn test_bidirectional_triangle_has_five_cycles() {
        // Three 2-cycles plus one 3-cycle in each direction.
        let cycles = find_simple_cycles(&edges(&[
            (0, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (0, 2),
        ]));
        assert_eq!(cycles.len(), 5);

        let canon: Vec<Vec<(usize, usize)>> =
            cycles.iter().map(|c| canonical(c)).collect();
        for expected in [
            vec![(0, 1), (1, 0)],
            vec![(1, 2), (2, 1)],
            vec![(0, 2), (2, 0)],
            vec![(0, 1), (1, 2), (2, 0)],
            vec![(0, 2), (2, 1), (1, 0)],
        ] {
            assert!(canon.contains(&expected), "missing cycle {expected:?}");
        }
    }

    #[test]
    fn test_cycle_sharing_a_vertex() {
        // Two triangles joined at vertex 0.
        let cycles = find_simple_cycles(&edges(&[
            (0, 1),
            (1, 2),
            (2, 0),
            (0, 3),
            (3, 4),
            (4, 0),
        ]));
        assert_eq!(cycles.len(), 2);
        let canon: Vec<Vec<(usize, usize)>> =
            cycles.iter().map(|c| canonical(c)).collect();
        assert!(canon.contains(&vec![(0, 1), (1, 2), (2, 0)]));
        assert!(canon.contains(&vec![(0, 3), (3, 4), (4, 0)]));
    }

    #[test]
    fn test_cycles_start_at_their_least_vertex() {
        let cycles = find_simple_cycles(&edges(&[(5, 9), (9, 7), (7, 5)]));
        assert_eq!(cycles, vec![edges(&[(5, 9), (9, 7), (7, 5)])]);
    }

    #[test]
    fn test_chained_edges_are_valid_sequences() {
        let cycles = find_simple_cycles(&edges(&[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (1, 3),
        ]));
        for cycle in &cycles {
            for pair in cycle.windows(2) {
                assert_eq!(pair[0].to, pair[1].from);
            }
            let last = cycle.last().unwrap();
            assert_eq!(last.to, cycle[0].from);
        }
        // 0→1→2→3→0 and 0→1→3→0.
        assert_eq!(cycles.len(), 2);
    }

    #[test]
    fn test_empty_component_yields_nothing() {
        assert!(find_simple_cycles(&[]).is_empty());
    }
}
