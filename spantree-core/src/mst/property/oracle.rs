//! Prim's algorithm oracle for MST property verification.
//!
//! An independent minimum-spanning-forest implementation used to check the
//! Kruskal construction's total weight and component structure. Prim grows
//! each component from a seed vertex with a binary heap, so it shares no
//! code with the implementation under test.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::graph::{Edge, VertexId};

/// Aggregate result of the Prim oracle.
#[derive(Clone, Copy, Debug)]
pub(super) struct PrimSummary {
    /// Total weight of the minimum spanning forest.
    pub(super) total_weight: u64,
    /// Number of forest edges.
    pub(super) edge_count: usize,
    /// Number of connected components.
    pub(super) component_count: usize,
}

/// Computes a minimum spanning forest over `vertices` and `edges` with
/// Prim's algorithm, one run per connected component.
pub(super) fn prim_forest(vertices: &[VertexId], edges: &[Edge]) -> PrimSummary {
    let mut adjacency: HashMap<VertexId, Vec<(u64, VertexId)>> = HashMap::new();
    for &vertex in vertices {
        adjacency.entry(vertex).or_default();
    }
    for edge in edges {
        if edge.from() == edge.other() {
            continue;
        }
        adjacency
            .entry(edge.from())
            .or_default()
            .push((edge.weight(), edge.other()));
        adjacency
            .entry(edge.other())
            .or_default()
            .push((edge.weight(), edge.from()));
    }

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut summary = PrimSummary {
        total_weight: 0,
        edge_count: 0,
        component_count: 0,
    };

    for &start in vertices {
        if visited.contains(&start) {
            continue;
        }
        summary.component_count += 1;
        visited.insert(start);

        let mut frontier: BinaryHeap<Reverse<(u64, VertexId)>> = BinaryHeap::new();
        for &(weight, neighbour) in &adjacency[&start] {
            frontier.push(Reverse((weight, neighbour)));
        }

        while let Some(Reverse((weight, vertex))) = frontier.pop() {
            if !visited.insert(vertex) {
                continue;
            }
            summary.total_weight += weight;
            summary.edge_count += 1;
            for &(next_weight, neighbour) in &adjacency[&vertex] {
                if !visited.contains(&neighbour) {
                    frontier.push(Reverse((next_weight, neighbour)));
                }
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use crate::graph::Edge;

    use super::prim_forest;

    #[test]
    fn agrees_with_hand_computed_tree() {
        let vertices = [1, 2, 3, 4];
        let edges = [
            Edge::weighted(1, 2, 1),
            Edge::weighted(1, 3, 7),
            Edge::weighted(1, 4, 7),
            Edge::weighted(2, 4, 1),
            Edge::weighted(3, 4, 1),
        ];
        let summary = prim_forest(&vertices, &edges);
        assert_eq!(summary.total_weight, 3);
        assert_eq!(summary.edge_count, 3);
        assert_eq!(summary.component_count, 1);
    }

    #[test]
    fn counts_components_of_edgeless_graph() {
        let summary = prim_forest(&[1, 2, 3], &[]);
        assert_eq!(summary.total_weight, 0);
        assert_eq!(summary.edge_count, 0);
        assert_eq!(summary.component_count, 3);
    }
}
