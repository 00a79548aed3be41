//! Minimum spanning tree construction (Kruskal's algorithm).
//!
//! The computation collects the graph's distinct undirected edges, sorts
//! them by ascending weight with a **stable** sort, and accepts each edge
//! whose endpoints are not yet connected, tracked by a union-find over
//! vertex positions. Sort stability is a deliberate contract: edges of
//! equal weight keep their canonical enumeration order, so the choice
//! among equally optimal spanning trees is deterministic.

mod union_find;

#[cfg(test)]
mod property;

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::graph::{Graph, VertexId};

use self::union_find::DisjointSet;

/// Computes a minimum spanning tree of `graph`.
///
/// For a connected input with `n` vertices the result has the same vertex
/// set and exactly `n - 1` edges of minimum total weight. For a
/// disconnected input the result is a minimum spanning forest: one tree
/// per connected component, vertex count preserved. An empty graph yields
/// an empty graph. Self-loops never enter consideration.
///
/// As a documented side effect the source graph's vertex list is sorted
/// ascending in place (its adjacency rows move with it); callers must not
/// rely on the pre-call vertex ordering.
#[must_use]
#[instrument(
    name = "mst.kruskal",
    skip(graph),
    fields(vertices = graph.vertex_count()),
)]
pub fn minimum_spanning_tree(graph: &mut Graph) -> Graph {
    graph.canonicalise_vertex_order();

    let position_of: HashMap<VertexId, usize> = graph
        .vertices()
        .iter()
        .enumerate()
        .map(|(position, &vertex)| (vertex, position))
        .collect();

    let mut edges = graph.distinct_edges();
    // Stable sort: ties keep their canonical enumeration order.
    edges.sort_by_key(|edge| edge.weight());

    let mut sets = DisjointSet::new(graph.vertex_count());
    let mut accepted = Vec::with_capacity(graph.vertex_count().saturating_sub(1));
    for edge in edges {
        // Storage guarantees referential integrity of its own edges; a
        // miss here would be a logic error inside the crate.
        let (Some(&from), Some(&other)) = (
            position_of.get(&edge.from()),
            position_of.get(&edge.other()),
        ) else {
            continue;
        };
        if sets.union(from, other) {
            accepted.push(edge);
        }
    }

    debug!(
        accepted = accepted.len(),
        components = graph.vertex_count() - accepted.len(),
        "spanning forest selected"
    );

    let mut result = Graph::from_edges(accepted.iter().copied());
    for &vertex in graph.vertices() {
        if !result.contains_vertex(vertex) {
            result.push_vertex(vertex);
        }
    }
    result
}
