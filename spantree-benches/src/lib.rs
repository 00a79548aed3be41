//! Synthetic graph generation shared by the spantree benchmarks.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use spantree_core::{Edge, Graph, VertexId};

/// Configuration for synthetic graph generation.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Probability of an edge between each unique vertex pair.
    pub edge_probability: f64,
    /// Seed for the deterministic generator.
    pub seed: u64,
}

/// Generates a random undirected graph from `config`.
///
/// Vertex identifiers are spread out (multiples of three plus one) so MST
/// benchmarks exercise the identifier-to-position lookup rather than
/// identity indexing. A spanning chain is always included, keeping the
/// graph connected so `n - 1` edges are selected every run.
#[must_use]
pub fn synthetic_graph(config: &SyntheticConfig) -> Graph {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let vertices: Vec<VertexId> = (0..config.vertex_count)
        .map(|index| (index as VertexId) * 3 + 1)
        .collect();

    let mut edges = Vec::new();
    for pair in vertices.windows(2) {
        edges.push(Edge::weighted(pair[0], pair[1], rng.gen_range(1..=1_000)));
    }
    for i in 0..vertices.len() {
        for j in (i + 2)..vertices.len() {
            if rng.gen_bool(config.edge_probability) {
                edges.push(Edge::weighted(
                    vertices[i],
                    vertices[j],
                    rng.gen_range(1..=1_000),
                ));
            }
        }
    }

    let mut graph = Graph::new();
    for &vertex in &vertices {
        graph
            .add_vertex(vertex)
            .expect("generated identifiers are distinct");
    }
    for edge in edges {
        graph.add_edge(edge).expect("generated endpoints exist");
    }
    graph
}
