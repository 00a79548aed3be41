//! Fixture generation strategies for MST property tests.
//!
//! Each generator builds a graph description with non-contiguous,
//! shuffle-ordered vertex identifiers so the position lookup inside the
//! MST computation is exercised, not just identity indexing.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::graph::{Edge, Graph, VertexId};

/// Smallest vertex count produced by the generators.
const MIN_VERTICES: usize = 2;
/// Largest vertex count produced by the generators.
const MAX_VERTICES: usize = 40;

/// Weight and topology families covered by the suite.
#[derive(Clone, Copy, Debug)]
pub(super) enum WeightDistribution {
    /// Every edge weight is distinct; the MST is unique.
    Unique,
    /// All weights identical, stressing the stable tie-break.
    ManyIdentical,
    /// Low edge probability, frequently disconnected by accident.
    Sparse,
    /// Two vertex groups with no edges between them.
    Disconnected,
}

/// A generated graph description.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub(super) vertices: Vec<VertexId>,
    pub(super) edges: Vec<Edge>,
    pub(super) distribution: WeightDistribution,
}

impl GraphFixture {
    /// Materialises the fixture as a [`Graph`].
    pub(super) fn build_graph(&self) -> Graph {
        let mut graph = Graph::new();
        for &vertex in &self.vertices {
            graph.add_vertex(vertex).expect("fixture ids are distinct");
        }
        for &edge in &self.edges {
            graph.add_edge(edge).expect("fixture endpoints exist");
        }
        graph
    }
}

/// Generates fixtures covering all weight distributions.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (0..4u8, any::<u64>()).prop_map(|(kind, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let distribution = match kind {
            0 => WeightDistribution::Unique,
            1 => WeightDistribution::ManyIdentical,
            2 => WeightDistribution::Sparse,
            _ => WeightDistribution::Disconnected,
        };
        generate_fixture(distribution, &mut rng)
    })
}

fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> GraphFixture {
    match distribution {
        WeightDistribution::Unique => {
            let mut unique = 0u64;
            probabilistic_graph(rng, (0.2, 0.6), distribution, move |_| {
                unique += 1;
                unique.wrapping_mul(7)
            })
        }
        WeightDistribution::ManyIdentical => {
            probabilistic_graph(rng, (0.3, 0.7), distribution, |_| 5)
        }
        WeightDistribution::Sparse => {
            probabilistic_graph(rng, (0.02, 0.1), distribution, |r| r.gen_range(1..=100))
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

/// Generates spread-out vertex identifiers in shuffled storage order.
fn scattered_vertices(rng: &mut SmallRng, count: usize) -> Vec<VertexId> {
    let mut vertices: Vec<VertexId> = (0..count)
        .map(|index| (index as VertexId) * 3 + 1)
        .collect();
    vertices.shuffle(rng);
    vertices
}

/// Adds edges between every unique vertex pair with the sampled
/// probability, weights supplied by the caller.
fn probabilistic_graph(
    rng: &mut SmallRng,
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
    mut weight_of: impl FnMut(&mut SmallRng) -> u64,
) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let edge_probability = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let vertices = scattered_vertices(rng, vertex_count);

    let mut edges = Vec::new();
    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                let weight = weight_of(rng);
                edges.push(Edge::weighted(vertices[i], vertices[j], weight));
            }
        }
    }

    GraphFixture {
        vertices,
        edges,
        distribution,
    }
}

/// Generates two internally connected groups with no edges between them,
/// guaranteeing at least two components.
fn generate_disconnected(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(4..=MAX_VERTICES);
    let vertices = scattered_vertices(rng, vertex_count);
    let split = rng.gen_range(2..=vertex_count - 2);

    let mut edges = Vec::new();
    for group in [&vertices[..split], &vertices[split..]] {
        // Spanning chain keeps each group connected, extra edges add cycles.
        for pair in group.windows(2) {
            edges.push(Edge::weighted(pair[0], pair[1], rng.gen_range(1..=50)));
        }
        for i in 0..group.len() {
            for j in (i + 2)..group.len() {
                if rng.gen_bool(0.1) {
                    edges.push(Edge::weighted(group[i], group[j], rng.gen_range(1..=50)));
                }
            }
        }
    }

    GraphFixture {
        vertices,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}
