//! Adjacency-list graph storage.
//!
//! A [`Graph`] holds an undirected, weighted graph as a vertex list plus one
//! owned edge row per vertex. Every undirected edge is stored as two
//! directed records, one from each endpoint's perspective; the mutation API
//! always inserts and removes both records together so the two copies
//! cannot drift apart.
//!
//! Vertex order inside the storage is not semantically meaningful. The MST
//! computation canonicalises it (ascending by identifier) in place, so
//! callers must not rely on insertion order surviving an MST query.

mod io;
mod mermaid;

pub use self::io::ReadError;

use crate::error::GraphError;

/// Integer identifier of a vertex, unique within one graph.
pub type VertexId = u64;

/// Weight assigned to edges created without an explicit weight.
const DEFAULT_WEIGHT: u64 = 1;

/// An undirected edge between two vertices with a positive integer weight.
///
/// Two edges with swapped endpoints and equal weight describe the same
/// undirected edge. Inside [`Graph`] storage each undirected edge appears
/// twice, once oriented from each endpoint.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    from: VertexId,
    other: VertexId,
    weight: u64,
}

impl Edge {
    /// Creates an edge with the default weight of 1.
    #[must_use]
    pub const fn new(from: VertexId, other: VertexId) -> Self {
        Self::weighted(from, other, DEFAULT_WEIGHT)
    }

    /// Creates an edge with an explicit weight.
    #[must_use]
    pub const fn weighted(from: VertexId, other: VertexId, weight: u64) -> Self {
        Self {
            from,
            other,
            weight,
        }
    }

    /// Returns the endpoint this record is oriented from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn from(&self) -> VertexId { self.from }

    /// Returns the opposite endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn other(&self) -> VertexId { self.other }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u64 { self.weight }

    /// Returns the same edge oriented from the opposite endpoint.
    const fn reversed(self) -> Self {
        Self {
            from: self.other,
            other: self.from,
            weight: self.weight,
        }
    }
}

/// Undirected weighted graph with adjacency-list storage.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    vertices: Vec<VertexId>,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a sequence of edges.
    ///
    /// Endpoints not seen before are registered as vertices in order of
    /// first appearance, so the edge list alone fully determines the graph.
    #[must_use]
    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            let from_pos = graph
                .position_of(edge.from)
                .unwrap_or_else(|| graph.push_vertex(edge.from));
            let other_pos = graph
                .position_of(edge.other)
                .unwrap_or_else(|| graph.push_vertex(edge.other));
            graph.insert_edge_records(from_pos, other_pos, edge);
        }
        graph
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex identifiers in their current storage order.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Returns `true` when `vertex` is present in the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.position_of(vertex).is_some()
    }

    /// Returns the directed edge records incident to `vertex`, or `None`
    /// when the vertex is not present.
    #[must_use]
    pub fn incident_edges(&self, vertex: VertexId) -> Option<&[Edge]> {
        self.position_of(vertex)
            .map(|position| self.adjacency[position].as_slice())
    }

    /// Adds an isolated vertex.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] when the identifier is
    /// already present.
    pub fn add_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        if self.contains_vertex(vertex) {
            return Err(GraphError::DuplicateVertex { vertex });
        }
        self.push_vertex(vertex);
        Ok(())
    }

    /// Adds a vertex together with weight-1 edges to existing neighbours.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] when the identifier is
    /// already present, or [`GraphError::UnknownVertex`] when any
    /// neighbour is missing. The graph is unchanged on error.
    pub fn add_vertex_connected(
        &mut self,
        vertex: VertexId,
        neighbours: &[VertexId],
    ) -> Result<(), GraphError> {
        let weighted: Vec<(VertexId, u64)> = neighbours
            .iter()
            .map(|&neighbour| (neighbour, DEFAULT_WEIGHT))
            .collect();
        self.add_vertex_weighted(vertex, &weighted)
    }

    /// Adds a vertex together with weighted edges to existing neighbours.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] when the identifier is
    /// already present, or [`GraphError::UnknownVertex`] when any
    /// neighbour is missing. The graph is unchanged on error.
    pub fn add_vertex_weighted(
        &mut self,
        vertex: VertexId,
        edges: &[(VertexId, u64)],
    ) -> Result<(), GraphError> {
        if self.contains_vertex(vertex) {
            return Err(GraphError::DuplicateVertex { vertex });
        }
        // Validate every neighbour before mutating so a failed call leaves
        // the storage untouched.
        let mut positions = Vec::with_capacity(edges.len());
        for &(neighbour, _) in edges {
            let position = self
                .position_of(neighbour)
                .ok_or(GraphError::UnknownVertex { vertex: neighbour })?;
            positions.push(position);
        }
        let vertex_pos = self.push_vertex(vertex);
        for (&(neighbour, weight), &neighbour_pos) in edges.iter().zip(&positions) {
            self.insert_edge_records(
                vertex_pos,
                neighbour_pos,
                Edge::weighted(vertex, neighbour, weight),
            );
        }
        Ok(())
    }

    /// Removes a vertex and all edges incident to it.
    ///
    /// Removal is order-disturbing: the last vertex is swapped into the
    /// removed slot.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when the vertex is missing.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        let position = self
            .position_of(vertex)
            .ok_or(GraphError::UnknownVertex { vertex })?;
        let row = std::mem::take(&mut self.adjacency[position]);
        for edge in &row {
            if edge.other == vertex {
                // Self-loop: both records lived in the row already taken.
                continue;
            }
            if let Some(neighbour_pos) = self.position_of(edge.other) {
                Self::remove_record(&mut self.adjacency[neighbour_pos], vertex);
            }
        }
        self.vertices.swap_remove(position);
        self.adjacency.swap_remove(position);
        Ok(())
    }

    /// Adds an undirected edge between two existing vertices.
    ///
    /// Both directed records are inserted. Parallel edges are not rejected
    /// here; the graph model treats them as distinct incident records.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when either endpoint is
    /// missing.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        let from_pos = self
            .position_of(edge.from)
            .ok_or(GraphError::UnknownVertex { vertex: edge.from })?;
        let other_pos = self
            .position_of(edge.other)
            .ok_or(GraphError::UnknownVertex { vertex: edge.other })?;
        self.insert_edge_records(from_pos, other_pos, edge);
        Ok(())
    }

    /// Removes the undirected edge between `from` and `other`.
    ///
    /// Both directed records are removed by swap-remove, so edge order
    /// within the affected rows is disturbed.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when either endpoint is
    /// missing, or [`GraphError::UnknownEdge`] when no edge connects them.
    pub fn remove_edge(&mut self, from: VertexId, other: VertexId) -> Result<(), GraphError> {
        let from_pos = self
            .position_of(from)
            .ok_or(GraphError::UnknownVertex { vertex: from })?;
        let other_pos = self
            .position_of(other)
            .ok_or(GraphError::UnknownVertex { vertex: other })?;
        if !Self::remove_record(&mut self.adjacency[from_pos], other) {
            return Err(GraphError::UnknownEdge { from, other });
        }
        Self::remove_record(&mut self.adjacency[other_pos], from);
        Ok(())
    }

    /// Returns each distinct undirected edge exactly once.
    ///
    /// Vertices are visited in ascending identifier order and only the
    /// record oriented from the smaller endpoint is kept, which discards
    /// exactly one of the two directed copies per edge. Output order is
    /// vertex order, then insertion order within a vertex; it is not
    /// sorted by weight. Self-loops never satisfy `from < other` and are
    /// therefore excluded.
    #[must_use]
    pub fn distinct_edges(&self) -> Vec<Edge> {
        let mut order: Vec<usize> = (0..self.vertices.len()).collect();
        order.sort_by_key(|&position| self.vertices[position]);

        let mut edges = Vec::new();
        for position in order {
            let vertex = self.vertices[position];
            for edge in &self.adjacency[position] {
                if vertex < edge.other {
                    edges.push(Edge::weighted(vertex, edge.other, edge.weight));
                }
            }
        }
        edges
    }

    /// Sorts the vertex list ascending, permuting the adjacency rows with
    /// it so each row stays attached to its vertex.
    pub(crate) fn canonicalise_vertex_order(&mut self) {
        let mut paired: Vec<(VertexId, Vec<Edge>)> = self
            .vertices
            .drain(..)
            .zip(self.adjacency.drain(..))
            .collect();
        paired.sort_by_key(|&(vertex, _)| vertex);
        for (vertex, row) in paired {
            self.vertices.push(vertex);
            self.adjacency.push(row);
        }
    }

    /// Appends a vertex without a duplicate check and returns its position.
    pub(crate) fn push_vertex(&mut self, vertex: VertexId) -> usize {
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        self.vertices.len() - 1
    }

    /// Inserts the two directed records for one undirected edge.
    ///
    /// A self-loop places both records in the same row, matching the
    /// duplicated-record representation used for ordinary edges.
    fn insert_edge_records(&mut self, from_pos: usize, other_pos: usize, edge: Edge) {
        self.adjacency[from_pos].push(Edge::weighted(edge.from, edge.other, edge.weight));
        self.adjacency[other_pos].push(edge.reversed());
    }

    /// Swap-removes the first record in `row` pointing at `other`.
    /// Returns `false` when no such record exists.
    fn remove_record(row: &mut Vec<Edge>, other: VertexId) -> bool {
        match row.iter().position(|edge| edge.other == other) {
            Some(index) => {
                row.swap_remove(index);
                true
            }
            None => false,
        }
    }

    fn position_of(&self, vertex: VertexId) -> Option<usize> {
        self.vertices.iter().position(|&id| id == vertex)
    }
}
