//! Undirected weighted graphs with dynamic mutation and a minimum spanning
//! tree query.
//!
//! The library is built around two pieces:
//!
//! - [`Graph`]: adjacency-list storage supporting vertex and edge mutation,
//!   a plain text serialization format, and a mermaid diagram export. Every
//!   undirected edge is stored as two directed records, one per endpoint,
//!   kept consistent by the mutation API.
//! - [`minimum_spanning_tree`]: Kruskal's algorithm over the graph's
//!   distinct undirected edges, backed by a union-find with path
//!   compression and union by rank. For a disconnected input the result is
//!   a minimum spanning forest with the vertex set preserved.

mod error;
mod graph;
mod mst;

pub use crate::{
    error::{GraphError, GraphErrorCode},
    graph::{Edge, Graph, ReadError, VertexId},
    mst::minimum_spanning_tree,
};
