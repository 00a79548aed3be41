//! Error types for graph storage mutation.
//!
//! The MST computation itself is a total function and has no error type;
//! only the storage mutators and the text reader can fail.

use thiserror::Error;

use crate::graph::VertexId;

/// Errors returned by [`crate::Graph`] mutation operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The vertex identifier is already present in the graph.
    #[error("vertex {vertex} is already present")]
    DuplicateVertex {
        /// The identifier that was added twice.
        vertex: VertexId,
    },
    /// An operation referenced a vertex the graph does not contain.
    #[error("vertex {vertex} is not present in the graph")]
    UnknownVertex {
        /// The missing vertex identifier.
        vertex: VertexId,
    },
    /// An edge removal referenced an edge the graph does not contain.
    #[error("no edge between {from} and {other}")]
    UnknownEdge {
        /// One endpoint of the missing edge.
        from: VertexId,
        /// The other endpoint of the missing edge.
        other: VertexId,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::DuplicateVertex { .. } => GraphErrorCode::DuplicateVertex,
            Self::UnknownVertex { .. } => GraphErrorCode::UnknownVertex,
            Self::UnknownEdge { .. } => GraphErrorCode::UnknownEdge,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// The vertex identifier is already present in the graph.
    DuplicateVertex,
    /// An operation referenced a vertex the graph does not contain.
    UnknownVertex,
    /// An edge removal referenced an edge the graph does not contain.
    UnknownEdge,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DuplicateVertex => "DUPLICATE_VERTEX",
            Self::UnknownVertex => "UNKNOWN_VERTEX",
            Self::UnknownEdge => "UNKNOWN_EDGE",
        }
    }
}
