//! Plain text serialization for [`Graph`].
//!
//! The format is whitespace-tokenised:
//!
//! ```text
//! vertex:
//! <vertex count>
//! <vertex ids...>
//! Weight | NotWeight
//! edge:
//! <edge count>
//! <from> <other> [<weight>]   (one line per edge, weight only in Weight mode)
//! ```
//!
//! The writer always emits the `Weight` marker and explicit weights, so its
//! output round-trips through the reader.

use std::fmt::Write as _;
use std::io::{self, BufRead};
use std::str::SplitWhitespace;

use thiserror::Error;

use crate::error::GraphError;

use super::{Edge, Graph};

/// Errors raised while parsing the text graph format.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ReadError {
    /// Reading from the underlying stream failed.
    #[error("failed to read graph input: {source}")]
    Io {
        /// Underlying I/O failure.
        #[from]
        source: io::Error,
    },
    /// A section header was missing or misspelt.
    #[error("expected `{expected}` section, found `{found}`")]
    MissingSection {
        /// The header the parser was looking for.
        expected: &'static str,
        /// The token actually read.
        found: String,
    },
    /// The input ended before the declared counts were satisfied.
    #[error("input ended while reading {expected}")]
    UnexpectedEnd {
        /// Description of the value that was being read.
        expected: &'static str,
    },
    /// A token could not be parsed as a non-negative integer.
    #[error("`{token}` is not a valid non-negative integer")]
    InvalidInteger {
        /// The offending token.
        token: String,
    },
    /// The weight marker was neither `Weight` nor `NotWeight`.
    #[error("expected `Weight` or `NotWeight`, found `{found}`")]
    InvalidWeightMarker {
        /// The token actually read.
        found: String,
    },
    /// An edge weight below the minimum of 1 was supplied.
    #[error("edge weight must be at least 1 (got {got})")]
    InvalidWeight {
        /// The rejected weight value.
        got: u64,
    },
    /// The parsed tokens violated graph integrity (duplicate vertex or an
    /// edge endpoint that was never declared).
    #[error("graph integrity violation: {source}")]
    Graph {
        /// Underlying storage error.
        #[from]
        source: GraphError,
    },
}

impl Graph {
    /// Parses a graph from its text representation.
    ///
    /// # Errors
    /// Returns [`ReadError`] when the input deviates from the format or
    /// describes an inconsistent graph.
    pub fn from_text(text: &str) -> Result<Self, ReadError> {
        let mut tokens = Tokens::new(text);

        tokens.expect_section("vertex:")?;
        let vertex_count = tokens.integer("vertex count")?;
        let mut graph = Self::new();
        for _ in 0..vertex_count {
            let vertex = tokens.integer("a vertex identifier")?;
            graph.add_vertex(vertex)?;
        }

        let weighted = tokens.weight_marker()?;
        tokens.expect_section("edge:")?;
        let edge_count = tokens.integer("edge count")?;
        for _ in 0..edge_count {
            let from = tokens.integer("an edge endpoint")?;
            let other = tokens.integer("an edge endpoint")?;
            let edge = if weighted {
                let weight = tokens.integer("an edge weight")?;
                if weight < 1 {
                    return Err(ReadError::InvalidWeight { got: weight });
                }
                Edge::weighted(from, other, weight)
            } else {
                Edge::new(from, other)
            };
            graph.add_edge(edge)?;
        }

        Ok(graph)
    }

    /// Parses a graph from a buffered reader.
    ///
    /// # Errors
    /// Returns [`ReadError`] on I/O failure or when the input deviates
    /// from the format.
    pub fn read_text<R: BufRead>(mut reader: R) -> Result<Self, ReadError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_text(&text)
    }

    /// Renders the graph in the text format accepted by [`Graph::from_text`].
    #[must_use]
    pub fn to_text(&self) -> String {
        let edges = self.distinct_edges();
        let mut out = String::new();
        // Writing to a String cannot fail; errors are discarded by design
        // of `fmt::Write` for this sink.
        let _ = writeln!(out, "vertex:");
        let _ = writeln!(out, "{}", self.vertex_count());
        let ids: Vec<String> = self.vertices().iter().map(u64::to_string).collect();
        let _ = writeln!(out, "{}", ids.join(" "));
        let _ = writeln!(out, "Weight");
        let _ = writeln!(out, "edge:");
        let _ = writeln!(out, "{}", edges.len());
        for edge in edges {
            let _ = writeln!(out, "{} {} {}", edge.from(), edge.other(), edge.weight());
        }
        out
    }
}

/// Whitespace tokeniser with format-aware error reporting.
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next(&mut self, expected: &'static str) -> Result<&'a str, ReadError> {
        self.inner
            .next()
            .ok_or(ReadError::UnexpectedEnd { expected })
    }

    fn expect_section(&mut self, header: &'static str) -> Result<(), ReadError> {
        let token = self.next(header)?;
        if token != header {
            return Err(ReadError::MissingSection {
                expected: header,
                found: token.to_owned(),
            });
        }
        Ok(())
    }

    fn integer(&mut self, expected: &'static str) -> Result<u64, ReadError> {
        let token = self.next(expected)?;
        token.parse().map_err(|_| ReadError::InvalidInteger {
            token: token.to_owned(),
        })
    }

    fn weight_marker(&mut self) -> Result<bool, ReadError> {
        let token = self.next("the weight marker")?;
        match token {
            "Weight" => Ok(true),
            "NotWeight" => Ok(false),
            other => Err(ReadError::InvalidWeightMarker {
                found: other.to_owned(),
            }),
        }
    }
}
