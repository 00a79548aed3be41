//! Property-based tests for the Kruskal MST construction.
//!
//! Random graphs across several topology and weight distributions are
//! verified against a Prim's algorithm oracle for total weight, alongside
//! structural invariants (acyclicity, `n - c` edge count, vertex
//! preservation) and idempotence of the query.

mod oracle;
mod strategies;
