//! Mermaid diagram export for [`Graph`].
//!
//! Renders the graph as a fenced `mermaid` flowchart, one line per distinct
//! undirected edge. Compiling the emitted markdown yields a visual
//! representation of the graph.

use std::fmt::Write as _;

use super::Graph;

impl Graph {
    /// Renders the graph as a fenced mermaid `flowchart LR` block.
    ///
    /// Edges appear in canonical enumeration order with their weight on
    /// the connecting line. Isolated vertices are listed as bare nodes so
    /// they are not dropped from the diagram.
    #[must_use]
    pub fn to_mermaid(&self) -> String {
        let edges = self.distinct_edges();
        let mut connected = std::collections::HashSet::new();
        let mut out = String::new();
        let _ = writeln!(out, "```mermaid");
        let _ = writeln!(out, " flowchart LR;");
        for edge in &edges {
            connected.insert(edge.from());
            connected.insert(edge.other());
            let _ = writeln!(
                out,
                "\t{}-- {} ---{};",
                edge.from(),
                edge.weight(),
                edge.other()
            );
        }
        for &vertex in self.vertices() {
            if !connected.contains(&vertex) {
                let _ = writeln!(out, "\t{vertex};");
            }
        }
        out.push_str("```");
        out
    }
}
