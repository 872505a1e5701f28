//! Graphviz DOT export — render the derivation graph for inspection.
//!
//! ```text
//! DependencyGraph → export_dot() → digraph tokens { ... }
//!   → pipe into `dot -Tsvg`, or paste into any Graphviz viewer
//! ```
//!
//! Each edge is labeled with the generation rule of its target. Nodes are
//! written in topological order so the output reads top-down.

use std::io::Write;

use crate::graph::DependencyGraph;
use crate::Result;

/// Write `graph` as a Graphviz digraph.
pub fn export_dot(graph: &DependencyGraph, writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "// token-registry derivation graph")?;
    writeln!(writer, "// Tokens: {}", graph.node_count())?;
    writeln!(writer, "// Derivations: {}", graph.edge_count())?;
    writeln!(writer, "digraph tokens {{")?;
    writeln!(writer, "  rankdir=LR;")?;

    for name in graph.topological_sort() {
        writeln!(writer, "  {};", quote(&name))?;
    }

    for (source, target) in graph.edges() {
        match graph.get_generation_rule(target) {
            Some(rule) => writeln!(
                writer,
                "  {} -> {} [label={}];",
                quote(source),
                quote(target),
                quote(rule)
            )?,
            None => writeln!(writer, "  {} -> {};", quote(source), quote(target))?,
        }
    }

    writeln!(writer, "}}")?;
    Ok(())
}

/// Quote an identifier as a DOT string literal.
fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}
