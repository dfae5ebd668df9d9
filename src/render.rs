//! Graph rendering via Graphviz DOT.
//!
//! The engine does not draw images itself; it emits DOT text for an external
//! renderer (`dot -Tpng`, or any Graphviz consumer). Edges lying on an
//! optional highlighted path are colored red and the path is repeated in the
//! graph label.

use std::fs;
use std::path::Path;

use ahash::AHashSet;

use crate::error::Result;
use crate::graph::WordGraph;
use crate::storage::PATH_ARROW;

/// Render the graph as a DOT digraph.
///
/// When `highlight` is given, every edge that lies between consecutive nodes
/// of the path is drawn red and the graph label carries the joined path.
/// Duplicate edges are emitted once per occurrence, so multiplicity stays
/// visible in the diagram.
pub fn to_dot(graph: &WordGraph, highlight: Option<&[String]>) -> String {
    let mut highlighted: AHashSet<(&str, &str)> = AHashSet::new();
    if let Some(path) = highlight {
        for pair in path.windows(2) {
            highlighted.insert((pair[0].as_str(), pair[1].as_str()));
        }
    }

    let mut dot = String::from("digraph words {\n");
    if let Some(path) = highlight {
        dot.push_str(&format!(
            "    label={};\n",
            quote(&path.join(PATH_ARROW))
        ));
    }

    for node in graph.nodes() {
        dot.push_str(&format!("    {};\n", quote(node)));
    }
    for (source, destination) in graph.edges() {
        if highlighted.contains(&(source, destination)) {
            dot.push_str(&format!(
                "    {} -> {} [color=red penwidth=2];\n",
                quote(source),
                quote(destination)
            ));
        } else {
            dot.push_str(&format!(
                "    {} -> {};\n",
                quote(source),
                quote(destination)
            ));
        }
    }
    dot.push_str("}\n");
    dot
}

/// Write the DOT rendering to a file.
pub fn write_dot<P: AsRef<Path>>(
    path: P,
    graph: &WordGraph,
    highlight: Option<&[String]>,
) -> Result<()> {
    fs::write(path, to_dot(graph, highlight))?;
    Ok(())
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;

    fn graph_of(words: &[&str]) -> WordGraph {
        build_graph(&words.iter().map(|w| w.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_dot_contains_all_edges() {
        let graph = graph_of(&["the", "quick", "fox"]);
        let dot = to_dot(&graph, None);

        assert!(dot.starts_with("digraph words {"));
        assert!(dot.contains("\"the\" -> \"quick\";"));
        assert!(dot.contains("\"quick\" -> \"fox\";"));
        assert!(!dot.contains("label="));
    }

    #[test]
    fn test_highlighted_path_edges_are_red() {
        let graph = graph_of(&["a", "b", "c", "d"]);
        let path = vec!["b".to_string(), "c".to_string(), "d".to_string()];
        let dot = to_dot(&graph, Some(&path));

        assert!(dot.contains("\"b\" -> \"c\" [color=red penwidth=2];"));
        assert!(dot.contains("\"c\" -> \"d\" [color=red penwidth=2];"));
        assert!(dot.contains("\"a\" -> \"b\";"));
        assert!(dot.contains("label=\"b → c → d\";"));
    }

    #[test]
    fn test_duplicate_edges_emitted_per_occurrence() {
        let graph = graph_of(&["a", "b", "a", "b"]);
        let dot = to_dot(&graph, None);

        assert_eq!(dot.matches("\"a\" -> \"b\";").count(), 2);
    }
}
