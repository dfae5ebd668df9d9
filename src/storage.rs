//! Plain-text persistence for the graph and its by-products.
//!
//! The only persistence format is text: the source document, a one-word-per-
//! line token list, a one-edge-per-line dump using the `→` separator, and a
//! walk file joining nodes with ` → `. The edge dump can be read back into a
//! graph, reproducing the original adjacency multiset.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{LexigraphError, Result};
use crate::graph::WordGraph;

/// Separator between source and destination in the edge dump.
pub const EDGE_ARROW: &str = "→";

/// Separator between nodes when a path is written out or displayed.
pub const PATH_ARROW: &str = " → ";

/// Read the source text, mapping a missing file to
/// [`LexigraphError::MissingSource`].
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            LexigraphError::missing_source(path.display().to_string())
        } else {
            LexigraphError::Io(e)
        }
    })
}

/// Write a token list, one word per line.
pub fn write_token_list<P: AsRef<Path>>(path: P, tokens: &[String]) -> Result<()> {
    let mut contents = String::new();
    for token in tokens {
        contents.push_str(token);
        contents.push('\n');
    }
    fs::write(path, contents)?;
    Ok(())
}

/// Render the edge dump: one `source→destination` line per edge, in
/// node-iteration then adjacency-iteration order.
pub fn edge_list(graph: &WordGraph) -> String {
    let mut contents = String::new();
    for (source, destination) in graph.edges() {
        contents.push_str(source);
        contents.push_str(EDGE_ARROW);
        contents.push_str(destination);
        contents.push('\n');
    }
    contents
}

/// Write the edge dump to a file.
pub fn write_edge_list<P: AsRef<Path>>(path: P, graph: &WordGraph) -> Result<()> {
    fs::write(path, edge_list(graph))?;
    Ok(())
}

/// Reconstruct a graph from an edge dump produced by [`write_edge_list`].
pub fn read_edge_list<P: AsRef<Path>>(path: P) -> Result<WordGraph> {
    let contents = fs::read_to_string(path)?;
    let mut graph = WordGraph::new();

    for (line_num, line) in contents.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let (source, destination) = line.split_once(EDGE_ARROW).ok_or_else(|| {
            LexigraphError::graph(format!(
                "malformed edge on line {}: {line:?}",
                line_num + 1
            ))
        })?;
        graph.add_edge(source, destination);
    }

    Ok(graph)
}

/// Write a walk's node sequence joined by ` → `.
pub fn write_walk<P: AsRef<Path>>(path: P, walk: &[String]) -> Result<()> {
    fs::write(path, walk.join(PATH_ARROW))?;
    Ok(())
}
