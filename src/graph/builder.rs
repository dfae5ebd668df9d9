//! Graph construction from token sequences.

use log::debug;

use crate::graph::WordGraph;

/// Build a word adjacency graph from an ordered token sequence.
///
/// One directed edge is added per consecutive token pair, in order, so a
/// repeated pair produces a duplicate adjacency entry. Tokens are expected to
/// be already normalized (see [`crate::analysis`]). A sequence with fewer
/// than two tokens produces a graph containing the tokens as isolated nodes.
pub fn build_graph(tokens: &[String]) -> WordGraph {
    let mut graph = WordGraph::new();

    match tokens {
        [] => {}
        [only] => {
            // A single token still becomes a node, just with no edges.
            graph.add_node(only);
        }
        _ => {
            for pair in tokens.windows(2) {
                graph.add_edge(&pair[0], &pair[1]);
            }
        }
    }

    debug!(
        "built graph: {} nodes, {} edges from {} tokens",
        graph.node_count(),
        graph.edge_count(),
        tokens.len()
    );

    graph
}
