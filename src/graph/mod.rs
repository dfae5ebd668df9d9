//! The word adjacency graph and its builder.
//!
//! [`WordGraph`] is the core data structure of the crate: a directed
//! multigraph whose nodes are lower-cased words and whose adjacency lists
//! keep duplicates in occurrence order, so edge multiplicity is encoded
//! without an explicit weight field. The graph is append-only — it is built
//! once from a token sequence and then read by every query.

pub mod builder;

pub use builder::build_graph;

use ahash::AHashMap;

/// A directed word adjacency graph.
///
/// Nodes iterate in first-appearance order. An adjacency list may contain the
/// same destination more than once; the duplicate entries are what bias
/// random successor selection toward frequent transitions.
#[derive(Clone, Debug, Default)]
pub struct WordGraph {
    /// Adjacency lists, keyed by source word.
    adjacency: AHashMap<String, Vec<String>>,
    /// Nodes in the order they first appeared, for stable iteration.
    node_order: Vec<String>,
}

impl WordGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        WordGraph::default()
    }

    /// Append `destination` to `source`'s adjacency list.
    ///
    /// Both endpoints become nodes if they are not already; a word that only
    /// ever appears as a destination is a node with an empty adjacency list.
    /// This operation always succeeds.
    pub fn add_edge(&mut self, source: &str, destination: &str) {
        self.ensure_node(source);
        self.ensure_node(destination);

        // ensure_node just inserted the key if it was absent.
        if let Some(succ) = self.adjacency.get_mut(source) {
            succ.push(destination.to_string());
        }
    }

    /// Register `word` as a node without adding any edge.
    pub fn add_node(&mut self, word: &str) {
        self.ensure_node(word);
    }

    fn ensure_node(&mut self, word: &str) {
        if !self.adjacency.contains_key(word) {
            self.adjacency.insert(word.to_string(), Vec::new());
            self.node_order.push(word.to_string());
        }
    }

    /// Check whether `word` is a node of the graph.
    pub fn contains(&self, word: &str) -> bool {
        self.adjacency.contains_key(word)
    }

    /// The successors of `word`, in occurrence order with duplicates.
    ///
    /// Unknown words yield an empty slice — an absent key is an empty result,
    /// never a fault.
    pub fn successors(&self, word: &str) -> &[String] {
        self.adjacency.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over the nodes in first-appearance order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.node_order.iter().map(String::as_str)
    }

    /// Iterate over every directed edge, in node-iteration then
    /// adjacency-iteration order. Duplicate edges appear once per occurrence.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.node_order.iter().flat_map(|source| {
            self.successors(source)
                .iter()
                .map(move |destination| (source.as_str(), destination.as_str()))
        })
    }

    /// The number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.node_order.len()
    }

    /// The number of directed edges, counting multiplicity.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Check whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.node_order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_creates_both_endpoints() {
        let mut graph = WordGraph::new();
        graph.add_edge("the", "fox");

        assert!(graph.contains("the"));
        assert!(graph.contains("fox"));
        assert_eq!(graph.successors("the"), ["fox"]);
        assert!(graph.successors("fox").is_empty());
    }

    #[test]
    fn test_duplicate_edges_preserved() {
        let mut graph = WordGraph::new();
        graph.add_edge("the", "fox");
        graph.add_edge("the", "dog");
        graph.add_edge("the", "fox");

        assert_eq!(graph.successors("the"), ["fox", "dog", "fox"]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_unknown_word_is_empty_not_error() {
        let graph = WordGraph::new();

        assert!(!graph.contains("ghost"));
        assert!(graph.successors("ghost").is_empty());
    }

    #[test]
    fn test_node_iteration_order() {
        let mut graph = WordGraph::new();
        graph.add_edge("a", "b");
        graph.add_edge("c", "a");
        graph.add_edge("b", "c");

        let nodes: Vec<_> = graph.nodes().collect();
        assert_eq!(nodes, ["a", "b", "c"]);
    }

    #[test]
    fn test_edge_iteration_order() {
        let mut graph = WordGraph::new();
        graph.add_edge("a", "b");
        graph.add_edge("b", "c");
        graph.add_edge("a", "c");

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, [("a", "b"), ("a", "c"), ("b", "c")]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = WordGraph::new();

        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }
}
