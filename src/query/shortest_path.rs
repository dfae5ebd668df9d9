//! Unweighted shortest-path search.

use ahash::AHashMap;
use std::collections::VecDeque;

use crate::graph::WordGraph;

/// A minimum-hop path between two words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPath {
    /// The nodes along the path, endpoints included.
    pub path: Vec<String>,
    /// The number of edges, `path.len() - 1`.
    pub length: usize,
}

/// Compute a minimum-edge-count path from `word1` to `word2`.
///
/// Standard breadth-first search; every edge counts 1 and multiplicity is
/// ignored. Returns `None` when either endpoint is unknown or `word2` is
/// unreachable — a normal query outcome, not an error. When several shortest
/// paths exist, the one following earliest adjacency order is returned; any
/// minimal path is acceptable.
pub fn shortest_path(graph: &WordGraph, word1: &str, word2: &str) -> Option<ShortestPath> {
    if !graph.contains(word1) || !graph.contains(word2) {
        return None;
    }

    if word1 == word2 {
        return Some(ShortestPath {
            path: vec![word1.to_string()],
            length: 0,
        });
    }

    // predecessor map doubles as the visited set
    let mut predecessor: AHashMap<String, String> = AHashMap::new();
    let mut queue: VecDeque<String> = VecDeque::new();
    queue.push_back(word1.to_string());
    predecessor.insert(word1.to_string(), word1.to_string());

    while let Some(current) = queue.pop_front() {
        for next in graph.successors(&current) {
            if predecessor.contains_key(next) {
                continue;
            }
            predecessor.insert(next.clone(), current.clone());

            if next == word2 {
                return Some(backtrack(&predecessor, word1, word2));
            }
            queue.push_back(next.clone());
        }
    }

    None
}

fn backtrack(predecessor: &AHashMap<String, String>, word1: &str, word2: &str) -> ShortestPath {
    let mut path = vec![word2.to_string()];
    let mut current = word2;

    while current != word1 {
        current = &predecessor[current];
        path.push(current.to_string());
    }
    path.reverse();

    let length = path.len() - 1;
    ShortestPath { path, length }
}
