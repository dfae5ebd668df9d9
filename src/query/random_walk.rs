//! Randomized graph walks.

use ahash::AHashSet;
use rand::seq::IndexedRandom;

use crate::graph::WordGraph;

/// Walk the graph from `start`, choosing successors uniformly at random,
/// until a dead end or a repeated directed edge.
///
/// Each step picks uniformly from the current node's adjacency sequence, so
/// duplicate entries bias the walk toward frequent transitions. A directed
/// edge is used at most once per walk: when the chosen edge has already been
/// used, the walk stops without appending its destination. The edge set is
/// finite, so every walk terminates, with at most `edge_count + 1` nodes.
///
/// Returns `None` when `start` is not a node of the graph.
pub fn random_walk(graph: &WordGraph, start: &str) -> Option<Vec<String>> {
    if !graph.contains(start) {
        return None;
    }

    let mut rng = rand::rng();
    let mut used_edges: AHashSet<(String, String)> = AHashSet::new();
    let mut path = vec![start.to_string()];
    let mut current = start.to_string();

    loop {
        let successors = graph.successors(&current);
        let Some(next) = successors.choose(&mut rng) else {
            break; // dead end
        };

        let edge = (current.clone(), next.clone());
        if used_edges.contains(&edge) {
            break;
        }

        used_edges.insert(edge);
        path.push(next.clone());
        current = next.clone();
    }

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;

    fn graph_of(words: &[&str]) -> WordGraph {
        build_graph(&words.iter().map(|w| w.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_unknown_start_is_none() {
        let graph = graph_of(&["the", "quick", "fox"]);

        assert!(random_walk(&graph, "ghost").is_none());
    }

    #[test]
    fn test_walk_starts_at_start() {
        let graph = graph_of(&["the", "quick", "brown", "fox"]);

        let path = random_walk(&graph, "quick").unwrap();
        assert_eq!(path[0], "quick");
    }

    #[test]
    fn test_dead_end_stops_immediately() {
        let graph = graph_of(&["the", "quick", "fox"]);

        // fox has no successors
        assert_eq!(random_walk(&graph, "fox").unwrap(), ["fox"]);
    }

    #[test]
    fn test_linear_graph_walks_to_the_end() {
        let graph = graph_of(&["a", "b", "c", "d"]);

        // Only one choice at every step.
        assert_eq!(random_walk(&graph, "a").unwrap(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_consecutive_steps_follow_edges() {
        let graph = graph_of(&["to", "be", "or", "not", "to", "be"]);

        let path = random_walk(&graph, "to").unwrap();
        for pair in path.windows(2) {
            assert!(graph.successors(&pair[0]).contains(&pair[1]));
        }
    }

    #[test]
    fn test_no_edge_repeats_and_walk_is_bounded() {
        // A cycle forces the repeated-edge stop rule to fire.
        let graph = graph_of(&["a", "b", "a", "b", "a"]);

        for _ in 0..50 {
            let path = random_walk(&graph, "a").unwrap();
            assert!(path.len() <= graph.edge_count() + 1);

            let mut seen = AHashSet::new();
            for pair in path.windows(2) {
                assert!(
                    seen.insert((pair[0].clone(), pair[1].clone())),
                    "edge {pair:?} traversed twice"
                );
            }
        }
    }
}
