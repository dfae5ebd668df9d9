//! Text augmentation with bridge words.

use rand::seq::IndexedRandom;

use crate::analysis::normalize;
use crate::graph::WordGraph;
use crate::query::direct_bridges;

/// Rewrite `text` by inserting bridge words between consecutive word pairs.
///
/// The input is split on whitespace and lower-cased. For each consecutive
/// pair of the original sequence, left to right, a one-hop bridge candidate
/// is looked up; when at least one exists, one is chosen uniformly at random
/// and inserted between the pair. The sweep covers only the original pairs —
/// inserted words are never themselves bridge-augmented. Inputs with fewer
/// than two words come back unchanged (apart from normalization).
pub fn augment(graph: &WordGraph, text: &str) -> String {
    let words: Vec<String> = text.split_whitespace().map(normalize).collect();

    if words.len() < 2 {
        return words.join(" ");
    }

    let mut rng = rand::rng();
    let mut result: Vec<String> = Vec::with_capacity(words.len());

    for pair in words.windows(2) {
        result.push(pair[0].clone());

        let candidates = direct_bridges(graph, &pair[0], &pair[1]);
        if let Some(bridge) = candidates.choose(&mut rng) {
            result.push(bridge.clone());
        }
    }
    result.push(words[words.len() - 1].clone());

    result.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;

    fn graph_of(words: &[&str]) -> WordGraph {
        build_graph(&words.iter().map(|w| w.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_single_bridge_is_inserted() {
        let graph = graph_of(&["the", "quick", "fox"]);

        assert_eq!(augment(&graph, "the fox"), "the quick fox");
    }

    #[test]
    fn test_no_bridge_leaves_text_unchanged() {
        let graph = graph_of(&["the", "quick", "fox"]);

        assert_eq!(augment(&graph, "quick fox"), "quick fox");
        assert_eq!(augment(&graph, "lazy dog"), "lazy dog");
    }

    #[test]
    fn test_input_is_case_normalized() {
        let graph = graph_of(&["the", "quick", "fox"]);

        assert_eq!(augment(&graph, "The FOX"), "the quick fox");
    }

    #[test]
    fn test_short_inputs_unchanged() {
        let graph = graph_of(&["the", "quick", "fox"]);

        assert_eq!(augment(&graph, "fox"), "fox");
        assert_eq!(augment(&graph, ""), "");
    }

    #[test]
    fn test_chosen_bridge_is_a_valid_candidate() {
        // Two bridges between "the" and "end": either may be chosen.
        let graph = graph_of(&["the", "quick", "end", "the", "lazy", "end"]);

        for _ in 0..20 {
            let out = augment(&graph, "the end");
            assert!(
                out == "the quick end" || out == "the lazy end",
                "unexpected augmentation: {out}"
            );
        }
    }

    #[test]
    fn test_every_original_pair_considered() {
        // Bridges exist for both pairs of "a c e".
        let graph = graph_of(&["a", "b", "c", "d", "e"]);

        assert_eq!(augment(&graph, "a c e"), "a b c d e");
    }

    #[test]
    fn test_inserted_words_are_not_rescanned() {
        // "a b" has bridge x (a→x, x→b); "x b" has bridge y (x→y, y→b).
        // After inserting x between a and b, the pair (x, b) must NOT be
        // augmented again.
        let mut graph = WordGraph::new();
        graph.add_edge("a", "x");
        graph.add_edge("x", "b");
        graph.add_edge("x", "y");
        graph.add_edge("y", "b");

        assert_eq!(augment(&graph, "a b"), "a x b");
    }
}
