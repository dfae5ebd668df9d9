//! Bridge-word queries.
//!
//! Two related but distinct questions are answered here:
//!
//! 1. [`direct_bridges`] — the one-hop question: which words X have both
//!    `w1→X` and `X→w2`? This feeds text augmentation.
//! 2. [`find_bridge_words`] — the reachability-style report: a depth-first
//!    search from `w1`, collecting the interior words of every path of at
//!    least three nodes that reaches `w2`.
//!
//! The report search shares ONE visited set across the entire traversal
//! rather than resetting it per branch, so on graphs with converging paths
//! some reachable bridge words are not reported. DESIGN.md records this as
//! deliberate; do not make the visited set path-local without updating it.

use std::fmt;

use ahash::AHashSet;

use crate::graph::WordGraph;

/// Find every one-hop bridge between `word1` and `word2`.
///
/// Returns the words X with edges `word1→X` and `X→word2`, in `word1`'s
/// adjacency order. Duplicate adjacency entries yield duplicate candidates,
/// which is what biases uniform selection toward frequent transitions.
/// Unknown words simply produce an empty result.
pub fn direct_bridges(graph: &WordGraph, word1: &str, word2: &str) -> Vec<String> {
    graph
        .successors(word1)
        .iter()
        .filter(|intermediate| graph.successors(intermediate).iter().any(|d| d == word2))
        .cloned()
        .collect()
}

/// The outcome of a bridge-word report query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BridgeWordReport {
    /// At least one of the queried words is not a node of the graph.
    MissingWord,
    /// Both words are known but no qualifying path connects them.
    NoBridgeWords,
    /// Interior words of the discovered paths, in discovery order.
    /// Duplicates are possible when several paths share a word.
    Bridges(Vec<String>),
}

impl fmt::Display for BridgeWordReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeWordReport::MissingWord => write!(f, "No word1 or word2 in the graph!"),
            BridgeWordReport::NoBridgeWords => {
                write!(f, "No bridge words from word1 to word2!")
            }
            BridgeWordReport::Bridges(words) => {
                write!(
                    f,
                    "The bridge words from word1 to word2 are: {}.",
                    words.join(", ")
                )
            }
        }
    }
}

/// Search for bridge words between `word1` and `word2` by depth-first search.
///
/// Every time `word2` is reached through a path of three or more nodes, the
/// path's interior nodes are appended to the report. Reaching `word2` over a
/// shorter path does not stop that branch; the search keeps expanding through
/// it. The visited set is shared across the whole search, so the result
/// depends on expansion order — branches are explored left to right in
/// adjacency order, matching a recursive formulation.
pub fn find_bridge_words(graph: &WordGraph, word1: &str, word2: &str) -> BridgeWordReport {
    if !graph.contains(word1) || !graph.contains(word2) {
        return BridgeWordReport::MissingWord;
    }

    let mut visited: AHashSet<String> = AHashSet::new();
    let mut bridges = Vec::new();

    // Explicit-stack DFS over whole paths. Neighbors are pushed in reverse so
    // that pop order equals left-to-right adjacency order.
    let mut stack: Vec<Vec<String>> = vec![vec![word1.to_string()]];

    while let Some(path) = stack.pop() {
        let word = path.last().expect("paths on the stack are never empty");

        if word == word2 && path.len() > 2 {
            bridges.extend_from_slice(&path[1..path.len() - 1]);
            continue;
        }

        // A sibling subtree may have visited this word after it was pushed;
        // the recursive formulation checks the guard at call time, so the
        // same re-check happens here at pop time.
        if visited.contains(word) {
            continue;
        }
        visited.insert(word.clone());

        for neighbor in graph.successors(word).iter().rev() {
            if !visited.contains(neighbor) {
                let mut extended = path.clone();
                extended.push(neighbor.clone());
                stack.push(extended);
            }
        }
    }

    if bridges.is_empty() {
        BridgeWordReport::NoBridgeWords
    } else {
        BridgeWordReport::Bridges(bridges)
    }
}
