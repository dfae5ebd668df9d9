//! Text analysis for graph construction.
//!
//! Analysis here is a single-stage pipeline: a tokenizer splits raw text into
//! lower-cased word tokens, and the same normalization is applied to words
//! arriving from queries so that "The Fox" and "the fox" build and query
//! identically.

pub mod tokenizer;

pub use tokenizer::{LetterTokenizer, Tokenizer};

/// Normalize a single word the same way the tokenizer normalizes tokens.
///
/// Query words must go through this before being looked up in the graph.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("The"), "the");
        assert_eq!(normalize("FOX"), "fox");
        assert_eq!(normalize("quick"), "quick");
    }
}
