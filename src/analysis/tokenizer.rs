//! Tokenizer implementations for text analysis.

use std::sync::Arc;

use regex::Regex;

use crate::error::{LexigraphError, Result};

/// Trait for tokenizers that convert text into word tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into an ordered sequence of normalized tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A regex-based tokenizer that extracts runs of ASCII letters and
/// lower-cases them.
///
/// Everything that is not a letter (digits, punctuation, whitespace) acts as
/// a separator, so `"Hello, world 2!"` tokenizes to `["hello", "world"]`.
#[derive(Clone, Debug)]
pub struct LetterTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl LetterTokenizer {
    /// Create a new letter tokenizer with the default pattern.
    ///
    /// The default pattern `[A-Za-z]+` matches runs of ASCII letters.
    pub fn new() -> Result<Self> {
        Self::with_pattern("[A-Za-z]+")
    }

    /// Create a new tokenizer with a custom token pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| LexigraphError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(LetterTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for LetterTokenizer {
    fn default() -> Self {
        Self::new().expect("Default letter pattern should be valid")
    }
}

impl Tokenizer for LetterTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self
            .pattern
            .find_iter(text)
            .map(|mat| mat.as_str().to_lowercase())
            .collect();

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "letter"
    }
}
