//! # Lexigraph
//!
//! A word adjacency graph engine for exploratory text analysis.
//!
//! Lexigraph turns a body of text into a directed graph whose nodes are
//! lower-cased words and whose edges record "this word immediately precedes
//! that word", with duplicates kept so edge multiplicity is preserved. On top
//! of that graph it answers structural queries:
//!
//! - bridge-word discovery (direct one-hop bridges and a DFS-based report)
//! - text augmentation by inserting bridge words into a phrase
//! - shortest-path search between two words
//! - randomized walks that stop on a repeated edge or a dead end
//!
//! The graph is built once per run and treated as read-only by every query.

pub mod analysis;
pub mod augment;
pub mod cli;
pub mod error;
pub mod graph;
pub mod query;
pub mod render;
pub mod storage;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
