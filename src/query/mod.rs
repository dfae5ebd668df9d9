//! Structural queries over the word adjacency graph.
//!
//! Every query treats the graph as read-only, and every user-provokable
//! "failure" (unknown word, no path, no bridge words) is an ordinary result
//! value rather than an error.

pub mod bridge;
pub mod random_walk;
pub mod shortest_path;

pub use bridge::{BridgeWordReport, direct_bridges, find_bridge_words};
pub use random_walk::random_walk;
pub use shortest_path::{ShortestPath, shortest_path};
