//! Command line argument parsing for the Lexigraph CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lexigraph - a word adjacency graph engine for exploratory text analysis
#[derive(Parser, Debug, Clone)]
#[command(name = "lexigraph")]
#[command(about = "Build a word adjacency graph from text and query it")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Lexigraph Contributors")]
#[command(long_about = None)]
pub struct LexigraphArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexigraphArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the graph from a text file and dump its edges
    Build(BuildArgs),

    /// Report bridge words between two words
    Bridge(BridgeArgs),

    /// Insert bridge words into a phrase
    Augment(AugmentArgs),

    /// Compute the shortest path between two words
    Path(PathArgs),

    /// Random-walk the graph from a start word
    Walk(WalkArgs),
}

/// Arguments for building the graph
#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// Path to the source text file
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// Write the token list to this file, one word per line
    #[arg(short, long, value_name = "TOKENS_FILE")]
    pub tokens_file: Option<PathBuf>,

    /// Write the edge dump to this file, one source→destination per line
    #[arg(short, long, value_name = "EDGES_FILE")]
    pub edges_file: Option<PathBuf>,

    /// Write a Graphviz DOT rendering to this file
    #[arg(short, long, value_name = "DOT_FILE")]
    pub dot_file: Option<PathBuf>,

    /// Print the edge dump to stdout
    #[arg(long)]
    pub print_edges: bool,
}

/// Arguments for the bridge-word report
#[derive(Parser, Debug, Clone)]
pub struct BridgeArgs {
    /// Path to the source text file
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// The first word
    #[arg(value_name = "WORD1")]
    pub word1: String,

    /// The second word
    #[arg(value_name = "WORD2")]
    pub word2: String,

    /// Report only direct one-hop bridges instead of the search report
    #[arg(long)]
    pub direct: bool,
}

/// Arguments for text augmentation
#[derive(Parser, Debug, Clone)]
pub struct AugmentArgs {
    /// Path to the source text file
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// The phrase to augment with bridge words
    #[arg(value_name = "PHRASE")]
    pub phrase: String,
}

/// Arguments for shortest-path queries
#[derive(Parser, Debug, Clone)]
pub struct PathArgs {
    /// Path to the source text file
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// The start word
    #[arg(value_name = "WORD1")]
    pub word1: String,

    /// The destination word
    #[arg(value_name = "WORD2")]
    pub word2: String,

    /// Write a DOT rendering with the path highlighted to this file
    #[arg(short, long, value_name = "DOT_FILE")]
    pub dot_file: Option<PathBuf>,
}

/// Arguments for random walks
#[derive(Parser, Debug, Clone)]
pub struct WalkArgs {
    /// Path to the source text file
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// The start word
    #[arg(value_name = "START")]
    pub start: String,

    /// Write the walk's node sequence to this file
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output_file: Option<PathBuf>,

    /// Write a DOT rendering with the walk highlighted to this file
    #[arg(short, long, value_name = "DOT_FILE")]
    pub dot_file: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
