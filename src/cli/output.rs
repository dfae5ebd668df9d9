//! Output formatting for CLI commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexigraphArgs, OutputFormat};
use crate::error::Result;
use crate::storage::PATH_ARROW;

/// Result structure for graph construction.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildResult {
    pub tokens: usize,
    pub nodes: usize,
    pub edges: usize,
    pub tokens_file: Option<String>,
    pub edges_file: Option<String>,
    pub dot_file: Option<String>,
}

impl fmt::Display for BuildResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph built: {} tokens, {} nodes, {} edges",
            self.tokens, self.nodes, self.edges
        )?;
        if let Some(path) = &self.tokens_file {
            write!(f, "\nToken list written to: {path}")?;
        }
        if let Some(path) = &self.edges_file {
            write!(f, "\nEdge dump written to: {path}")?;
        }
        if let Some(path) = &self.dot_file {
            write!(f, "\nDOT rendering written to: {path}")?;
        }
        Ok(())
    }
}

/// Result structure for bridge-word queries.
#[derive(Debug, Serialize, Deserialize)]
pub struct BridgeResult {
    pub word1: String,
    pub word2: String,
    /// Whether this is the direct one-hop lookup or the search report.
    pub direct: bool,
    pub bridge_words: Vec<String>,
    pub report: String,
}

impl fmt::Display for BridgeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.report)
    }
}

/// Result structure for text augmentation.
#[derive(Debug, Serialize, Deserialize)]
pub struct AugmentResult {
    pub input: String,
    pub output: String,
}

impl fmt::Display for AugmentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.output)
    }
}

/// Result structure for shortest-path queries.
#[derive(Debug, Serialize, Deserialize)]
pub struct PathResult {
    pub word1: String,
    pub word2: String,
    pub path: Option<Vec<String>>,
    pub length: Option<usize>,
    pub dot_file: Option<String>,
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.path, self.length) {
            (Some(path), Some(length)) => {
                write!(
                    f,
                    "Shortest path: {}, length {length}",
                    path.join(PATH_ARROW)
                )?;
                if let Some(dot) = &self.dot_file {
                    write!(f, "\nDOT rendering written to: {dot}")?;
                }
                Ok(())
            }
            _ => write!(f, "No path between {} and {}!", self.word1, self.word2),
        }
    }
}

/// Result structure for random walks.
#[derive(Debug, Serialize, Deserialize)]
pub struct WalkResult {
    pub start: String,
    pub path: Option<Vec<String>>,
    pub output_file: Option<String>,
    pub dot_file: Option<String>,
}

impl fmt::Display for WalkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => {
                write!(f, "Random walk: {}", path.join(PATH_ARROW))?;
                if let Some(out) = &self.output_file {
                    write!(f, "\nWalk written to: {out}")?;
                }
                if let Some(dot) = &self.dot_file {
                    write!(f, "\nDOT rendering written to: {dot}")?;
                }
                Ok(())
            }
            None => write!(f, "The start node does not exist in the graph!"),
        }
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + fmt::Display>(result: &T, args: &LexigraphArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{result}");
            Ok(())
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_result_display() {
        let found = PathResult {
            word1: "the".to_string(),
            word2: "fox".to_string(),
            path: Some(vec![
                "the".to_string(),
                "quick".to_string(),
                "fox".to_string(),
            ]),
            length: Some(2),
            dot_file: None,
        };
        assert_eq!(
            found.to_string(),
            "Shortest path: the → quick → fox, length 2"
        );

        let missing = PathResult {
            word1: "the".to_string(),
            word2: "ghost".to_string(),
            path: None,
            length: None,
            dot_file: None,
        };
        assert_eq!(missing.to_string(), "No path between the and ghost!");
    }

    #[test]
    fn test_walk_result_display() {
        let missing = WalkResult {
            start: "ghost".to_string(),
            path: None,
            output_file: None,
            dot_file: None,
        };
        assert_eq!(
            missing.to_string(),
            "The start node does not exist in the graph!"
        );

        let found = WalkResult {
            start: "the".to_string(),
            path: Some(vec!["the".to_string(), "fox".to_string()]),
            output_file: Some("walk.txt".to_string()),
            dot_file: None,
        };
        assert_eq!(
            found.to_string(),
            "Random walk: the → fox\nWalk written to: walk.txt"
        );
    }

    #[test]
    fn test_json_round_trip() {
        let result = AugmentResult {
            input: "the fox".to_string(),
            output: "the quick fox".to_string(),
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: AugmentResult = serde_json::from_str(&json).unwrap();

        assert_eq!(back.output, "the quick fox");
    }
}
