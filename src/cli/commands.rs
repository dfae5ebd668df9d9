//! Command implementations for the Lexigraph CLI.

use std::path::Path;

use crate::analysis::{LetterTokenizer, Tokenizer, normalize};
use crate::augment;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::graph::{WordGraph, build_graph};
use crate::query::{direct_bridges, find_bridge_words, random_walk, shortest_path};
use crate::render;
use crate::storage;

/// Execute a CLI command.
pub fn execute_command(args: LexigraphArgs) -> Result<()> {
    match &args.command {
        Command::Build(build_args) => build(build_args.clone(), &args),
        Command::Bridge(bridge_args) => bridge(bridge_args.clone(), &args),
        Command::Augment(augment_args) => augment_text(augment_args.clone(), &args),
        Command::Path(path_args) => path(path_args.clone(), &args),
        Command::Walk(walk_args) => walk(walk_args.clone(), &args),
    }
}

/// Tokenize the source text and build the graph every command queries.
fn load(text_file: &Path, cli_args: &LexigraphArgs) -> Result<(Vec<String>, WordGraph)> {
    if cli_args.verbosity() > 1 {
        println!("Reading text from: {}", text_file.display());
    }

    let content = storage::read_source(text_file)?;
    let tokenizer = LetterTokenizer::new()?;
    let tokens = tokenizer.tokenize(&content)?;
    let graph = build_graph(&tokens);

    if cli_args.verbosity() > 1 {
        println!(
            "Graph: {} nodes, {} edges from {} tokens",
            graph.node_count(),
            graph.edge_count(),
            tokens.len()
        );
    }

    Ok((tokens, graph))
}

/// Build the graph and dump its by-products.
fn build(args: BuildArgs, cli_args: &LexigraphArgs) -> Result<()> {
    let (tokens, graph) = load(&args.text_file, cli_args)?;

    if let Some(tokens_file) = &args.tokens_file {
        storage::write_token_list(tokens_file, &tokens)?;
    }
    if let Some(edges_file) = &args.edges_file {
        storage::write_edge_list(edges_file, &graph)?;
    }
    if let Some(dot_file) = &args.dot_file {
        render::write_dot(dot_file, &graph, None)?;
    }
    if args.print_edges {
        print!("{}", storage::edge_list(&graph));
    }

    output_result(
        &BuildResult {
            tokens: tokens.len(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            tokens_file: args.tokens_file.map(|p| p.display().to_string()),
            edges_file: args.edges_file.map(|p| p.display().to_string()),
            dot_file: args.dot_file.map(|p| p.display().to_string()),
        },
        cli_args,
    )
}

/// Report bridge words between two words.
fn bridge(args: BridgeArgs, cli_args: &LexigraphArgs) -> Result<()> {
    let (_, graph) = load(&args.text_file, cli_args)?;
    let word1 = normalize(&args.word1);
    let word2 = normalize(&args.word2);

    let (bridge_words, report) = if args.direct {
        let candidates = direct_bridges(&graph, &word1, &word2);
        let report = if candidates.is_empty() {
            format!("No direct bridge words from {word1} to {word2}!")
        } else {
            format!(
                "The direct bridge words from {word1} to {word2} are: {}.",
                candidates.join(", ")
            )
        };
        (candidates, report)
    } else {
        let report = find_bridge_words(&graph, &word1, &word2);
        let words = match &report {
            crate::query::BridgeWordReport::Bridges(words) => words.clone(),
            _ => Vec::new(),
        };
        (words, report.to_string())
    };

    output_result(
        &BridgeResult {
            word1,
            word2,
            direct: args.direct,
            bridge_words,
            report,
        },
        cli_args,
    )
}

/// Augment a phrase with bridge words.
fn augment_text(args: AugmentArgs, cli_args: &LexigraphArgs) -> Result<()> {
    let (_, graph) = load(&args.text_file, cli_args)?;
    let output = augment::augment(&graph, &args.phrase);

    output_result(
        &AugmentResult {
            input: args.phrase,
            output,
        },
        cli_args,
    )
}

/// Compute the shortest path between two words.
fn path(args: PathArgs, cli_args: &LexigraphArgs) -> Result<()> {
    let (_, graph) = load(&args.text_file, cli_args)?;
    let word1 = normalize(&args.word1);
    let word2 = normalize(&args.word2);

    let found = shortest_path(&graph, &word1, &word2);

    let mut dot_file = None;
    if let (Some(result), Some(dot_path)) = (&found, &args.dot_file) {
        render::write_dot(dot_path, &graph, Some(&result.path))?;
        dot_file = Some(dot_path.display().to_string());
    }

    output_result(
        &PathResult {
            word1,
            word2,
            length: found.as_ref().map(|r| r.length),
            path: found.map(|r| r.path),
            dot_file,
        },
        cli_args,
    )
}

/// Random-walk the graph from a start word.
fn walk(args: WalkArgs, cli_args: &LexigraphArgs) -> Result<()> {
    let (_, graph) = load(&args.text_file, cli_args)?;
    let start = normalize(&args.start);

    let walk_path = random_walk(&graph, &start);

    let mut output_file = None;
    let mut dot_file = None;
    if let Some(walk_path) = &walk_path {
        if let Some(out_path) = &args.output_file {
            storage::write_walk(out_path, walk_path)?;
            output_file = Some(out_path.display().to_string());
        }
        if let Some(dot_path) = &args.dot_file {
            render::write_dot(dot_path, &graph, Some(walk_path))?;
            dot_file = Some(dot_path.display().to_string());
        }
    }

    output_result(
        &WalkResult {
            start,
            path: walk_path,
            output_file,
            dot_file,
        },
        cli_args,
    )
}
