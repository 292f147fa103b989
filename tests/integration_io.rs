// tests/integration_io.rs
//! End-to-end: files on disk, sessions, renderings and the command line.

use std::fs;

use clap::Parser;
use tempfile::TempDir;
use wordgraph_core::cli::handlers::Session;
use wordgraph_core::cli::{Cli, Commands};
use wordgraph_core::config::Config;
use wordgraph_core::error::ErrorKind;
use wordgraph_core::reporting::Transcript;
use wordgraph_core::{io, render, Tokenizer, WordGraph};

const CORPUS: &str = "The quick brown fox jumps over the lazy dog.\n\
                      The fox jumps over the dog again.\n\
                      Quick brown fox jumps.\n";

fn corpus_graph() -> WordGraph {
    WordGraph::from_document(&Tokenizer::tokenize(CORPUS))
}

fn session_in(dir: &TempDir) -> Session {
    let mut config = Config::new();
    config.walk.output = dir.path().join("random_walk.txt");
    config.walk.seed = Some(11);
    Session::with_graph(corpus_graph(), config, false, Transcript::silent())
}

#[test]
fn test_load_graph_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, CORPUS).unwrap();

    let g = io::load_graph(&path).unwrap();
    assert_eq!(g.weight("brown", "fox"), Some(2));
    assert_eq!(g.sentences().len(), 3);
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = io::load_graph(&dir.path().join("nope.txt")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn test_invalid_utf8_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.txt");
    fs::write(&path, b"\xff\xfe\x00\x80").unwrap();
    assert_eq!(io::load_text(&path).unwrap_err().kind(), ErrorKind::Io);
}

#[test]
fn test_save_report_creates_parents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/deeper/report.txt");
    io::save_report(&path, "hello\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
}

#[test]
fn test_append_walk_accumulates_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("walks.txt");
    io::append_walk(&path, &["a", "b", "c"]).unwrap();
    io::append_walk(&path, &["d"]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "a b c\nd\n");
}

#[test]
fn test_dot_labels_repeated_bigrams() {
    let dot = render::to_dot(&corpus_graph());
    assert!(dot.starts_with("digraph wordgraph {"));
    assert!(dot.contains("\"brown\" -> \"fox\" [label=\"2\"];"));
    assert!(dot.contains("\"lazy\" -> \"dog\";"));
    assert!(dot.trim_end().ends_with('}'));
}

#[test]
fn test_dot_highlights_path_edges() {
    let dot = render::to_dot_highlighted(&corpus_graph(), &["quick", "brown", "fox"]);
    assert!(dot.contains("\"quick\" -> \"brown\" [label=\"2\", color=red, penwidth=2];"));
    assert!(dot.contains("\"brown\" -> \"fox\" [label=\"2\", color=red, penwidth=2];"));
    assert!(dot.contains("\"lazy\" -> \"dog\";"));
}

#[test]
fn test_session_bridge_and_save() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);
    session.handle_bridge("Quick", "FOX").unwrap();
    session.handle_bridge("the", "fox").unwrap();
    session.handle_bridge("nothing", "fox").unwrap();

    assert_eq!(
        session.transcript().lines(),
        [
            "The bridge word from \"quick\" to \"fox\" is: \"brown\"",
            "No bridge words from \"the\" to \"fox\"!",
            "No \"nothing\" in the graph!",
        ]
    );

    let save = dir.path().join("out/results.txt");
    session.finish(Some(&save)).unwrap();
    let saved = fs::read_to_string(&save).unwrap();
    assert_eq!(saved.lines().count(), 3);
    assert!(saved.ends_with('\n'));
}

#[test]
fn test_session_path_writes_highlight() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);
    let dot = dir.path().join("path.dot");
    session.handle_path("quick", Some("jumps"), false, Some(&dot)).unwrap();

    let lines = session.transcript().lines();
    assert_eq!(lines[0], "Shortest path from \"quick\" to \"jumps\" (length 7):");
    assert_eq!(lines[1], "  quick -> brown -> fox -> jumps");
    assert!(fs::read_to_string(&dot).unwrap().contains("color=red"));
}

#[test]
fn test_session_walk_appends_to_configured_file() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);
    session.handle_walk(None, None, None).unwrap();
    session.handle_walk(Some(3), Some(2), None).unwrap();

    let written = fs::read_to_string(dir.path().join("random_walk.txt")).unwrap();
    let walks: Vec<&str> = written.lines().collect();
    assert_eq!(walks.len(), 2);
    assert_eq!(walks[1].split(' ').count(), 2);
}

#[test]
fn test_session_rank_rejects_bad_damping() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);
    assert!(session.handle_rank(None, None, Some(2.0)).is_err());
    session.handle_rank(Some("fox"), None, None).unwrap();
    assert!(session.transcript().lines()[0].starts_with("PageRank of \"fox\": 0."));
}

#[test]
fn test_session_json_output() {
    let mut session = Session::with_graph(corpus_graph(), Config::new(), true, Transcript::silent());
    session.handle_bridge("quick", "fox").unwrap();
    session.handle_path("dog", Some("zzz"), false, None).unwrap();

    let bridges: serde_json::Value = serde_json::from_str(&session.transcript().lines()[0]).unwrap();
    assert_eq!(bridges["bridges"][0], "brown");
    let missing: serde_json::Value = serde_json::from_str(&session.transcript().lines()[1]).unwrap();
    assert_eq!(missing["error"], "End word \"zzz\" not found");
}

#[test]
fn test_cli_parses_path_all() {
    let cli = Cli::try_parse_from([
        "wordgraph", "--file", "in.txt", "path", "a", "b", "--all", "--json",
    ])
    .unwrap();
    assert!(cli.json);
    assert!(matches!(
        cli.command,
        Commands::Path { ref start, end: Some(ref end), all: true, dot: None }
            if start == "a" && end == "b"
    ));
}

#[test]
fn test_cli_all_requires_end() {
    assert!(Cli::try_parse_from(["wordgraph", "-f", "in.txt", "path", "a", "--all"]).is_err());
}

#[test]
fn test_cli_generate_joins_words() {
    let cli =
        Cli::try_parse_from(["wordgraph", "-f", "in.txt", "generate", "quick", "fox", "--seed", "4"])
            .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Generate { ref text, seed: Some(4) } if text.len() == 2
    ));
}

#[test]
fn test_session_json_all_paths_writes_highlight() {
    let dir = TempDir::new().unwrap();
    let graph = WordGraph::from_document(&Tokenizer::tokenize("a b d a c d"));
    let mut session = Session::with_graph(graph, Config::new(), true, Transcript::silent());
    let dot = dir.path().join("all.dot");
    session.handle_path("a", Some("d"), true, Some(&dot)).unwrap();

    let value: serde_json::Value = serde_json::from_str(&session.transcript().lines()[0]).unwrap();
    assert_eq!(value["cost"], 2);
    assert_eq!(value["paths"].as_array().map(Vec::len), Some(2));
    let rendered = fs::read_to_string(&dot).unwrap();
    assert!(rendered.contains("\"a\" -> \"b\" [color=red, penwidth=2];"));
}

#[test]
fn test_session_walk_rejects_zero_steps() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);
    assert!(session.handle_walk(None, Some(0), None).is_err());
    assert!(!dir.path().join("random_walk.txt").exists());
}

#[test]
fn test_cli_rejects_zero_max_steps() {
    assert!(Cli::try_parse_from(["wordgraph", "-f", "in.txt", "walk", "--max-steps", "0"]).is_err());
    let cli = Cli::try_parse_from(["wordgraph", "-f", "in.txt", "walk", "--max-steps", "3"]).unwrap();
    assert!(matches!(cli.command, Commands::Walk { max_steps: Some(3), .. }));
}
