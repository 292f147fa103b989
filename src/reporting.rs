// src/reporting.rs
//! Console output formatting for query results.
//!
//! Every line printed is also kept, uncolored, in a [`Transcript`] so the
//! session can be dumped to a file afterwards.

use std::collections::BTreeMap;

use colored::Colorize;

use crate::error::GraphError;
use crate::graph::{Route, Walk, WalkEnd, WordGraph};

/// Tone of a reported line; selects its color on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Success,
    Failure,
}

/// Printed lines of a session, kept for the result sink.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
    quiet: bool,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A transcript that records without printing.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            lines: Vec::new(),
            quiet: true,
        }
    }

    pub fn line(&mut self, tone: Tone, text: impl Into<String>) {
        let text = text.into();
        if !self.quiet {
            match tone {
                Tone::Plain => println!("{text}"),
                Tone::Heading => println!("{}", text.bold()),
                Tone::Success => println!("{} {text}", "✓".green().bold()),
                Tone::Failure => println!("{} {text}", "✖".red().bold()),
            }
        }
        self.lines.push(text);
    }

    pub fn plain(&mut self, text: impl Into<String>) {
        self.line(Tone::Plain, text);
    }

    /// Reports a query error as a failure line.
    pub fn failure(&mut self, err: &GraphError) {
        self.line(Tone::Failure, err.to_string());
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The transcript as file contents, one line each.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

#[must_use]
pub fn bridge_message(first: &str, second: &str, bridges: &[String]) -> String {
    let quoted: Vec<String> = bridges.iter().map(|b| format!("\"{b}\"")).collect();
    let (noun, verb) = if bridges.len() == 1 { ("word", "is") } else { ("words", "are") };
    format!(
        "The bridge {noun} from \"{first}\" to \"{second}\" {verb}: {}",
        quoted.join(", ")
    )
}

#[must_use]
pub fn arrow_path<S: AsRef<str>>(path: &[S]) -> String {
    path.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" -> ")
}

/// Lines describing one single-target route.
#[must_use]
pub fn route_lines(start: &str, end: &str, route: &Route) -> Vec<String> {
    vec![
        format!("Shortest path from \"{start}\" to \"{end}\" (length {}):", route.cost),
        format!("  {}", arrow_path(&route.path)),
    ]
}

/// Lines for every equal-cost route to one target.
#[must_use]
pub fn all_route_lines(start: &str, end: &str, cost: u64, paths: &[Vec<String>]) -> Vec<String> {
    let mut lines = vec![format!(
        "{} shortest path(s) from \"{start}\" to \"{end}\" (length {cost}):",
        paths.len()
    )];
    lines.extend(
        paths
            .iter()
            .enumerate()
            .map(|(i, p)| format!("  Path {}: {}", i + 1, arrow_path(p))),
    );
    lines
}

/// Lines for an all-targets search, ordered by cost then word.
#[must_use]
pub fn routes_lines(start: &str, routes: &BTreeMap<String, Route>) -> Vec<String> {
    let mut ordered: Vec<(&String, &Route)> = routes.iter().collect();
    ordered.sort_by(|a, b| a.1.cost.cmp(&b.1.cost).then_with(|| a.0.cmp(b.0)));

    let mut lines = vec![format!(
        "Shortest paths from \"{start}\" to {} word(s):",
        routes.len()
    )];
    lines.extend(ordered.into_iter().map(|(target, route)| {
        format!("  to \"{target}\" ({}): {}", route.cost, arrow_path(&route.path))
    }));
    lines
}

/// Top `limit` entries of a rank listing.
#[must_use]
pub fn rank_lines(ranked: &[(String, f64)], limit: usize) -> Vec<String> {
    let width = ranked
        .iter()
        .take(limit)
        .map(|(w, _)| w.len())
        .max()
        .unwrap_or(0);
    ranked
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, (word, rank))| format!("{:>3}. {word:<width$}  {rank:.4}", i + 1))
        .collect()
}

#[must_use]
pub fn walk_message(walk: &Walk) -> String {
    let reason = match walk.end {
        WalkEnd::Stopped => "stopped",
        WalkEnd::DeadEnd => "dead end",
        WalkEnd::RepeatedEdge => "repeated edge",
    };
    format!("Random walk ({reason}): {}", arrow_path(&walk.path))
}

/// Adjacency listing of the whole graph, nodes in canonical order.
#[must_use]
pub fn structure_lines(graph: &WordGraph) -> Vec<String> {
    let mut lines = vec![format!(
        "Directed graph: {} node(s), {} edge(s)",
        graph.node_count(),
        graph.edge_count()
    )];
    for node in graph.nodes() {
        let succ: Vec<String> = graph
            .successors(node)
            .iter()
            .map(|(dst, w)| format!("{dst}({w})"))
            .collect();
        if succ.is_empty() {
            lines.push(format!("  {node}"));
        } else {
            lines.push(format!("  {node} -> {}", succ.join(", ")));
        }
    }
    lines
}
