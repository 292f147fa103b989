// src/render.rs
//! Graphviz DOT rendering of the word graph.
//!
//! Edges carry a weight label only when the bigram occurred more than once.
//! The highlighted variant paints the edges of a node sequence red.

use std::collections::HashSet;
use std::fmt::Write;

use crate::graph::WordGraph;

/// Renders the full graph.
#[must_use]
pub fn to_dot(graph: &WordGraph) -> String {
    render(graph, &HashSet::new())
}

/// Renders the graph with the consecutive edges of `path` highlighted.
#[must_use]
pub fn to_dot_highlighted<S: AsRef<str>>(graph: &WordGraph, path: &[S]) -> String {
    let highlight: HashSet<(&str, &str)> = path
        .windows(2)
        .filter_map(|pair| match pair {
            [a, b] => Some((a.as_ref(), b.as_ref())),
            _ => None,
        })
        .collect();
    render(graph, &highlight)
}

fn render<'a>(graph: &'a WordGraph, highlight: &HashSet<(&'a str, &'a str)>) -> String {
    let mut out = String::from("digraph wordgraph {\n");
    out.push_str("    node [shape=ellipse, style=filled, fillcolor=lightblue];\n");

    for node in graph.nodes() {
        let _ = writeln!(out, "    {};", quote(node));
    }

    for (src, dst, weight) in graph.edges() {
        let mut attrs = Vec::new();
        if weight > 1 {
            attrs.push(format!("label=\"{weight}\""));
        }
        if highlight.contains(&(src, dst)) {
            attrs.push("color=red".to_string());
            attrs.push("penwidth=2".to_string());
        }
        let attrs = if attrs.is_empty() {
            String::new()
        } else {
            format!(" [{}]", attrs.join(", "))
        };
        let _ = writeln!(out, "    {} -> {}{attrs};", quote(src), quote(dst));
    }

    out.push_str("}\n");
    out
}

fn quote(word: &str) -> String {
    format!("\"{}\"", word.replace('"', "\\\""))
}
