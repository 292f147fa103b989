// src/graph/bridge.rs
//! Bridge words: for `a` and `c`, every `b` with edges `a -> b` and `b -> c`.

use rand::seq::SliceRandom;
use rand::Rng;

use super::store::WordGraph;
use crate::error::{GraphError, Result};
use crate::text::normalize_word;

/// Returns the bridge words from `first` to `second`, in the order `first`'s
/// successors were observed.
///
/// # Errors
/// Returns a not-found error naming whichever words are absent, or
/// [`GraphError::NoBridge`] when both exist but nothing links them.
pub fn bridge_words(graph: &WordGraph, first: &str, second: &str) -> Result<Vec<String>> {
    let first = normalize_word(first);
    let second = normalize_word(second);

    match (graph.has_node(&first), graph.has_node(&second)) {
        (false, false) => return Err(GraphError::BothMissing { first, second }),
        (false, true) => return Err(GraphError::WordMissing(first)),
        (true, false) => return Err(GraphError::WordMissing(second)),
        (true, true) => {}
    }

    let bridges: Vec<String> = bridges_between(graph, &first, &second)
        .into_iter()
        .map(str::to_string)
        .collect();

    if bridges.is_empty() {
        return Err(GraphError::NoBridge {
            from: first,
            to: second,
        });
    }
    Ok(bridges)
}

/// Raw bridge lookup over already-normalized words. Absent words yield nothing.
#[must_use]
pub fn bridges_between<'g>(graph: &'g WordGraph, from: &str, to: &str) -> Vec<&'g str> {
    graph
        .successors(from)
        .keys()
        .filter(|b| graph.successors(b).contains_key(to))
        .map(String::as_str)
        .collect()
}

/// Rewrites `input`, inserting a random bridge word between each adjacent
/// pair that has one.
///
/// Inputs with fewer than two words come back unchanged.
pub fn generate_text<R: Rng + ?Sized>(graph: &WordGraph, input: &str, rng: &mut R) -> String {
    let words = split_input(input);
    let Some(first) = words.first() else {
        return input.to_string();
    };
    if words.len() < 2 {
        return input.to_string();
    }

    let mut out: Vec<&str> = Vec::with_capacity(words.len() * 2);
    out.push(first);

    for pair in words.windows(2) {
        let [current, next] = pair else { continue };
        if graph.has_node(current) {
            let bridges = bridges_between(graph, current, next);
            if let Some(bridge) = bridges.choose(rng) {
                tracing::trace!(%current, %next, %bridge, "bridge inserted");
                out.push(*bridge);
            }
        }
        out.push(next);
    }

    out.join(" ")
}

fn split_input(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split_whitespace()
        .map(|w| w.trim_end_matches([',', '.', '!', '?']).to_string())
        .filter(|w| !w.is_empty())
        .collect()
}
