// src/graph/rank/mod.rs
pub mod pagerank;
pub mod tfidf;

use std::collections::HashMap;

use crate::config::RankConfig;
use crate::graph::store::WordGraph;
use crate::text::normalize_word;

/// Orchestrates the statistics pass and the power iteration.
pub struct RankEngine;

impl RankEngine {
    /// `PageRank` of every node, seeded with the graph's sentence TF-IDF weights.
    #[must_use]
    pub fn compute(graph: &WordGraph, params: &RankConfig) -> HashMap<String, f64> {
        let seeds = tfidf::seed_weights(graph.sentences());
        pagerank::compute(graph, &seeds, params)
    }

    /// `PageRank` of a single word, rounded to 4 decimals. Absent words score 0.
    #[must_use]
    pub fn page_rank(graph: &WordGraph, word: &str, params: &RankConfig) -> f64 {
        let word = normalize_word(word);
        if !graph.has_node(&word) {
            return 0.0;
        }
        Self::compute(graph, params)
            .get(&word)
            .map_or(0.0, |r| round4(*r))
    }

    /// Words ranked by importance, highest first; ties break alphabetically.
    #[must_use]
    pub fn ranked(graph: &WordGraph, params: &RankConfig) -> Vec<(String, f64)> {
        let mut ranked: Vec<_> = Self::compute(graph, params).into_iter().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked
    }
}

/// Rounds to 4 decimal places.
#[must_use]
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
