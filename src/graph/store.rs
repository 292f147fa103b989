// src/graph/store.rs
//! The word-adjacency graph structure and query interface.

use indexmap::IndexMap;
use serde::Serialize;

use crate::text::{normalize_word, Document};

/// Successors of a node, in first-observation order, with bigram counts.
pub type Successors = IndexMap<String, u32>;

static NO_SUCCESSORS: std::sync::LazyLock<Successors> = std::sync::LazyLock::new(IndexMap::new);

/// Weighted directed graph over normalized words.
///
/// An edge `a -> b` with weight `n` means `b` immediately followed `a`
/// exactly `n` times in the source. Every word seen is a node, including
/// the final word of the stream.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WordGraph {
    adjacency: IndexMap<String, Successors>,
    #[serde(skip)]
    sentences: Vec<Vec<String>>,
}

impl WordGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a tokenized document, keeping its sentences for ranking.
    #[must_use]
    pub fn from_document(doc: &Document) -> Self {
        let mut graph = Self::new();
        graph.load(doc);
        graph
    }

    /// Replaces the graph contents with the given document.
    pub fn load(&mut self, doc: &Document) {
        self.build(&doc.words);
        self.sentences.clone_from(&doc.sentences);
    }

    /// Clears the graph and rebuilds its edges from a word stream.
    pub fn build<S: AsRef<str>>(&mut self, words: &[S]) {
        self.adjacency.clear();
        self.sentences.clear();

        for pair in words.windows(2) {
            let [src, dst] = pair else { continue };
            *self
                .adjacency
                .entry(src.as_ref().to_string())
                .or_default()
                .entry(dst.as_ref().to_string())
                .or_default() += 1;
            self.ensure_node(dst.as_ref());
        }

        if let Some(last) = words.last() {
            self.ensure_node(last.as_ref());
        }

        tracing::debug!(
            nodes = self.node_count(),
            edges = self.edge_count(),
            "word graph built"
        );
    }

    fn ensure_node(&mut self, word: &str) {
        if !self.adjacency.contains_key(word) {
            self.adjacency.insert(word.to_string(), IndexMap::new());
        }
    }

    /// Looks `word` up as given, then case-folded.
    fn lookup(&self, word: &str) -> Option<(&String, &Successors)> {
        self.adjacency.get_key_value(word).or_else(|| {
            let folded = normalize_word(word);
            if folded == word {
                None
            } else {
                self.adjacency.get_key_value(folded.as_str())
            }
        })
    }

    #[must_use]
    pub fn has_node(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Returns the ordered successor map of `word` (empty if absent).
    #[must_use]
    pub fn successors(&self, word: &str) -> &Successors {
        self.lookup(word).map_or(&*NO_SUCCESSORS, |(_, succ)| succ)
    }

    /// The graph-owned key and successors of `word`.
    pub(crate) fn node_entry(&self, word: &str) -> Option<(&str, &Successors)> {
        self.lookup(word).map(|(k, v)| (k.as_str(), v))
    }

    /// Weight of the edge `src -> dst`, if it exists.
    #[must_use]
    pub fn weight(&self, src: &str, dst: &str) -> Option<u32> {
        let (_, succ) = self.lookup(src)?;
        succ.get(dst)
            .or_else(|| succ.get(normalize_word(dst).as_str()))
            .copied()
    }

    /// All nodes in canonical (lexicographic) order.
    #[must_use]
    pub fn nodes(&self) -> Vec<&str> {
        let mut nodes: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        nodes.sort_unstable();
        nodes
    }

    /// Every edge as `(src, dst, weight)`, in construction order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u32)> {
        self.adjacency.iter().flat_map(|(src, succ)| {
            succ.iter()
                .map(move |(dst, w)| (src.as_str(), dst.as_str(), *w))
        })
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Sentences of the loaded document, as normalized word lists.
    #[must_use]
    pub fn sentences(&self) -> &[Vec<String>] {
        &self.sentences
    }
}
