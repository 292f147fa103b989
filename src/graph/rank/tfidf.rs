// src/graph/rank/tfidf.rs
//! Sentence-level TF-IDF statistics used to seed `PageRank`.

use std::collections::HashMap;

/// Computes one global weight per word from a list of sentences.
///
/// Each sentence is a document. Term frequency is augmented
/// (`0.5 + 0.5 * count / max_count`), inverse document frequency is
/// `ln(N / (1 + df))`, and a word's weight is the sum of `tf * idf` over
/// every sentence it occurs in.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn seed_weights<S: AsRef<str>>(sentences: &[Vec<S>]) -> HashMap<String, f64> {
    let counts: Vec<HashMap<&str, usize>> = sentences.iter().map(|s| count_terms(s)).collect();
    let doc_freq = document_frequency(&counts);
    let total_docs = sentences.len() as f64;

    let mut weights: HashMap<String, f64> = HashMap::new();
    for doc in &counts {
        let max_count = doc.values().copied().max().unwrap_or(1) as f64;
        for (&word, &count) in doc {
            let tf = 0.5 + 0.5 * (count as f64 / max_count);
            let df = doc_freq.get(word).copied().unwrap_or(0) as f64;
            let idf = (total_docs / (1.0 + df)).ln();
            *weights.entry(word.to_string()).or_default() += tf * idf;
        }
    }
    weights
}

fn count_terms<S: AsRef<str>>(sentence: &[S]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for word in sentence {
        *counts.entry(word.as_ref()).or_default() += 1;
    }
    counts
}

fn document_frequency<'a>(docs: &[HashMap<&'a str, usize>]) -> HashMap<&'a str, usize> {
    let mut df = HashMap::new();
    for doc in docs {
        for &word in doc.keys() {
            *df.entry(word).or_default() += 1;
        }
    }
    df
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_rare_word_outweighs_common_word() {
        let sentences = vec![s(&["a", "b"]), s(&["a", "c"]), s(&["a", "d"]), s(&["e"])];
        let w = seed_weights(&sentences);
        // "b": df=1 -> ln(4/2); "a": df=3 -> ln(4/4) = 0.
        assert!((w["b"] - (2.0f64).ln()).abs() < 1e-12);
        assert!(w["a"].abs() < 1e-12);
    }

    #[test]
    fn test_augmented_tf_uses_sentence_maximum() {
        let sentences = vec![s(&["x", "x", "y"]), s(&["z"]), s(&["z"]), s(&["z"])];
        let w = seed_weights(&sentences);
        let idf = (4.0f64 / 2.0).ln();
        assert!((w["x"] - idf).abs() < 1e-12);
        assert!((w["y"] - 0.75 * idf).abs() < 1e-12);
    }

    #[test]
    fn test_no_sentences() {
        let empty: Vec<Vec<String>> = Vec::new();
        assert!(seed_weights(&empty).is_empty());
    }
}
