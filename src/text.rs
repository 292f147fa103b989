// src/text.rs
//! Text normalization: turns raw prose into the word stream the graph is
//! built from and the sentence list the rank pass uses as documents.

use regex::Regex;
use std::sync::LazyLock;

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap_or_else(|_| panic!("Invalid Regex")));

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]").unwrap_or_else(|_| panic!("Invalid Regex")));

/// A tokenized source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Normalized words in source order.
    pub words: Vec<String>,
    /// Normalized words of each non-blank sentence. A sentence made only of
    /// symbols is kept as an empty list so it still counts as a document.
    pub sentences: Vec<Vec<String>>,
}

impl Document {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

pub struct Tokenizer;

impl Tokenizer {
    /// Splits raw text into normalized words and sentences.
    #[must_use]
    pub fn tokenize(raw: &str) -> Document {
        let lowered = raw.to_lowercase();
        let sentences = SENTENCE_END
            .split(&lowered)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::words_of)
            .collect();

        Document {
            words: Self::words_of(&lowered),
            sentences,
        }
    }

    /// Lowercased words of `text`, with every non-alphanumeric run acting as a separator.
    #[must_use]
    pub fn words(text: &str) -> Vec<String> {
        Self::words_of(&text.to_lowercase())
    }

    fn words_of(lowered: &str) -> Vec<String> {
        NON_ALNUM
            .split(lowered)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Normalizes a query word for lookup. Only case is folded.
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}
