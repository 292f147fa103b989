//! Word-adjacency graph analysis.
//!
//! Text is normalized into a word stream, each adjacent pair becomes a
//! weighted directed edge, and the resulting [`graph::WordGraph`] answers
//! bridge-word, shortest-path, `PageRank` and random-walk queries.

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod io;
pub mod render;
pub mod reporting;
pub mod text;

pub use error::{GraphError, Result};
pub use graph::WordGraph;
pub use text::{Document, Tokenizer};
