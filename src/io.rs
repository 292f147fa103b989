// src/io.rs
//! File boundary: loading source text, saving reports, persisting walks.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::WordGraph;
use crate::text::Tokenizer;

/// Reads a whole UTF-8 text file.
///
/// # Errors
/// Returns [`GraphError::Io`] if the file cannot be read or is not valid UTF-8.
pub fn load_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| GraphError::io(path, e))
}

/// Reads a text file and builds its word graph.
///
/// # Errors
/// Returns [`GraphError::Io`] if the file cannot be read.
pub fn load_graph(path: &Path) -> Result<WordGraph> {
    let text = load_text(path)?;
    let doc = Tokenizer::tokenize(&text);
    tracing::info!(
        path = %path.display(),
        words = doc.words.len(),
        sentences = doc.sentences.len(),
        "document loaded"
    );
    Ok(WordGraph::from_document(&doc))
}

/// Writes report text to `path`, creating parent directories as needed.
///
/// # Errors
/// Returns [`GraphError::Io`] if the directory or file cannot be written.
pub fn save_report(path: &Path, report: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GraphError::io(parent, e))?;
    }
    fs::write(path, report).map_err(|e| GraphError::io(path, e))
}

/// Appends a walk, space-joined, as one line of `path`.
///
/// # Errors
/// Returns [`GraphError::Io`] if the file cannot be opened or written.
pub fn append_walk<S: AsRef<str>>(path: &Path, walk: &[S]) -> Result<()> {
    let line = walk.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| GraphError::io(path, e))?;
    writeln!(file, "{line}").map_err(|e| GraphError::io(path, e))?;
    file.flush().map_err(|e| GraphError::io(path, e))
}
