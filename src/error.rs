// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Broad category of a [`GraphError`], for callers that branch on outcome kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A queried word is absent from the graph.
    NotFound,
    /// The query is well-formed but no qualifying structure exists.
    NoResult,
    Io,
    Config,
}

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("No \"{first}\" and \"{second}\" in the graph!")]
    BothMissing { first: String, second: String },

    #[error("No \"{0}\" in the graph!")]
    WordMissing(String),

    #[error("Start word \"{0}\" not found")]
    StartNotFound(String),

    #[error("End word \"{0}\" not found")]
    EndNotFound(String),

    #[error("No bridge words from \"{from}\" to \"{to}\"!")]
    NoBridge { from: String, to: String },

    #[error("No path from \"{from}\" to \"{to}\"!")]
    PathNotFound { from: String, to: String },

    #[error("No other words are reachable from \"{0}\"")]
    NoReachableNodes(String),

    #[error("Graph is empty, nothing to walk")]
    EmptyGraph,

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl GraphError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BothMissing { .. }
            | Self::WordMissing(_)
            | Self::StartNotFound(_)
            | Self::EndNotFound(_) => ErrorKind::NotFound,
            Self::NoBridge { .. }
            | Self::PathNotFound { .. }
            | Self::NoReachableNodes(_)
            | Self::EmptyGraph => ErrorKind::NoResult,
            Self::Io { .. } => ErrorKind::Io,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Wraps an I/O error with the path that produced it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

// Allow `?` on std::io::Error by converting to GraphError::Io with unknown path.
impl From<std::io::Error> for GraphError {
    fn from(source: std::io::Error) -> Self {
        GraphError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<toml::de::Error> for GraphError {
    fn from(e: toml::de::Error) -> Self {
        GraphError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(GraphError::WordMissing("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(GraphError::EmptyGraph.kind(), ErrorKind::NoResult);
        assert_eq!(GraphError::Config("bad".into()).kind(), ErrorKind::Config);
    }

    #[test]
    fn test_messages_name_the_words() {
        let e = GraphError::BothMissing {
            first: "a".into(),
            second: "b".into(),
        };
        assert_eq!(e.to_string(), "No \"a\" and \"b\" in the graph!");
    }
}
