//! Knowledge-base loading and construction error types.

use std::path::PathBuf;

use lex_core::SenseId;
use thiserror::Error;

/// Errors raised while reading a WordNet database from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required database file does not exist.
    #[error("missing WordNet database file: {}", .0.display())]
    MissingFile(PathBuf),

    /// A line does not follow the WordNet database format.
    #[error("{file}:{line}: {reason}")]
    Parse {
        file: String,
        line: usize,
        reason: String,
    },

    /// A pointer or index entry names an offset with no synset record.
    #[error("{file}:{line}: no synset at offset {offset:08}")]
    DanglingPointer {
        file: String,
        line: usize,
        offset: u32,
    },

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Errors raised by [`KnowledgeBaseBuilder`](crate::KnowledgeBaseBuilder).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// Every sense needs at least one lemma.
    #[error("a sense must carry at least one lemma")]
    EmptySense,

    /// An edge refers to a sense that was never added.
    #[error("unknown sense: {0}")]
    UnknownSense(SenseId),
}
