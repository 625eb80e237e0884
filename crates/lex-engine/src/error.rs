//! Engine error types.

use lex_core::CoreError;

/// Errors surfaced by [`LexicalEngine`](crate::LexicalEngine).
///
/// An unrecognized category is the only failure; unknown words and empty
/// results are ordinary answers.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] CoreError),
}
