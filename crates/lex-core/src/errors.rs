//! Cross-cutting error types for Lexon.
//!
//! Domain-specific errors (e.g., `LoadError`, `EngineError`) are defined in
//! their respective crates. `anyhow` is only used by `lex-cli`, where all crate
//! errors converge.

use thiserror::Error;

/// Errors shared by every Lexon crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The caller supplied an absent or unrecognized grammatical category.
    #[error("Invalid category: '{0}' (expected noun, verb, adjective, or adverb)")]
    InvalidCategory(String),
}
