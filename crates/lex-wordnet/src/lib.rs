//! # lex-wordnet
//!
//! Read-only lexical knowledge base for Lexon.
//!
//! Provides:
//! - [`KnowledgeBase`]: an arena of word senses (a petgraph `DiGraph` whose
//!   node indices are [`SenseId`](lex_core::SenseId)s) with hypernym edges and
//!   a per-category lemma index
//! - [`LexicalStore`]: the narrow read interface the engine depends on
//! - [`KnowledgeBaseBuilder`]: assembles small knowledge bases in code
//! - [`WordNetLoader`]: reads a pre-built WordNet 3.x `dict/` directory
//! - [`ExceptionTable`]: irregular inflections from `<pos>.exc` files
//!
//! Nothing in this crate mutates a knowledge base after construction.

mod error;
mod exceptions;
mod knowledge_base;
mod loader;
mod sense;
mod store;

pub use error::{BuildError, LoadError};
pub use exceptions::ExceptionTable;
pub use knowledge_base::{KnowledgeBase, KnowledgeBaseBuilder};
pub use loader::WordNetLoader;
pub use sense::Sense;
pub use store::LexicalStore;
