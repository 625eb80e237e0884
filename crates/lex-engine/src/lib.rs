//! # lex-engine
//!
//! Lexical relation engine for Lexon.
//!
//! Composes a read-only [`LexicalStore`](lex_wordnet::LexicalStore) with
//! morphological rules into the query façade [`LexicalEngine`]:
//! - [`LexicalEngine::canonicalize`]: inflected form -> dictionary base form
//! - [`LexicalEngine::is_descendant_of`]: hypernym-closure membership test
//! - [`LexicalEngine::derive`]: noun -> verb via shared base spelling
//! - [`LexicalEngine::synonyms`] and [`LexicalEngine::ancestors`]
//!
//! The engine holds no mutable state; one instance built at startup can be
//! shared by reference across threads.

pub mod closure;
pub mod derive;
mod engine;
mod error;
pub mod morphology;
pub mod observer;

pub use engine::LexicalEngine;
pub use error::EngineError;
pub use morphology::{MorphRule, Morphology, RuleSet};
pub use observer::{NoopObserver, Operation, QueryObserver, TracingObserver};
