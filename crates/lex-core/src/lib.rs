//! # lex-core
//!
//! Core types, sense identifiers, and error types for Lexon.
//!
//! This crate provides the foundational types shared across all Lexon crates:
//! - The grammatical [`Category`] enum and its parsing rules
//! - The [`SenseId`] arena handle for word senses
//! - Cross-cutting error types
//! - Response types rendered by the CLI (and by any HTTP façade)

pub mod enums;
pub mod errors;
pub mod identity;
pub mod responses;

pub use enums::Category;
pub use errors::CoreError;
pub use identity::SenseId;
