//! Response types returned as JSON by `lexon` commands.
//!
//! The field names are fixed: base forms and derivations are carried under
//! `"word"`, boolean checks under `"status"`, lists under `"words"`, and
//! failures under `"error"`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response from `lexon base-form` and `lexon derive-verb`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WordResponse {
    pub word: String,
}

/// Response from `lexon hypernym-check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: bool,
}

/// Response from `lexon synonyms` and `lexon ancestors`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WordsResponse {
    pub words: Vec<String>,
}

/// Body printed when a query fails.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response from `lexon stats`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct KnowledgeBaseStats {
    pub senses: usize,
    pub lemmas: usize,
    pub hypernym_edges: usize,
    pub exceptions: usize,
    pub rules: usize,
    pub has_cycles: bool,
}
