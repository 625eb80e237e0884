//! Grammatical categories (parts of speech) for Lexon.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `Category` parses both WordNet single-letter codes and spelled-out names.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Grammatical category of a word sense.
///
/// Every sense belongs to exactly one category. WordNet adjective satellites
/// (`s`) are folded into [`Category::Adjective`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl Category {
    /// All categories in WordNet file order.
    pub const ALL: [Self; 4] = [Self::Noun, Self::Verb, Self::Adjective, Self::Adverb];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
        }
    }

    /// Single-letter WordNet code (`n`, `v`, `a`, `r`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Noun => 'n',
            Self::Verb => 'v',
            Self::Adjective => 'a',
            Self::Adverb => 'r',
        }
    }

    /// Dense position of this category in [`Category::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Noun => 0,
            Self::Verb => 1,
            Self::Adjective => 2,
            Self::Adverb => 3,
        }
    }

    /// Suffix used by WordNet database file names (`data.adj`, `adv.exc`, ...).
    #[must_use]
    pub const fn file_suffix(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adj",
            Self::Adverb => "adv",
        }
    }

    /// Map a WordNet synset-type code to a category.
    ///
    /// Satellite adjectives (`s`) map to [`Category::Adjective`].
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'n' => Some(Self::Noun),
            'v' => Some(Self::Verb),
            'a' | 's' => Some(Self::Adjective),
            'r' => Some(Self::Adverb),
            _ => None,
        }
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "noun" => Ok(Self::Noun),
            "v" | "verb" => Ok(Self::Verb),
            "a" | "s" | "adj" | "adjective" => Ok(Self::Adjective),
            "r" | "adv" | "adverb" => Ok(Self::Adverb),
            _ => Err(CoreError::InvalidCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
