use std::fmt;

use lex_core::Category;

/// A single word sense (synset): synonymous lemmas sharing one meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sense {
    category: Category,
    offset: u32,
    lemmas: Vec<String>,
}

impl Sense {
    pub(crate) const fn new(category: Category, offset: u32, lemmas: Vec<String>) -> Self {
        Self {
            category,
            offset,
            lemmas,
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Offset of this record in its source database file.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Lemmas in database order.
    #[must_use]
    pub fn lemmas(&self) -> &[String] {
        &self.lemmas
    }

    /// The first lemma, which names the sense.
    #[must_use]
    pub fn primary_lemma(&self) -> &str {
        self.lemmas.first().map_or("", String::as_str)
    }
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08}-{}", self.offset, self.category.code())
    }
}
