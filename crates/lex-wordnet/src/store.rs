//! The read interface the query engine is written against.

use lex_core::{Category, SenseId};

use crate::sense::Sense;

/// Read-only access to senses, the lemma index, and hypernym edges.
pub trait LexicalStore {
    /// Senses using `word` as a lemma in `category`, primary sense first.
    ///
    /// An empty slice means the word is unknown in that category.
    fn senses_of(&self, word: &str, category: Category) -> &[SenseId];

    fn sense(&self, id: SenseId) -> Option<&Sense>;

    /// Direct hypernyms (parents) of `id`, in the order they were recorded.
    fn hypernyms(&self, id: SenseId) -> impl Iterator<Item = SenseId> + '_;
}
