//! Noun -> verb derivation through a shared base spelling.

use lex_core::Category;
use lex_wordnet::LexicalStore;

use crate::morphology::Morphology;

/// Primary lemma of the first verb sense spelled like `noun`'s base form,
/// lowercased.
///
/// Returns an empty string when the noun is empty or no verb sense shares
/// its spelling. There is no disambiguation: the most frequent verb sense
/// always wins.
pub fn derive_verb<S: LexicalStore>(store: &S, morphology: &Morphology, noun: &str) -> String {
    let base = morphology.canonicalize_in(store, noun, Category::Noun);
    if base.is_empty() {
        return String::new();
    }
    store
        .senses_of(&base, Category::Verb)
        .first()
        .and_then(|&id| store.sense(id))
        .map(|sense| sense.primary_lemma().to_lowercase())
        .unwrap_or_default()
}
