//! Query façade over a lexical store.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use std::time::Instant;

use lex_core::Category;
use lex_core::responses::KnowledgeBaseStats;
use lex_wordnet::{KnowledgeBase, LexicalStore};

use crate::closure;
use crate::derive::derive_verb;
use crate::error::EngineError;
use crate::morphology::Morphology;
use crate::observer::{NoopObserver, Operation, QueryObserver};

/// Immutable lexical relation engine.
///
/// Built once and shared by reference; all queries take `&self`.
pub struct LexicalEngine<S = KnowledgeBase> {
    store: Arc<S>,
    morphology: Morphology,
    observer: Box<dyn QueryObserver>,
}

impl<S: LexicalStore> LexicalEngine<S> {
    pub fn new(store: Arc<S>, morphology: Morphology) -> Self {
        Self {
            store,
            morphology,
            observer: Box::new(NoopObserver),
        }
    }

    /// Replace the query observer.
    #[must_use]
    pub fn with_observer(mut self, observer: impl QueryObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub const fn morphology(&self) -> &Morphology {
        &self.morphology
    }

    fn timed<T>(&self, operation: Operation, query: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        let out = query();
        self.observer.record(operation, started.elapsed());
        out
    }

    /// Base form of `word` for a category given as a string (`"n"`,
    /// `"verb"`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Core`] wrapping
    /// [`CoreError::InvalidCategory`](lex_core::CoreError::InvalidCategory)
    /// if `category` is not recognized.
    pub fn canonicalize(&self, word: &str, category: &str) -> Result<String, EngineError> {
        self.timed(Operation::Canonicalize, || {
            let category: Category = category.parse()?;
            Ok(self
                .morphology
                .canonicalize_in(self.store.as_ref(), word, category))
        })
    }

    /// Base form of `word` for an already-parsed category.
    ///
    /// Words the store lists in `category` come back unchanged.
    pub fn base_form(&self, word: &str, category: Category) -> String {
        self.timed(Operation::Canonicalize, || {
            self.morphology
                .canonicalize_in(self.store.as_ref(), word, category)
        })
    }

    /// Whether some sense of `word` has an ancestor whose primary lemma is in
    /// `targets`. Unknown words are never descendants.
    pub fn is_descendant_of(
        &self,
        word: &str,
        category: Category,
        targets: &HashSet<String>,
    ) -> bool {
        self.timed(Operation::IsDescendantOf, || {
            let senses = self.store.senses_of(word, category);
            let found = closure::any_ancestor_named(self.store.as_ref(), senses, targets);
            tracing::debug!(word, %category, senses = senses.len(), found, "descendant check");
            found
        })
    }

    /// Verb sharing the base spelling of `noun`, or an empty string.
    pub fn derive(&self, noun: &str) -> String {
        self.timed(Operation::Derive, || {
            derive_verb(self.store.as_ref(), &self.morphology, noun)
        })
    }

    /// Sorted lemmas of every sense of `word`, across all categories when
    /// `category` is `None`.
    pub fn synonyms(&self, word: &str, category: Option<Category>) -> Vec<String> {
        self.timed(Operation::Synonyms, || {
            let categories = category.map_or_else(|| Category::ALL.to_vec(), |c| vec![c]);
            let lemmas: BTreeSet<&str> = categories
                .into_iter()
                .flat_map(|c| self.store.senses_of(word, c))
                .filter_map(|&id| self.store.sense(id))
                .flat_map(|sense| sense.lemmas().iter().map(String::as_str))
                .collect();
            lemmas.into_iter().map(str::to_string).collect()
        })
    }

    /// Primary lemmas of every ancestor of every sense of `word`.
    pub fn ancestors(&self, word: &str, category: Category) -> Vec<String> {
        self.timed(Operation::Ancestors, || {
            closure::ancestor_lemmas(self.store.as_ref(), self.store.senses_of(word, category))
        })
    }
}

impl LexicalEngine<KnowledgeBase> {
    /// Size summary of the loaded knowledge base and morphology.
    pub fn stats(&self) -> KnowledgeBaseStats {
        KnowledgeBaseStats {
            senses: self.store.len(),
            lemmas: self.store.lemma_count(),
            hypernym_edges: self.store.edge_count(),
            exceptions: self.morphology.exceptions().len(),
            rules: self.morphology.rules().len(),
            has_cycles: self.store.has_cycles(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use lex_core::CoreError;
    use lex_wordnet::{ExceptionTable, KnowledgeBaseBuilder};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::morphology::RuleSet;

    struct Recorder(Arc<Mutex<Vec<Operation>>>);

    impl QueryObserver for Recorder {
        fn record(&self, operation: Operation, _elapsed: Duration) {
            self.0.lock().unwrap().push(operation);
        }
    }

    fn engine() -> LexicalEngine {
        let mut b = KnowledgeBaseBuilder::new();
        let animal = b.add_sense(Category::Noun, ["animal", "beast"]).unwrap();
        let dog = b.add_sense(Category::Noun, ["dog", "domestic_dog"]).unwrap();
        let cad = b.add_sense(Category::Noun, ["cad", "dog", "heel"]).unwrap();
        let person = b.add_sense(Category::Noun, ["person"]).unwrap();
        b.add_sense(Category::Verb, ["chase", "dog"]).unwrap();
        b.add_hypernym(dog, animal).unwrap();
        b.add_hypernym(cad, person).unwrap();
        let morphology = Morphology::new(
            ExceptionTable::from_entries([(Category::Noun, "geese", "goose")]),
            RuleSet::english(),
        );
        LexicalEngine::new(Arc::new(b.build()), morphology)
    }

    #[test]
    fn canonicalize_parses_category_strings() {
        let engine = engine();
        assert_eq!(engine.canonicalize("geese", "n").unwrap(), "goose");
        assert_eq!(engine.canonicalize("running", "verb").unwrap(), "run");
        assert_eq!(engine.base_form("dogs", Category::Noun), "dog");
    }

    #[test]
    fn known_words_keep_their_spelling() {
        let mut b = KnowledgeBaseBuilder::new();
        b.add_sense(Category::Verb, ["sing"]).unwrap();
        b.add_sense(Category::Adjective, ["bitter"]).unwrap();
        b.add_sense(Category::Noun, ["news"]).unwrap();
        let engine = LexicalEngine::new(Arc::new(b.build()), Morphology::english());

        for (word, category, base) in [
            ("singing", Category::Verb, "sing"),
            ("sing", Category::Verb, "sing"),
            ("bitter", Category::Adjective, "bitter"),
            ("news", Category::Noun, "news"),
        ] {
            let once = engine.base_form(word, category);
            assert_eq!(once, base, "{word}");
            assert_eq!(engine.base_form(&once, category), once, "{word}");
        }
        assert_eq!(engine.canonicalize("sing", "v").unwrap(), "sing");
        assert_eq!(engine.derive("news"), "");
    }

    #[test]
    fn canonicalize_rejects_unknown_category() {
        let err = engine().canonicalize("dogs", "pronoun").unwrap_err();
        assert!(matches!(
            err,
            EngineError::Core(CoreError::InvalidCategory(ref c)) if c == "pronoun"
        ));
    }

    #[test]
    fn descendant_over_any_sense() {
        let engine = engine();
        let targets: HashSet<String> = ["person".to_string()].into();
        assert!(engine.is_descendant_of("dog", Category::Noun, &targets));
        assert!(!engine.is_descendant_of("dog", Category::Verb, &targets));
        assert!(!engine.is_descendant_of("cat", Category::Noun, &targets));
    }

    #[test]
    fn synonyms_are_sorted_and_deduplicated() {
        let engine = engine();
        assert_eq!(
            engine.synonyms("dog", Some(Category::Noun)),
            vec!["cad", "dog", "domestic_dog", "heel"]
        );
        assert_eq!(
            engine.synonyms("dog", None),
            vec!["cad", "chase", "dog", "domestic_dog", "heel"]
        );
        assert!(engine.synonyms("cat", None).is_empty());
    }

    #[test]
    fn ancestors_follow_sense_order() {
        assert_eq!(
            engine().ancestors("dog", Category::Noun),
            vec!["animal", "person"]
        );
    }

    #[test]
    fn derive_uses_first_verb_sense() {
        let engine = engine();
        assert_eq!(engine.derive("dogs"), "chase");
        assert_eq!(engine.derive(""), "");
    }

    #[test]
    fn every_call_is_observed() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let engine = engine().with_observer(Recorder(Arc::clone(&log)));
        let _ = engine.canonicalize("dogs", "x");
        engine.derive("dog");
        engine.synonyms("dog", None);
        engine.ancestors("dog", Category::Noun);
        engine.is_descendant_of("dog", Category::Noun, &HashSet::new());
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                Operation::Canonicalize,
                Operation::Derive,
                Operation::Synonyms,
                Operation::Ancestors,
                Operation::IsDescendantOf,
            ]
        );
    }

    #[test]
    fn stats_summarize_store_and_morphology() {
        let stats = engine().stats();
        assert_eq!(stats.senses, 5);
        assert_eq!(stats.hypernym_edges, 2);
        assert_eq!(stats.exceptions, 1);
        assert_eq!(stats.rules, RuleSet::english().len());
        assert!(!stats.has_cycles);
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<LexicalEngine>();
    }
}
