//! Morphological canonicalization: inflected surface form -> base form.
//!
//! Resolution order for a `(word, category)` pair:
//! 1. the irregular-form [`ExceptionTable`],
//! 2. the word itself, when the lexicon lists it in that category,
//! 3. the first matching [`MorphRule`] whose result the lexicon lists,
//! 4. the first matching [`MorphRule`] of that category, in declaration order,
//! 5. the word itself.
//!
//! Steps 2 and 3 need a [`LexicalStore`] and only run in
//! [`Morphology::canonicalize_in`]. No case folding happens here; callers pass
//! the exact surface form.

use lex_core::Category;
use lex_wordnet::{ExceptionTable, LexicalStore};

// ---------------------------------------------------------------------------
// MorphRule
// ---------------------------------------------------------------------------

/// Suffix substitution applied to words of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphRule {
    category: Category,
    suffix: String,
    replacement: String,
}

impl MorphRule {
    pub fn new(
        category: Category,
        suffix: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            category,
            suffix: suffix.into(),
            replacement: replacement.into(),
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Rewrite `word` if it ends with this rule's suffix.
    #[must_use]
    pub fn apply(&self, word: &str) -> Option<String> {
        word.strip_suffix(self.suffix.as_str())
            .map(|stem| format!("{stem}{}", self.replacement))
    }
}

// ---------------------------------------------------------------------------
// RuleSet
// ---------------------------------------------------------------------------

/// Doubled final consonants undone for `-ing`/`-ed` verb forms.
const DOUBLED_CONSONANTS: [char; 7] = ['b', 'g', 'm', 'n', 'p', 'r', 't'];

const NOUN_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zzes", "zz"),
    ("ies", "y"),
    ("ss", "ss"),
    ("us", "us"),
    ("is", "is"),
    ("s", ""),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("ied", "y"),
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zzes", "zz"),
    ("ss", "ss"),
    ("s", ""),
    ("ssed", "ss"),
    ("ated", "ate"),
    ("ized", "ize"),
    ("ised", "ise"),
    ("ved", "ve"),
    ("ced", "ce"),
    ("sed", "se"),
    ("ued", "ue"),
    ("eed", "eed"),
    ("ed", ""),
    ("ssing", "ss"),
    ("ating", "ate"),
    ("izing", "ize"),
    ("ising", "ise"),
    ("ving", "ve"),
    ("cing", "ce"),
    ("uing", "ue"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[
    ("iest", "y"),
    ("ier", "y"),
    ("est", ""),
    ("er", ""),
];

/// Ordered list of suffix rules; the first match for a category wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<MorphRule>,
}

impl RuleSet {
    /// A rule set with no rules: canonicalization falls back to exceptions
    /// and identity.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in English rules, most specific suffix first within each
    /// category. Adverbs have no regular inflection and get no rules.
    #[must_use]
    pub fn english() -> Self {
        let mut set = Self::empty();
        for c in DOUBLED_CONSONANTS {
            for ending in ["ing", "ed"] {
                set.push(MorphRule::new(
                    Category::Verb,
                    format!("{c}{c}{ending}"),
                    c.to_string(),
                ));
            }
        }
        for (category, table) in [
            (Category::Noun, NOUN_RULES),
            (Category::Verb, VERB_RULES),
            (Category::Adjective, ADJECTIVE_RULES),
        ] {
            for &(suffix, replacement) in table {
                set.push(MorphRule::new(category, suffix, replacement));
            }
        }
        set
    }

    /// Append a rule after every existing one.
    pub fn push(&mut self, rule: MorphRule) {
        self.rules.push(rule);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MorphRule> + '_ {
        self.rules.iter()
    }

    /// Results of every rule of `category` whose suffix ends `word`, in
    /// declaration order. A rule that would consume the whole word is skipped.
    pub fn matches<'a>(
        &'a self,
        word: &'a str,
        category: Category,
    ) -> impl Iterator<Item = String> + 'a {
        self.rules
            .iter()
            .filter(move |rule| rule.category == category)
            .filter_map(move |rule| rule.apply(word))
            .filter(|base| !base.is_empty())
    }

    /// Result of the first rule of `category` whose suffix ends `word`.
    #[must_use]
    pub fn first_match(&self, word: &str, category: Category) -> Option<String> {
        self.matches(word, category).next()
    }
}

impl Extend<MorphRule> for RuleSet {
    fn extend<T: IntoIterator<Item = MorphRule>>(&mut self, iter: T) {
        self.rules.extend(iter);
    }
}

impl FromIterator<MorphRule> for RuleSet {
    fn from_iter<T: IntoIterator<Item = MorphRule>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Morphology
// ---------------------------------------------------------------------------

/// Exception tables plus suffix rules.
#[derive(Debug, Clone, Default)]
pub struct Morphology {
    exceptions: ExceptionTable,
    rules: RuleSet,
}

impl Morphology {
    #[must_use]
    pub const fn new(exceptions: ExceptionTable, rules: RuleSet) -> Self {
        Self { exceptions, rules }
    }

    /// English rules without any exception table.
    #[must_use]
    pub fn english() -> Self {
        Self::new(ExceptionTable::new(), RuleSet::english())
    }

    #[must_use]
    pub const fn exceptions(&self) -> &ExceptionTable {
        &self.exceptions
    }

    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Reduce `word` to its base form within `category`.
    ///
    /// Never fails; a word no table or rule recognizes is returned as is,
    /// and the empty word stays empty.
    #[must_use]
    pub fn canonicalize(&self, word: &str, category: Category) -> String {
        if word.is_empty() {
            return String::new();
        }
        if let Some(base) = self.exceptions.get(category, word) {
            return base.to_string();
        }
        self.rules
            .first_match(word, category)
            .unwrap_or_else(|| word.to_string())
    }

    /// Reduce `word` to its base form, preferring spellings `store` knows.
    ///
    /// A word listed in `category` is already a base form and comes back
    /// unchanged, so the result is a fixed point for every known word.
    #[must_use]
    pub fn canonicalize_in<S: LexicalStore>(
        &self,
        store: &S,
        word: &str,
        category: Category,
    ) -> String {
        if word.is_empty() {
            return String::new();
        }
        if let Some(base) = self.exceptions.get(category, word) {
            return base.to_string();
        }
        if !store.senses_of(word, category).is_empty() {
            return word.to_string();
        }
        let mut fallback = None;
        for candidate in self.rules.matches(word, category) {
            if !store.senses_of(&candidate, category).is_empty() {
                return candidate;
            }
            fallback.get_or_insert(candidate);
        }
        fallback.unwrap_or_else(|| word.to_string())
    }
}

#[cfg(test)]
mod tests {
    use lex_wordnet::{KnowledgeBase, KnowledgeBaseBuilder};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn morphology() -> Morphology {
        let exceptions = ExceptionTable::from_entries([
            (Category::Noun, "geese", "goose"),
            (Category::Noun, "mice", "mouse"),
            (Category::Verb, "ran", "run"),
            (Category::Verb, "went", "go"),
            (Category::Adjective, "better", "good"),
        ]);
        Morphology::new(exceptions, RuleSet::english())
    }

    #[rstest]
    #[case("geese", Category::Noun, "goose")]
    #[case("went", Category::Verb, "go")]
    #[case("better", Category::Adjective, "good")]
    #[case("running", Category::Verb, "run")]
    #[case("stopped", Category::Verb, "stop")]
    #[case("walked", Category::Verb, "walk")]
    #[case("walks", Category::Verb, "walk")]
    #[case("created", Category::Verb, "create")]
    #[case("studies", Category::Verb, "study")]
    #[case("dogs", Category::Noun, "dog")]
    #[case("churches", Category::Noun, "church")]
    #[case("boxes", Category::Noun, "box")]
    #[case("cities", Category::Noun, "city")]
    #[case("glasses", Category::Noun, "glass")]
    #[case("happiest", Category::Adjective, "happy")]
    #[case("taller", Category::Adjective, "tall")]
    fn reduces_inflected_forms(
        #[case] word: &str,
        #[case] category: Category,
        #[case] expected: &str,
    ) {
        assert_eq!(morphology().canonicalize(word, category), expected);
    }

    /// Base forms only; inflected spellings are left to the rules.
    fn lexicon() -> KnowledgeBase {
        let mut b = KnowledgeBaseBuilder::new();
        for (category, lemma) in [
            (Category::Noun, "goose"),
            (Category::Noun, "glass"),
            (Category::Noun, "bus"),
            (Category::Noun, "church"),
            (Category::Noun, "secretary"),
            (Category::Noun, "news"),
            (Category::Noun, "axe"),
            (Category::Verb, "run"),
            (Category::Verb, "go"),
            (Category::Verb, "walk"),
            (Category::Verb, "need"),
            (Category::Verb, "sing"),
            (Category::Adjective, "good"),
            (Category::Adjective, "bitter"),
            (Category::Adverb, "quickly"),
        ] {
            b.add_sense(category, [lemma]).unwrap();
        }
        b.build()
    }

    #[rstest]
    #[case("goose", Category::Noun)]
    #[case("glass", Category::Noun)]
    #[case("bus", Category::Noun)]
    #[case("church", Category::Noun)]
    #[case("secretary", Category::Noun)]
    #[case("news", Category::Noun)]
    #[case("run", Category::Verb)]
    #[case("go", Category::Verb)]
    #[case("walk", Category::Verb)]
    #[case("need", Category::Verb)]
    #[case("sing", Category::Verb)]
    #[case("good", Category::Adjective)]
    #[case("bitter", Category::Adjective)]
    #[case("quickly", Category::Adverb)]
    fn base_forms_are_fixed_points(#[case] word: &str, #[case] category: Category) {
        let (m, kb) = (morphology(), lexicon());
        let once = m.canonicalize_in(&kb, word, category);
        assert_eq!(once, word);
        assert_eq!(m.canonicalize_in(&kb, &once, category), once);
    }

    #[rstest]
    #[case("singing", Category::Verb, "sing")]
    #[case("sings", Category::Verb, "sing")]
    #[case("bitterest", Category::Adjective, "bitter")]
    #[case("churches", Category::Noun, "church")]
    #[case("geese", Category::Noun, "goose")]
    fn inflections_reduce_to_known_forms(
        #[case] word: &str,
        #[case] category: Category,
        #[case] expected: &str,
    ) {
        let (m, kb) = (morphology(), lexicon());
        let once = m.canonicalize_in(&kb, word, category);
        assert_eq!(once, expected);
        assert_eq!(m.canonicalize_in(&kb, &once, category), once);
    }

    #[test]
    fn known_result_beats_earlier_rule() {
        let m = morphology();
        // "xes" -> "x" comes before "s" -> "", but only "axe" is a word.
        assert_eq!(m.canonicalize("axes", Category::Noun), "ax");
        assert_eq!(m.canonicalize_in(&lexicon(), "axes", Category::Noun), "axe");
    }

    #[test]
    fn unknown_words_fall_back_to_first_rule() {
        let m = morphology();
        let kb = lexicon();
        assert_eq!(m.canonicalize_in(&kb, "blorbing", Category::Verb), "blorb");
        assert_eq!(m.canonicalize_in(&kb, "zzz", Category::Verb), "zzz");
    }

    #[test]
    fn rules_never_empty_a_word() {
        let m = morphology();
        assert_eq!(m.canonicalize("s", Category::Noun), "s");
        assert_eq!(m.canonicalize_in(&lexicon(), "s", Category::Verb), "s");
        assert_eq!(m.canonicalize_in(&lexicon(), "ing", Category::Verb), "ing");
    }

    #[test]
    fn exceptions_are_category_scoped() {
        let m = morphology();
        assert_eq!(m.canonicalize("geese", Category::Verb), "geese");
        assert_eq!(m.canonicalize("ran", Category::Noun), "ran");
    }

    #[test]
    fn no_case_folding() {
        let m = morphology();
        assert_eq!(m.canonicalize("Geese", Category::Noun), "Geese");
        assert_eq!(m.canonicalize("WENT", Category::Verb), "WENT");
    }

    #[test]
    fn empty_word_stays_empty() {
        assert_eq!(morphology().canonicalize("", Category::Noun), "");
    }

    #[test]
    fn first_declared_rule_wins() {
        let rules: RuleSet = [
            MorphRule::new(Category::Noun, "s", ""),
            MorphRule::new(Category::Noun, "ies", "y"),
        ]
        .into_iter()
        .collect();
        let m = Morphology::new(ExceptionTable::new(), rules);
        assert_eq!(m.canonicalize("cities", Category::Noun), "citie");
    }

    #[test]
    fn appended_rules_apply_after_defaults() {
        let mut rules = RuleSet::empty();
        rules.push(MorphRule::new(Category::Adverb, "lier", "ly"));
        let m = Morphology::new(ExceptionTable::new(), rules);
        assert_eq!(m.canonicalize("earlier", Category::Adverb), "early");
        assert_eq!(m.canonicalize("dogs", Category::Noun), "dogs");
        assert_eq!(m.rules().len(), 1);
    }

    #[test]
    fn english_rules_cover_nouns_verbs_and_adjectives_only() {
        let rules = RuleSet::english();
        assert!(rules.iter().all(|r| r.category() != Category::Adverb));
        assert!(
            rules
                .iter()
                .any(|r| r.suffix() == "nning" && r.replacement() == "n")
        );
        assert_eq!(rules.first_match("quickly", Category::Adverb), None);
    }
}
