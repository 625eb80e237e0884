//! Integration tests loading the WordNet-format fixture under `tests/fixtures/dict`.

use std::path::PathBuf;

use lex_core::Category;
use lex_wordnet::{KnowledgeBase, LexicalStore, LoadError, WordNetLoader};
use pretty_assertions::assert_eq;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/dict")
}

fn load_fixture() -> KnowledgeBase {
    WordNetLoader::new(fixture_dir())
        .load()
        .expect("fixture should load")
}

fn primary_lemmas(kb: &KnowledgeBase, word: &str, category: Category) -> Vec<String> {
    kb.senses_of(word, category)
        .iter()
        .map(|id| kb.sense(*id).unwrap().primary_lemma().to_string())
        .collect()
}

#[test]
fn loads_all_categories() {
    let kb = load_fixture();
    assert_eq!(kb.len(), 30 + 10 + 3 + 2);
    assert!(!kb.has_cycles());
}

#[test]
fn index_order_is_sense_precedence() {
    let kb = load_fixture();
    let offsets: Vec<String> = kb
        .senses_of("secretary", Category::Noun)
        .iter()
        .map(|id| kb.sense(*id).unwrap().to_string())
        .collect();
    assert_eq!(offsets, vec!["10576071-n", "10575787-n", "04150312-n"]);

    assert_eq!(
        primary_lemmas(&kb, "go", Category::Verb),
        vec!["travel", "go", "run"]
    );
}

#[test]
fn only_class_hypernyms_become_edges() {
    let kb = load_fixture();

    let [einstein] = kb.senses_of("einstein", Category::Noun) else {
        panic!("expected exactly one sense of einstein");
    };
    assert_eq!(kb.hypernyms(*einstein).count(), 0);

    let [dog] = kb.senses_of("dog", Category::Noun) else {
        panic!("expected exactly one sense of dog");
    };
    let parents: Vec<&str> = kb
        .hypernyms(*dog)
        .map(|id| kb.sense(id).unwrap().primary_lemma())
        .collect();
    assert_eq!(parents, vec!["domestic_animal"]);
}

#[test]
fn data_lemmas_keep_their_case_while_index_is_lowercase() {
    let kb = load_fixture();
    let [einstein] = kb.senses_of("einstein", Category::Noun) else {
        panic!("expected exactly one sense of einstein");
    };
    assert_eq!(
        kb.sense(*einstein).unwrap().lemmas(),
        &["Einstein".to_string(), "Albert_Einstein".to_string()]
    );
    assert!(kb.senses_of("Einstein", Category::Noun).is_empty());
}

#[test]
fn satellite_adjectives_are_adjectives_without_markers() {
    let kb = load_fixture();
    let [well] = kb.senses_of("well", Category::Adjective) else {
        panic!("expected exactly one adjective sense of well");
    };
    let sense = kb.sense(*well).unwrap();
    assert_eq!(sense.category(), Category::Adjective);
    assert_eq!(sense.primary_lemma(), "well");
    assert_eq!(primary_lemmas(&kb, "well", Category::Adverb), vec!["well"]);
}

#[test]
fn loads_exception_tables() {
    let table = WordNetLoader::new(fixture_dir()).load_exceptions().unwrap();
    assert_eq!(table.get(Category::Noun, "geese"), Some("goose"));
    assert_eq!(table.get(Category::Verb, "went"), Some("go"));
    assert_eq!(table.get(Category::Adjective, "better"), Some("good"));
    assert_eq!(table.get(Category::Adverb, "better"), Some("well"));
}

#[test]
fn missing_data_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = WordNetLoader::new(dir.path()).load().unwrap_err();
    assert!(matches!(err, LoadError::MissingFile(ref p) if p.ends_with("data.noun")));
}

fn copy_fixture_into(dir: &std::path::Path) {
    for entry in std::fs::read_dir(fixture_dir()).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), dir.join(entry.file_name())).unwrap();
    }
}

#[test]
fn dangling_pointer_is_reported_with_location() {
    let dir = tempfile::tempdir().unwrap();
    copy_fixture_into(dir.path());
    let path = dir.path().join("data.adv");
    let mut text = std::fs::read_to_string(&path).unwrap();
    text.push_str("00099999 02 r 01 quickly 0 001 @ 00012345 r 0000 | rapidly\n");
    std::fs::write(&path, text).unwrap();

    let err = WordNetLoader::new(dir.path()).load().unwrap_err();
    match err {
        LoadError::DanglingPointer { file, line, offset } => {
            assert_eq!(file, "data.adv");
            assert_eq!(line, 6);
            assert_eq!(offset, 12_345);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_index_line_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    copy_fixture_into(dir.path());
    let path = dir.path().join("index.adv");
    let mut text = std::fs::read_to_string(&path).unwrap();
    text.push_str("quickly r two 0 1 0 00011093\n");
    std::fs::write(&path, text).unwrap();

    let err = WordNetLoader::new(dir.path()).load().unwrap_err();
    assert!(
        matches!(err, LoadError::Parse { ref file, line: 9, .. } if file == "index.adv"),
        "{err}"
    );
}
