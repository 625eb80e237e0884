//! Transitive hypernym closure.
//!
//! Traversal is iterative: an explicit work queue plus a visited set, so
//! cyclic stores terminate and no sense is expanded twice.

use std::collections::{HashSet, VecDeque};

use lex_core::SenseId;
use lex_wordnet::LexicalStore;

/// Breadth-first iterator over every sense reachable from a start sense by
/// one or more hypernym edges.
///
/// The start sense is yielded only if it lies on a cycle.
pub struct Ancestors<'a, S> {
    store: &'a S,
    queue: VecDeque<SenseId>,
    visited: HashSet<SenseId>,
}

impl<'a, S: LexicalStore> Ancestors<'a, S> {
    pub fn new(store: &'a S, start: SenseId) -> Self {
        let mut walk = Self {
            store,
            queue: VecDeque::new(),
            visited: HashSet::new(),
        };
        walk.enqueue_parents(start);
        walk
    }

    fn enqueue_parents(&mut self, id: SenseId) {
        let store = self.store;
        for parent in store.hypernyms(id) {
            if self.visited.insert(parent) {
                self.queue.push_back(parent);
            }
        }
    }
}

impl<S: LexicalStore> Iterator for Ancestors<'_, S> {
    type Item = SenseId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        self.enqueue_parents(id);
        Some(id)
    }
}

/// Whether any ancestor of any of `senses` has a primary lemma in `targets`.
///
/// Only the first lemma of an ancestor is compared.
pub fn any_ancestor_named<S: LexicalStore>(
    store: &S,
    senses: &[SenseId],
    targets: &HashSet<String>,
) -> bool {
    if targets.is_empty() {
        return false;
    }
    senses.iter().any(|&start| {
        Ancestors::new(store, start).any(|id| {
            store
                .sense(id)
                .is_some_and(|sense| targets.contains(sense.primary_lemma()))
        })
    })
}

/// Primary lemmas of the ancestors of `senses`, sense by sense in
/// breadth-first order, first occurrence kept.
pub fn ancestor_lemmas<S: LexicalStore>(store: &S, senses: &[SenseId]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for &start in senses {
        for id in Ancestors::new(store, start) {
            let Some(sense) = store.sense(id) else {
                continue;
            };
            let lemma = sense.primary_lemma();
            if seen.insert(lemma.to_string()) {
                out.push(lemma.to_string());
            }
        }
    }
    out
}
