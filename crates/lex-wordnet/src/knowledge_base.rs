//! Arena-backed knowledge base and its builder.

use std::collections::HashMap;

use lex_core::{Category, SenseId};
use rustworkx_core::petgraph::Direction;
use rustworkx_core::petgraph::algo::toposort;
use rustworkx_core::petgraph::graph::{DiGraph, NodeIndex};

use crate::error::BuildError;
use crate::sense::Sense;
use crate::store::LexicalStore;

/// Lemma -> senses, one map per category (indexed by [`Category::ordinal`]).
pub(crate) type LemmaIndex = [HashMap<String, Vec<SenseId>>; 4];

/// Immutable store of word senses connected by hypernym edges.
///
/// Senses live in a `DiGraph` arena; edges point from a sense to its
/// hypernym. `SenseId` and `NodeIndex` share the same numbering.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    graph: DiGraph<Sense, ()>,
    lemma_index: LemmaIndex,
}

impl KnowledgeBase {
    /// Assemble a knowledge base from an explicit lemma index.
    ///
    /// `edges` are `(child, parent)` pairs, already validated by the caller.
    pub(crate) fn assemble(
        senses: Vec<Sense>,
        edges: &[(SenseId, SenseId)],
        lemma_index: LemmaIndex,
    ) -> Self {
        let mut graph = DiGraph::with_capacity(senses.len(), edges.len());
        for sense in senses {
            graph.add_node(sense);
        }
        // petgraph yields neighbors newest-first; add in reverse so that
        // iteration follows recording order.
        for &(child, parent) in edges.iter().rev() {
            graph.add_edge(node(child), node(parent), ());
        }
        Self { graph, lemma_index }
    }

    /// Number of senses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Number of distinct `(lemma, category)` keys in the lemma index.
    #[must_use]
    pub fn lemma_count(&self) -> usize {
        self.lemma_index.iter().map(HashMap::len).sum()
    }

    /// Number of hypernym edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the hypernym relation contains a cycle.
    #[must_use]
    pub fn has_cycles(&self) -> bool {
        toposort(&self.graph, None).is_err()
    }

    /// Iterate every sense with its id, in id order.
    pub fn senses(&self) -> impl Iterator<Item = (SenseId, &Sense)> + '_ {
        self.graph
            .node_indices()
            .map(|idx| (sense_id(idx), &self.graph[idx]))
    }
}

impl LexicalStore for KnowledgeBase {
    fn senses_of(&self, word: &str, category: Category) -> &[SenseId] {
        self.lemma_index[category.ordinal()]
            .get(word)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn sense(&self, id: SenseId) -> Option<&Sense> {
        self.graph.node_weight(node(id))
    }

    fn hypernyms(&self, id: SenseId) -> impl Iterator<Item = SenseId> + '_ {
        self.graph
            .neighbors_directed(node(id), Direction::Outgoing)
            .map(sense_id)
    }
}

fn node(id: SenseId) -> NodeIndex {
    NodeIndex::new(id.index())
}

#[allow(clippy::cast_possible_truncation)] // the arena is u32-indexed
fn sense_id(idx: NodeIndex) -> SenseId {
    SenseId::new(idx.index() as u32)
}

/// Builds a [`KnowledgeBase`] sense by sense.
///
/// Lemmas are indexed in the order senses are added, so the first sense
/// added for a `(lemma, category)` pair becomes its primary sense.
#[derive(Debug, Default)]
pub struct KnowledgeBaseBuilder {
    senses: Vec<Sense>,
    edges: Vec<(SenseId, SenseId)>,
}

impl KnowledgeBaseBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sense whose offset is its position in the arena.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptySense`] if `lemmas` is empty.
    pub fn add_sense<I, L>(&mut self, category: Category, lemmas: I) -> Result<SenseId, BuildError>
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let offset = u32::try_from(self.senses.len()).unwrap_or(u32::MAX);
        self.add_sense_at(category, offset, lemmas)
    }

    /// Add a sense with an explicit source offset.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptySense`] if `lemmas` is empty.
    pub fn add_sense_at<I, L>(
        &mut self,
        category: Category,
        offset: u32,
        lemmas: I,
    ) -> Result<SenseId, BuildError>
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let lemmas: Vec<String> = lemmas.into_iter().map(Into::into).collect();
        if lemmas.is_empty() {
            return Err(BuildError::EmptySense);
        }
        let id = SenseId::new(u32::try_from(self.senses.len()).unwrap_or(u32::MAX));
        self.senses.push(Sense::new(category, offset, lemmas));
        Ok(id)
    }

    /// Record that `parent` is a hypernym of `child`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownSense`] if either id was not issued by
    /// this builder.
    pub fn add_hypernym(&mut self, child: SenseId, parent: SenseId) -> Result<(), BuildError> {
        for id in [child, parent] {
            if id.index() >= self.senses.len() {
                return Err(BuildError::UnknownSense(id));
            }
        }
        self.edges.push((child, parent));
        Ok(())
    }

    /// Number of senses added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.senses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }

    /// Hand over the senses without building a lemma index.
    pub(crate) fn into_senses(self) -> Vec<Sense> {
        self.senses
    }

    /// Finish, indexing every lemma of every sense under its category.
    #[must_use]
    pub fn build(self) -> KnowledgeBase {
        let mut lemma_index: LemmaIndex = Default::default();
        for (i, sense) in self.senses.iter().enumerate() {
            let id = SenseId::new(u32::try_from(i).unwrap_or(u32::MAX));
            let slot = &mut lemma_index[sense.category().ordinal()];
            for lemma in sense.lemmas() {
                let ids = slot.entry(lemma.clone()).or_default();
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        KnowledgeBase::assemble(self.senses, &self.edges, lemma_index)
    }
}
