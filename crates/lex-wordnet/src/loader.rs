//! Reader for a pre-built WordNet 3.x `dict/` directory.
//!
//! Only the files needed for sense lookup and the hypernym relation are read:
//!
//! ```text
//! data.{noun,verb,adj,adv}   synset records and their pointers
//! index.{noun,verb,adj,adv}  lemma -> synset offsets, most frequent first
//! {noun,verb,adj,adv}.exc    irregular inflections (see ExceptionTable)
//! ```
//!
//! Lines starting with a space are license header lines and are skipped.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::SplitWhitespace;

use lex_core::{Category, SenseId};

use crate::error::LoadError;
use crate::exceptions::ExceptionTable;
use crate::knowledge_base::{KnowledgeBase, KnowledgeBaseBuilder, LemmaIndex};

/// Pointer symbol for a (class) hypernym. Instance hypernyms (`@i`) and all
/// other relations are not edges of the knowledge base.
const HYPERNYM: &str = "@";

/// Loads a [`KnowledgeBase`] and [`ExceptionTable`] from a WordNet directory.
#[derive(Debug, Clone)]
pub struct WordNetLoader {
    dict_dir: PathBuf,
}

/// A hypernym pointer waiting for its target offset to be resolved.
struct PendingEdge {
    child: SenseId,
    target: (Category, u32),
    file: String,
    line: usize,
}

impl WordNetLoader {
    #[must_use]
    pub fn new(dict_dir: impl Into<PathBuf>) -> Self {
        Self {
            dict_dir: dict_dir.into(),
        }
    }

    #[must_use]
    pub fn dict_dir(&self) -> &Path {
        &self.dict_dir
    }

    /// Read every `data.*` and `index.*` file into a knowledge base.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingFile`] if any of the eight files is absent,
    /// [`LoadError::Parse`] on a malformed line, and
    /// [`LoadError::DanglingPointer`] when a pointer or index entry names an
    /// offset with no synset record.
    pub fn load(&self) -> Result<KnowledgeBase, LoadError> {
        let mut builder = KnowledgeBaseBuilder::new();
        let mut offsets: HashMap<(Category, u32), SenseId> = HashMap::new();
        let mut pending = Vec::new();

        for category in Category::ALL {
            let name = format!("data.{}", category.file_suffix());
            let text = self.read_required(&name)?;
            let before = builder.len();
            for (i, line) in records(&text) {
                let record = parse_data_line(line).map_err(|reason| LoadError::Parse {
                    file: name.clone(),
                    line: i,
                    reason,
                })?;
                let id = builder.add_sense_at(category, record.offset, record.lemmas)?;
                offsets.insert((category, record.offset), id);
                pending.extend(record.hypernyms.into_iter().map(|target| PendingEdge {
                    child: id,
                    target,
                    file: name.clone(),
                    line: i,
                }));
            }
            tracing::debug!(file = %name, senses = builder.len() - before, "read data file");
        }

        let mut edges = Vec::with_capacity(pending.len());
        for edge in pending {
            let Some(&parent) = offsets.get(&edge.target) else {
                return Err(LoadError::DanglingPointer {
                    file: edge.file,
                    line: edge.line,
                    offset: edge.target.1,
                });
            };
            edges.push((edge.child, parent));
        }

        let mut lemma_index: LemmaIndex = Default::default();
        for category in Category::ALL {
            let name = format!("index.{}", category.file_suffix());
            let text = self.read_required(&name)?;
            let slot = &mut lemma_index[category.ordinal()];
            for (i, line) in records(&text) {
                let (lemma, targets) =
                    parse_index_line(line).map_err(|reason| LoadError::Parse {
                        file: name.clone(),
                        line: i,
                        reason,
                    })?;
                let mut ids = Vec::with_capacity(targets.len());
                for offset in targets {
                    let Some(&id) = offsets.get(&(category, offset)) else {
                        return Err(LoadError::DanglingPointer {
                            file: name.clone(),
                            line: i,
                            offset,
                        });
                    };
                    ids.push(id);
                }
                slot.insert(lemma.to_string(), ids);
            }
            tracing::debug!(file = %name, lemmas = slot.len(), "read index file");
        }

        let senses = builder.into_senses();
        let kb = KnowledgeBase::assemble(senses, &edges, lemma_index);
        tracing::info!(
            dict_dir = %self.dict_dir.display(),
            senses = kb.len(),
            lemmas = kb.lemma_count(),
            hypernym_edges = kb.edge_count(),
            "loaded WordNet knowledge base"
        );
        Ok(kb)
    }

    /// Read the `<pos>.exc` files of this directory.
    ///
    /// # Errors
    ///
    /// See [`ExceptionTable::load_dir`].
    pub fn load_exceptions(&self) -> Result<ExceptionTable, LoadError> {
        let table = ExceptionTable::load_dir(&self.dict_dir)?;
        tracing::info!(entries = table.len(), "loaded exception tables");
        Ok(table)
    }

    fn read_required(&self, name: &str) -> Result<String, LoadError> {
        let path = self.dict_dir.join(name);
        if !path.exists() {
            return Err(LoadError::MissingFile(path));
        }
        read_file(&path)
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Non-empty, non-header lines with their 1-based line numbers.
fn records(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(' '))
}

struct DataRecord {
    offset: u32,
    lemmas: Vec<String>,
    hypernyms: Vec<(Category, u32)>,
}

/// `offset lex_filenum ss_type w_cnt {word lex_id} p_cnt {ptr} [frames] | gloss`
fn parse_data_line(line: &str) -> Result<DataRecord, String> {
    let body = line.split_once('|').map_or(line, |(body, _gloss)| body);
    let mut fields = body.split_whitespace();

    let offset = parse_offset(field(&mut fields, "synset offset")?)?;
    field(&mut fields, "lexicographer file number")?;
    let ss_type = field(&mut fields, "synset type")?;
    if !matches!(ss_type, "n" | "v" | "a" | "s" | "r") {
        return Err(format!("unknown synset type '{ss_type}'"));
    }

    let w_cnt = field(&mut fields, "word count")?;
    let w_cnt =
        usize::from_str_radix(w_cnt, 16).map_err(|e| format!("word count '{w_cnt}': {e}"))?;
    let mut lemmas = Vec::with_capacity(w_cnt);
    for _ in 0..w_cnt {
        let word = field(&mut fields, "word")?;
        field(&mut fields, "lex_id")?;
        lemmas.push(strip_syntactic_marker(word).to_string());
    }

    let p_cnt = field(&mut fields, "pointer count")?;
    let p_cnt: usize = p_cnt
        .parse()
        .map_err(|e| format!("pointer count '{p_cnt}': {e}"))?;
    let mut hypernyms = Vec::new();
    for _ in 0..p_cnt {
        let symbol = field(&mut fields, "pointer symbol")?;
        let target = parse_offset(field(&mut fields, "pointer offset")?)?;
        let pos = field(&mut fields, "pointer part of speech")?;
        field(&mut fields, "pointer source/target")?;
        if symbol == HYPERNYM {
            let category = pos
                .chars()
                .next()
                .and_then(Category::from_code)
                .ok_or_else(|| format!("unknown pointer part of speech '{pos}'"))?;
            hypernyms.push((category, target));
        }
    }

    Ok(DataRecord {
        offset,
        lemmas,
        hypernyms,
    })
}

/// `lemma pos synset_cnt p_cnt {ptr_symbol} sense_cnt tagsense_cnt {offset}`
fn parse_index_line(line: &str) -> Result<(&str, Vec<u32>), String> {
    let mut fields = line.split_whitespace();
    let lemma = field(&mut fields, "lemma")?;
    field(&mut fields, "part of speech")?;
    let synset_cnt = parse_count(field(&mut fields, "synset count")?)?;
    let p_cnt = parse_count(field(&mut fields, "pointer count")?)?;
    for _ in 0..p_cnt {
        field(&mut fields, "pointer symbol")?;
    }
    field(&mut fields, "sense count")?;
    field(&mut fields, "tagged sense count")?;
    let offsets = (0..synset_cnt)
        .map(|_| parse_offset(field(&mut fields, "synset offset")?))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((lemma, offsets))
}

fn field<'a>(fields: &mut SplitWhitespace<'a>, what: &str) -> Result<&'a str, String> {
    fields.next().ok_or_else(|| format!("missing {what}"))
}

fn parse_offset(raw: &str) -> Result<u32, String> {
    raw.parse().map_err(|e| format!("offset '{raw}': {e}"))
}

fn parse_count(raw: &str) -> Result<usize, String> {
    raw.parse().map_err(|e| format!("count '{raw}': {e}"))
}

/// Adjectives may carry a position marker: `galore(ip)`, `elect(p)`, `able(a)`.
fn strip_syntactic_marker(word: &str) -> &str {
    match word.strip_suffix(')').and_then(|w| w.rfind('(').map(|i| &w[..i])) {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => word,
    }
}
