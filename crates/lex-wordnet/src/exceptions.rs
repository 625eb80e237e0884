//! Irregular inflection tables (`noun.exc`, `verb.exc`, `adj.exc`, `adv.exc`).

use std::collections::HashMap;
use std::path::Path;

use lex_core::Category;

use crate::error::LoadError;
use crate::loader::read_file;

/// (Category, irregular form) -> base form.
#[derive(Debug, Clone, Default)]
pub struct ExceptionTable {
    by_category: [HashMap<String, String>; 4],
}

impl ExceptionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(category, form, base)` triples; the first entry
    /// for a form wins.
    pub fn from_entries<I, F, B>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Category, F, B)>,
        F: Into<String>,
        B: Into<String>,
    {
        let mut table = Self::new();
        for (category, form, base) in entries {
            table.insert(category, form, base);
        }
        table
    }

    /// Insert unless `form` is already present; returns whether it was added.
    pub fn insert(
        &mut self,
        category: Category,
        form: impl Into<String>,
        base: impl Into<String>,
    ) -> bool {
        let slot = &mut self.by_category[category.ordinal()];
        let form = form.into();
        if slot.contains_key(&form) {
            return false;
        }
        slot.insert(form, base.into());
        true
    }

    #[must_use]
    pub fn get(&self, category: Category, form: &str) -> Option<&str> {
        self.by_category[category.ordinal()]
            .get(form)
            .map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_category.iter().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_category.iter().all(HashMap::is_empty)
    }

    /// Load every `<pos>.exc` file found in `dict_dir`.
    ///
    /// Missing files leave that category empty.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if a present file cannot be read or holds a
    /// line with fewer than two fields.
    pub fn load_dir(dict_dir: &Path) -> Result<Self, LoadError> {
        let mut table = Self::new();
        for category in Category::ALL {
            let name = format!("{}.exc", category.file_suffix());
            let path = dict_dir.join(&name);
            if !path.exists() {
                tracing::debug!(file = %path.display(), "no exception file; skipping");
                continue;
            }
            let text = read_file(&path)?;
            let added = table.parse_into(category, &name, &text)?;
            tracing::debug!(file = %name, entries = added, "loaded exception file");
        }
        Ok(table)
    }

    fn parse_into(
        &mut self,
        category: Category,
        file: &str,
        text: &str,
    ) -> Result<usize, LoadError> {
        let mut added = 0;
        for (i, line) in text.lines().enumerate() {
            let mut fields = line.split_whitespace();
            let Some(form) = fields.next() else {
                continue;
            };
            let Some(base) = fields.next() else {
                return Err(LoadError::Parse {
                    file: file.to_string(),
                    line: i + 1,
                    reason: format!("exception entry '{form}' has no base form"),
                });
            };
            if self.insert(category, form, base) {
                added += 1;
            }
        }
        Ok(added)
    }
}
