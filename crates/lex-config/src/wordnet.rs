//! WordNet database location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_load_exceptions() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WordNetConfig {
    /// Directory holding `data.*`, `index.*` and `*.exc` files
    /// (e.g., `/usr/share/wordnet/dict`).
    #[serde(default)]
    pub dict_dir: String,

    /// Whether to read the `<pos>.exc` irregular-form tables.
    #[serde(default = "default_load_exceptions")]
    pub load_exceptions: bool,
}

impl Default for WordNetConfig {
    fn default() -> Self {
        Self {
            dict_dir: String::new(),
            load_exceptions: default_load_exceptions(),
        }
    }
}

impl WordNetConfig {
    /// Whether a dictionary directory has been set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.dict_dir.trim().is_empty()
    }

    /// The dictionary directory, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `dict_dir` is empty.
    pub fn dict_path(&self) -> Result<PathBuf, ConfigError> {
        if self.is_configured() {
            Ok(PathBuf::from(self.dict_dir.trim()))
        } else {
            Err(ConfigError::NotConfigured {
                section: "wordnet".to_string(),
            })
        }
    }
}
