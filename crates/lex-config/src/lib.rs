//! # lex-config
//!
//! Layered configuration loading for Lexon using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LEXON_*` prefix, `__` as separator)
//! 2. Project-level `.lexon/config.toml`
//! 3. User-level `~/.config/lexon/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LEXON_WORDNET__DICT_DIR` -> `wordnet.dict_dir`,
//! `LEXON_GENERAL__TRACE_QUERIES` -> `general.trace_queries`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use lex_config::LexonConfig;
//!
//! let config = LexonConfig::load_with_dotenv().expect("config");
//!
//! if config.wordnet.is_configured() {
//!     println!("WordNet dictionary: {}", config.wordnet.dict_dir);
//! }
//! ```

mod error;
mod general;
mod morphology;
mod wordnet;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use morphology::{MorphologyConfig, RuleConfig};
pub use wordnet::WordNetConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LexonConfig {
    #[serde(default)]
    pub wordnet: WordNetConfig,
    #[serde(default)]
    pub morphology: MorphologyConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LexonConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading a `.env` file, if one exists.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".lexon/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("LEXON_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lexon").join("config.toml"))
    }

    /// Load `.env` from the current directory or the nearest ancestor.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
