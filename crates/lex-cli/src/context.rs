use lex_config::LexonConfig;
use lex_engine::LexicalEngine;

use crate::bootstrap;
use crate::cli::GlobalFlags;

/// Everything a command handler needs.
pub struct AppContext {
    pub engine: LexicalEngine,
}

impl AppContext {
    pub fn init(flags: &GlobalFlags, config: &LexonConfig) -> anyhow::Result<Self> {
        let dict_dir = bootstrap::resolve_dict_dir(flags, config)?;
        let engine = bootstrap::build_engine(&dict_dir, config)?;
        Ok(Self { engine })
    }
}
