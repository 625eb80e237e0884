use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use lex_config::LexonConfig;
use lex_engine::{LexicalEngine, MorphRule, Morphology, RuleSet, TracingObserver};
use lex_wordnet::{ExceptionTable, WordNetLoader};

use crate::cli::GlobalFlags;
use crate::progress::Progress;

pub fn load_config() -> anyhow::Result<LexonConfig> {
    LexonConfig::load_with_dotenv().context("failed to load lexon configuration")
}

/// `--dict` wins over `wordnet.dict_dir`.
pub fn resolve_dict_dir(flags: &GlobalFlags, config: &LexonConfig) -> anyhow::Result<PathBuf> {
    if let Some(dict) = &flags.dict {
        return Ok(PathBuf::from(dict));
    }
    config
        .wordnet
        .dict_path()
        .context("no WordNet dictionary; pass --dict or set LEXON_WORDNET__DICT_DIR")
}

/// Exception tables plus the configured rule set.
pub fn build_morphology(
    config: &LexonConfig,
    exceptions: ExceptionTable,
) -> anyhow::Result<Morphology> {
    let mut rules = if config.morphology.default_rules {
        RuleSet::english()
    } else {
        RuleSet::empty()
    };
    let extra = config.morphology.parsed_rules()?;
    rules.extend(
        extra
            .into_iter()
            .map(|(category, suffix, replacement)| MorphRule::new(category, suffix, replacement)),
    );
    Ok(Morphology::new(exceptions, rules))
}

pub fn build_engine(dict_dir: &Path, config: &LexonConfig) -> anyhow::Result<LexicalEngine> {
    let progress = Progress::spinner(&format!("Loading WordNet from {}", dict_dir.display()));
    let loader = WordNetLoader::new(dict_dir);

    let kb = match loader.load() {
        Ok(kb) => kb,
        Err(error) => {
            progress.finish_err("WordNet load failed");
            return Err(error)
                .with_context(|| format!("failed to load WordNet from {}", dict_dir.display()));
        }
    };

    let exceptions = if config.wordnet.load_exceptions {
        progress.set_message("Loading exception tables");
        loader
            .load_exceptions()
            .context("failed to load exception tables")?
    } else {
        ExceptionTable::new()
    };
    progress.finish_clear();

    let morphology = build_morphology(config, exceptions)?;
    tracing::debug!(
        rules = morphology.rules().len(),
        exceptions = morphology.exceptions().len(),
        "morphology ready"
    );

    let engine = LexicalEngine::new(Arc::new(kb), morphology);
    Ok(if config.general.trace_queries {
        engine.with_observer(TracingObserver)
    } else {
        engine
    })
}
