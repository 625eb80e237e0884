use lex_core::responses::WordsResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SynonymsArgs;
use crate::commands::shared::parse_category;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lexon synonyms`.
pub fn handle(args: &SynonymsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let category = args
        .pos
        .as_deref()
        .map(|pos| parse_category(pos, flags))
        .transpose()?;
    let words = ctx.engine.synonyms(&args.word, category);
    output(&WordsResponse { words }, flags.format)
}
