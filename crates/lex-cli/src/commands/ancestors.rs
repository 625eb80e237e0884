use lex_core::responses::WordsResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AncestorsArgs;
use crate::commands::shared::parse_category;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lexon ancestors`.
pub fn handle(args: &AncestorsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let category = parse_category(&args.pos, flags)?;
    let words = ctx.engine.ancestors(&args.word, category);
    output(&WordsResponse { words }, flags.format)
}
