use std::collections::HashSet;

use lex_core::responses::StatusResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HypernymCheckArgs;
use crate::commands::shared::parse_category;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lexon hypernym-check`.
pub fn handle(
    args: &HypernymCheckArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let category = parse_category(&args.pos, flags)?;
    let targets: HashSet<String> = args.targets.iter().cloned().collect();
    let status = ctx.engine.is_descendant_of(&args.word, category, &targets);
    output(&StatusResponse { status }, flags.format)
}
