use lex_core::responses::WordResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DeriveVerbArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lexon derive-verb`. An empty `word` means no verb was found.
pub fn handle(args: &DeriveVerbArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let word = ctx.engine.derive(&args.noun);
    output(&WordResponse { word }, flags.format)
}
