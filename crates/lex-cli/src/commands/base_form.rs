use lex_core::responses::WordResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BaseFormArgs;
use crate::commands::shared::fail;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lexon base-form`.
pub fn handle(args: &BaseFormArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let word = ctx
        .engine
        .canonicalize(&args.word, &args.pos)
        .map_err(|error| fail(error, flags))?;
    output(&WordResponse { word }, flags.format)
}
