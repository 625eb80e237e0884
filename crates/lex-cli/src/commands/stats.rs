use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lexon stats`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = ctx.engine.stats();
    if stats.has_cycles {
        tracing::warn!("hypernym graph contains cycles");
    }
    output(&stats, flags.format)
}
