use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

pub mod ancestors;
pub mod base_form;
pub mod derive_verb;
pub mod hypernym_check;
pub mod shared;
pub mod stats;
pub mod synonyms;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::BaseForm(args) => base_form::handle(args, ctx, flags),
        Commands::HypernymCheck(args) => hypernym_check::handle(args, ctx, flags),
        Commands::DeriveVerb(args) => derive_verb::handle(args, ctx, flags),
        Commands::Synonyms(args) => synonyms::handle(args, ctx, flags),
        Commands::Ancestors(args) => ancestors::handle(args, ctx, flags),
        Commands::Stats => stats::handle(ctx, flags),
    }
}
