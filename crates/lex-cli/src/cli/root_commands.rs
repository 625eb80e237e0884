use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Reduce an inflected word to its dictionary base form.
    BaseForm(BaseFormArgs),
    /// Check whether a word is a hyponym of any target lemma.
    HypernymCheck(HypernymCheckArgs),
    /// Find a verb sharing a noun's base spelling.
    DeriveVerb(DeriveVerbArgs),
    /// List every lemma sharing a sense with a word.
    Synonyms(SynonymsArgs),
    /// List the hypernym ancestors of a word.
    Ancestors(AncestorsArgs),
    /// Summarize the loaded knowledge base.
    Stats,
}

#[derive(Clone, Debug, Args)]
pub struct BaseFormArgs {
    /// Surface form, used exactly as given.
    pub word: String,
    /// Category: noun, verb, adjective, adverb (or n, v, a, r).
    #[arg(long)]
    pub pos: String,
}

#[derive(Clone, Debug, Args)]
pub struct HypernymCheckArgs {
    pub word: String,
    #[arg(long)]
    pub pos: String,
    /// Ancestor lemma to look for (repeatable).
    #[arg(short, long = "target", required = true)]
    pub targets: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DeriveVerbArgs {
    pub noun: String,
}

#[derive(Clone, Debug, Args)]
pub struct SynonymsArgs {
    pub word: String,
    /// Restrict to one category; all categories when omitted.
    #[arg(long)]
    pub pos: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AncestorsArgs {
    pub word: String,
    #[arg(long)]
    pub pos: String,
}
