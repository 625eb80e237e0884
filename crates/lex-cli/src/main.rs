use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("lexon error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();

    let config = bootstrap::load_config()?;
    init_tracing(&flags, &config.general.log_level)?;
    ui::init(&flags);

    let ctx = context::AppContext::init(&flags, &config)
        .context("failed to initialize lexon engine")?;

    commands::dispatch(&cli.command, &ctx, &flags)
}

fn init_tracing(flags: &cli::GlobalFlags, configured_level: &str) -> anyhow::Result<()> {
    let level = if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        configured_level
    };

    let filter = match tracing_subscriber::EnvFilter::try_from_env("LEXON_LOG") {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level '{level}'"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
