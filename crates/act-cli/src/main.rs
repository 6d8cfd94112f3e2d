use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
#[cfg(test)]
mod test_support;
mod ui;

/// Env var holding a `tracing` filter directive; overrides `-q`/`-v`.
const LOG_ENV: &str = "ACTIVITY_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("act error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;
    ui::init(&flags);

    // The catalog is static; it needs neither config nor a store.
    if matches!(cli.command, cli::Commands::Catalog) {
        return commands::catalog::handle(&flags);
    }

    let config = bootstrap::load_config(&flags)?;
    context::warn_unconfigured(&config);

    let mut ctx = context::AppContext::init(config)?;
    commands::dispatch::dispatch(cli.command, &mut ctx, &flags).await
}

const fn default_directive(flags: &cli::GlobalFlags) -> &'static str {
    match (flags.quiet, flags.verbose) {
        (true, _) => "error",
        (false, true) => "debug",
        (false, false) => "warn",
    }
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(flags)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(quiet: bool, verbose: bool) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Table,
            limit: None,
            quiet,
            verbose,
            store: None,
        }
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(default_directive(&flags(true, true)), "error");
        assert_eq!(default_directive(&flags(false, true)), "debug");
        assert_eq!(default_directive(&flags(false, false)), "warn");
    }
}
