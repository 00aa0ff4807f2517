use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;
mod config;
mod console;
mod orders;

use cli::{Command, RootArgs};
use config::{resolve_config, PathOverrides};

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.verbose);

    let overrides = PathOverrides {
        pending: args.ledgers.pending.clone(),
        served: args.ledgers.served.clone(),
    };
    let config = resolve_config(args.ledgers.config.as_deref(), &overrides)?;

    match args.command.unwrap_or(Command::Console) {
        Command::Console => commands::run_console(&config),
        Command::Add(add) => commands::run_add(&config, &add),
        Command::Report(report) => commands::run_report(&config, &report),
        Command::Fulfill(fulfill) => commands::run_fulfill(&config, &fulfill),
        Command::Pending => commands::run_pending(&config),
        Command::Config(config_args) => commands::run_config(&config, &config_args),
    }
}

/// Logs go to stderr so reports and prompts on stdout stay clean.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "odesk=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .init();
}
