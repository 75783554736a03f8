//! fuibind - UI package descriptor resolver
//!
//! Parses the package descriptors written by the UI editor and resolves the
//! binding model code generators emit from: exported components, bound
//! member types and the sub-panels nested below each root panel.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod parser;
mod progress;
mod registry;
mod resolver;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use commands::helpers::Session;
use error::Result;

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let open_session =
        || Session::open(cli.assets.clone(), cli.config.as_deref(), cli.include_default_names);

    match cli.command {
        Commands::Resolve(args) => commands::resolve::run(&open_session()?, args),
        Commands::List(args) => commands::list::run(&open_session()?, args),
        Commands::Panels(args) => commands::panels::run(&open_session()?, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
