//! Nuunpad CLI - export notes from a local storage snapshot.
//!
//! Reads a JSON dump of browser local storage, collects every `note-` entry and
//! writes them to `nuunpad-notes-DD-MM-YYYY-HH-MM.json`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod ui;

use cli::{Cli, Commands};
use constants::DEFAULT_LOG_FILTER;
use errors::exit_code_for;
use nuunpad_core::VERSION;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(exit_code_for(&err));
    }
}

/// Log to stderr so stdout stays clean for JSON output. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => DEFAULT_LOG_FILTER,
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Export(args)) => commands::handle_export(cli, args),
        Some(Commands::List(args)) => commands::handle_list(cli, args),
        Some(Commands::Config(args)) => commands::handle_config(cli, args),
        Some(Commands::Completions { shell }) => commands::handle_completions(*shell),
        None => {
            println!("Nuunpad v{}", VERSION);
            println!("\nRun `nuunpad --help` for usage information.");
            Ok(())
        }
    }
}
