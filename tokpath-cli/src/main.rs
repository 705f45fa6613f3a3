//! Main entry point for the tokpath CLI.
//!
//! This is the command-line interface for symbolic path token resolution.
//! It provides commands for working with tokens and stores:
//! - `resolve`: Expand tokens in paths
//! - `check`: Test whether a path is resolved or a single token
//! - `lookup`: Show a token's stored value
//! - `validate`: Check a token store file
//! - `show-store`: Show which store would be used

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library logging to stderr based on verbosity
    let logger = tokpath::init_logger(cli.verbose, cli.quiet);
    let level = logger.level();
    if let Err(e) = logger.install() {
        tokpath::Logger::new(level).debug(&format!("log backend not installed: {e}"));
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        store: cli.store,
        platform: cli.platform,
    };

    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Lookup(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::ShowStore(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
