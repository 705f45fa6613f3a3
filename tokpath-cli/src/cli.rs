//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckCommand, CompletionsCommand, LookupCommand, ResolveCommand, ShowStoreCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for expanding symbolic path tokens.
#[derive(Parser)]
#[command(name = "tokpath")]
#[command(version, about = "Resolve symbolic path tokens", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Token store file (JSON or YAML)
    #[arg(long, value_name = "PATH", global = true, env = "TOKPATH_STORE")]
    pub store: Option<PathBuf>,

    /// Platform key for per-platform tokens (defaults to the host)
    #[arg(long, value_name = "NAME", global = true, env = "TOKPATH_PLATFORM")]
    pub platform: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve tokens in one or more paths
    Resolve(ResolveCommand),

    /// Check whether a path is resolved or is a single token
    Check(CheckCommand),

    /// Show the stored value of a token
    Lookup(LookupCommand),

    /// Validate a token store file
    Validate(ValidateCommand),

    /// Show the token store that would be used
    ShowStore(ShowStoreCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tokpath",
            "resolve",
            "<root>",
            "--store",
            "paths.json",
            "--platform",
            "linux",
        ])
        .unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("paths.json")));
        assert_eq!(cli.platform.as_deref(), Some("linux"));
        assert!(matches!(cli.command, Command::Resolve(_)));
    }
}
