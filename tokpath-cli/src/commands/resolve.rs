//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which expands every token
//! in its inputs and prints one resolved path per input.

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_resolver, print_structured, GlobalOptions, OutputFormat,
};
use clap::Args;
use tokpath::{ResolvedPath, Separator};

/// Resolve tokens in one or more paths.
#[derive(Args)]
pub struct ResolveCommand {
    /// Paths to resolve, e.g. '<root>/logs'
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<String>,

    /// Separator to normalize resolved paths to
    #[arg(long, value_enum, ignore_case = true)]
    pub separator: Option<Separator>,

    /// Output format
    #[arg(long, value_enum, default_value = "plain", ignore_case = true)]
    pub format: OutputFormat,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration and build the resolver
        let config = load_configuration(global)?;
        let resolver = open_resolver(&config)?;
        let separator = self.separator.or(config.separator);

        // 2. Resolve every input, stopping at the first failure
        let paths = self
            .inputs
            .iter()
            .map(|input| resolver.resolve(input, separator))
            .collect::<Result<Vec<ResolvedPath>, _>>()?;

        // 3. Print
        match self.format {
            OutputFormat::Plain => {
                for path in &paths {
                    println!("{path}");
                }
                Ok(())
            }
            format => print_structured(&paths, format),
        }
    }
}
