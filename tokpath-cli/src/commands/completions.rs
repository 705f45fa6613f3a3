//! Shell completion generation command.
//!
//! Writes a completion script for the requested shell to stdout, with setup
//! instructions on stderr so the script can be redirected cleanly.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary
const BIN_NAME: &str = "tokpath";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# To enable {} completions:", self.shell);
                eprintln!("#   {hint}");
                eprintln!();
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

/// Suggested way to load the generated script.
fn install_hint(shell: Shell) -> Option<String> {
    match shell {
        Shell::Bash => Some(format!("eval \"$({BIN_NAME} completions bash)\"")),
        Shell::Zsh => Some(format!(
            "{BIN_NAME} completions zsh > ~/.zsh/completions/_{BIN_NAME}"
        )),
        Shell::Fish => Some(format!(
            "{BIN_NAME} completions fish > ~/.config/fish/completions/{BIN_NAME}.fish"
        )),
        Shell::PowerShell => Some(format!(
            "{BIN_NAME} completions powershell | Out-String | Invoke-Expression"
        )),
        _ => None,
    }
}
