//! Command to check a path for token syntax.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use tokpath::token::{is_resolved, parse_token};

/// Check whether a path is resolved, or whether it is a single token.
#[derive(Args)]
pub struct CheckCommand {
    /// Path or segment to check
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Succeed only if the input is exactly one token
    #[arg(long)]
    pub token: bool,
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.token {
            let Some(spec) = parse_token(&self.input) else {
                return Err(CliError::SemanticFailure(format!(
                    "'{}' is not a token",
                    self.input
                )));
            };

            if !global.quiet {
                match spec.separator {
                    Some(sep) => println!("{} (separator {sep})", spec.name),
                    None => println!("{}", spec.name),
                }
            }
            return Ok(());
        }

        if is_resolved(&self.input) {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "'{}' contains unresolved tokens",
                self.input
            )))
        }
    }
}
