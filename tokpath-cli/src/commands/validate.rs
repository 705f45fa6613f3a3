//! Command to validate a token store file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::path::PathBuf;
use tokpath::config::ConfigValidator;
use tokpath::store::StoreDocument;

/// Validate a token store file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Store file to validate (JSON, or YAML by extension)
    #[arg(value_name = "STORE_PATH")]
    pub store_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check file exists
        if !self.store_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.store_path.display()
            )));
        }

        // 2. Parse the file
        let document = match StoreDocument::load(&self.store_path) {
            Ok(doc) => doc,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Token store file is invalid".to_string(),
                ));
            }
        };

        // 3. Validate the entries
        match ConfigValidator::validate_store(&document) {
            Ok(()) => {
                if !global.quiet {
                    println!("Token store is valid ({} tokens)", document.len());
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Token store validation failed".to_string(),
                ))
            }
        }
    }
}
