//! Command to show the token store configuration resolves to.

use crate::error::CliError;
use crate::utils::{load_configuration, print_structured, GlobalOptions, OutputFormat};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tokpath::store::StoreDocument;

/// Show the token store that would be used.
#[derive(Args)]
pub struct ShowStoreCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "plain", ignore_case = true)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct StoreInfo {
    path: PathBuf,
    platform: String,
    tokens: Option<usize>,
}

impl ShowStoreCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = config.store_path().ok_or(CliError::NoStore)?;

        if self.format == OutputFormat::Plain {
            println!("{}", path.display());
            return Ok(());
        }

        // An unreadable store is still reported, just without a count
        let info = StoreInfo {
            path: path.to_path_buf(),
            platform: config.platform().to_string(),
            tokens: StoreDocument::load(path).ok().map(|doc| doc.len()),
        };
        print_structured(&info, self.format)
    }
}
