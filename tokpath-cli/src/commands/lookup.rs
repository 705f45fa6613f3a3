//! Command to show the stored value of a single token.

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_store, print_structured, GlobalOptions, OutputFormat,
};
use clap::Args;
use tokpath::store::TokenValue;

/// Show the stored value of a token without expanding it.
#[derive(Args)]
pub struct LookupCommand {
    /// Token name, without angle brackets
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Show every platform's value instead of the selected one
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "plain", ignore_case = true)]
    pub format: OutputFormat,
}

impl LookupCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Accept "<name>" as well as "name"
        let name = self
            .name
            .strip_prefix('<')
            .and_then(|n| n.strip_suffix('>'))
            .unwrap_or(self.name.as_str())
            .trim_start_matches(['/', '\\']);
        if name.is_empty() {
            return Err(CliError::InvalidArguments("token name is empty".to_string()));
        }

        let config = load_configuration(global)?;
        let store = open_store(&config)?;
        let value = store.lookup(name)?;

        if self.all {
            return match (self.format, &value) {
                (OutputFormat::Plain, TokenValue::Literal(literal)) => {
                    println!("{literal}");
                    Ok(())
                }
                (OutputFormat::Plain, TokenValue::PerPlatform(table)) => {
                    for (platform, entry) in table {
                        println!("{platform}\t{entry}");
                    }
                    Ok(())
                }
                (format, value) => print_structured(value, format),
            };
        }

        let selected = value.select(name, &config.platform())?;
        match self.format {
            OutputFormat::Plain => {
                println!("{selected}");
                Ok(())
            }
            format => print_structured(&selected, format),
        }
    }
}
