//! Build script for tokpath-cli.
//!
//! Generates the `tokpath.1` man page into OUT_DIR using clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here by hand.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs and src/commands/.
fn build_cli() -> Command {
    let format = || {
        Arg::new("format")
            .long("format")
            .help("Output format")
            .value_parser(["plain", "json", "yaml"])
            .default_value("plain")
    };

    Command::new("tokpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve symbolic path tokens")
        .long_about(
            "Expand <name> and <sepname> tokens in paths using a JSON or YAML token store, \
             with per-platform values and separator normalization",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .help("Token store file (JSON or YAML)")
                .value_name("PATH")
                .global(true)
                .env("TOKPATH_STORE"),
        )
        .arg(
            Arg::new("platform")
                .long("platform")
                .help("Platform key for per-platform tokens (defaults to the host)")
                .value_name("NAME")
                .global(true)
                .env("TOKPATH_PLATFORM"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve tokens in one or more paths")
                .arg(Arg::new("INPUT").required(true).num_args(1..))
                .arg(
                    Arg::new("separator")
                        .long("separator")
                        .help("Separator to normalize resolved paths to")
                        .value_parser(["slash", "backslash"]),
                )
                .arg(format()),
            Command::new("check")
                .about("Check whether a path is resolved or is a single token")
                .long_about("Exit 0 if INPUT contains no tokens (or, with --token, is one token)")
                .arg(Arg::new("INPUT").required(true))
                .arg(
                    Arg::new("token")
                        .long("token")
                        .help("Succeed only if the input is exactly one token")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("lookup")
                .about("Show the stored value of a token")
                .arg(Arg::new("NAME").required(true))
                .arg(
                    Arg::new("all")
                        .long("all")
                        .help("Show every platform's value instead of the selected one")
                        .action(ArgAction::SetTrue),
                )
                .arg(format()),
            Command::new("validate")
                .about("Validate a token store file")
                .arg(Arg::new("STORE_PATH").required(true)),
            Command::new("show-store")
                .about("Show the token store that would be used")
                .arg(format()),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(Arg::new("SHELL").required(true)),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("tokpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
