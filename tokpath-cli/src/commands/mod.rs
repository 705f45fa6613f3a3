//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Expand tokens in paths
//! - `check`: Test a path for token syntax
//! - `lookup`: Show a token's stored value
//! - `validate`: Validate a token store file
//! - `show_store`: Show the store configuration would use
//! - `completions`: Generate shell completions

pub mod check;
pub mod completions;
pub mod lookup;
pub mod resolve;
pub mod show_store;
pub mod validate;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use lookup::LookupCommand;
pub use resolve::ResolveCommand;
pub use show_store::ShowStoreCommand;
pub use validate::ValidateCommand;
