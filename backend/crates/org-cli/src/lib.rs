//! org-cli library
//!
//! Argument parsing and command dispatch for the `orgtree` binary, exported
//! so the dispatch can be driven against any store in tests.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use app::{execute, resolve_actor, run};
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result};
