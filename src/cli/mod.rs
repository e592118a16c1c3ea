//! CLI module for libris
//!
//! Provides the command-line interface:
//! - serve: Boot the catalog and enter the HTTP serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use errors::{CliError, CliResult};
