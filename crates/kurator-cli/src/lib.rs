//! Kurator CLI library.
//!
//! This library provides the core functionality for the Kurator command-line interface:
//! argument parsing, configuration, one command per extraction or vocabulary
//! task, report files, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod response;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use response::ActorResponse;
