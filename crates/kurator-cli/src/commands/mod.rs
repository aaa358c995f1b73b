//! Command implementations.
//!
//! Each command has a function that runs it and returns an
//! [`ActorResponse`], and an `execute_*` wrapper that prints the response.
//! Failures the user can act on (missing options, missing files, missing
//! fields) become failed responses rather than errors.

pub mod append;
pub mod append_composite;
pub mod check_fields;
pub mod cloud_collect;
pub mod completeness;
pub mod composite_header;
pub mod darwinize;
pub mod extract;
pub mod extract_composite;
pub mod geog_collect;
pub mod recommend;
pub mod standardize;
pub mod term_count;
pub mod tokens;
pub mod unknown;
pub mod value_counts;

pub use self::append::{append, execute_append};
pub use self::append_composite::{append_composite, execute_append_composite};
pub use self::check_fields::{check_fields, execute_check_fields};
pub use self::cloud_collect::{cloud_collect, execute_cloud_collect};
pub use self::completeness::{completeness, execute_completeness};
pub use self::composite_header::{composite_header, execute_composite_header};
pub use self::darwinize::{darwinize, execute_darwinize};
pub use self::extract::{execute_extract, extract};
pub use self::extract_composite::{execute_extract_composite, extract_composite};
pub use self::geog_collect::{execute_geog_collect, geog_collect};
pub use self::recommend::{execute_recommend, recommend};
pub use self::standardize::{execute_standardize, standardize};
pub use self::term_count::{execute_term_count, term_count};
pub use self::tokens::{execute_tokens, tokens};
pub use self::unknown::{execute_unknown, unknown};
pub use self::value_counts::{execute_value_counts, value_counts};

use crate::cli::InputArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{Formatter, Render};
use crate::response::ActorResponse;
use kurator_extractor::Extractor;
use kurator_tabular::TabularReader;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Print a response and report whether the command succeeded.
pub(crate) fn emit<T: Render + Serialize>(
    response: ActorResponse<T>,
    formatter: &Formatter,
) -> Result<bool> {
    println!("{}", formatter.format_response(&response)?);
    Ok(response.success)
}

/// A non-blank option value, or `MissingInput` with the given message.
pub(crate) fn require<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CliError::MissingInput(message.to_string()))
}

/// Locate an input file as given, or failing that inside the workspace.
pub(crate) fn input_file(value: Option<&str>, workspace: &Path) -> Result<PathBuf> {
    let given = require(value, "No input file given")?;
    let path = PathBuf::from(given);
    if path.is_file() {
        return Ok(path);
    }
    let in_workspace = workspace.join(given);
    if in_workspace.is_file() {
        return Ok(in_workspace);
    }
    Err(CliError::FileNotFound {
        what: "Input file".to_string(),
        path: given.to_string(),
    })
}

/// Path of a vocabulary file, which need not exist yet.
pub(crate) fn vocabulary_file(value: Option<&str>, config: &Config) -> Result<PathBuf> {
    let given = require(value, "No vocabulary file given")?;
    Ok(config.vocabulary_path(given))
}

/// Path of a vocabulary file that must already exist.
pub(crate) fn existing_vocabulary_file(value: Option<&str>, config: &Config) -> Result<PathBuf> {
    let path = vocabulary_file(value, config)?;
    if !path.is_file() {
        return Err(CliError::FileNotFound {
            what: "Vocabulary file".to_string(),
            path: path.display().to_string(),
        });
    }
    Ok(path)
}

/// Open the data file named by the source options.
pub(crate) fn open_source(source: &InputArgs, config: &Config) -> Result<TabularReader> {
    let path = input_file(source.input.as_deref(), &config.settings.workspace)?;
    Ok(TabularReader::open_with(path, source.read_options())?)
}

/// Extractor for the configured settings.
pub(crate) fn extractor(config: &Config) -> Extractor {
    Extractor::new(config.extractor.clone())
}

/// Trimmed, non-blank entries of a comma separated option.
pub(crate) fn value_list(values: Option<&[String]>) -> Vec<String> {
    values
        .unwrap_or_default()
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}
