//! Error types for the CLI application.

use kurator_extractor::ExtractorError;
use kurator_store::StoreError;
use kurator_tabular::TabularError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required option was not given
    #[error("{0}")]
    MissingInput(String),

    /// A given path does not point to a file
    #[error("{what} not found: {path}")]
    FileNotFound {
        /// Role of the file, e.g. "Input file"
        what: String,
        /// Path as given
        path: String,
    },

    /// Extraction error
    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    /// Vocabulary error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// File I/O error
    #[error(transparent)]
    Tabular(#[from] TabularError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
