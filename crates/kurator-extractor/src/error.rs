//! Error types for the Extractor

use kurator_store::StoreError;
use kurator_tabular::TabularError;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Requested field is not in the source header
    #[error("Field not found in header: {0}")]
    MissingField(String),

    /// Key definition could not be parsed
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Reading a row from the source failed
    #[error("Source read error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// File I/O error
    #[error("Tabular error: {0}")]
    Tabular(#[from] TabularError),

    /// Vocabulary error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
