//! Error types for vocabulary storage

use kurator_tabular::TabularError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during vocabulary operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the vocabulary file failed
    #[error("Vocabulary file error: {0}")]
    Tabular(#[from] TabularError),

    /// No candidate list was supplied
    #[error("No candidate values given")]
    NoCandidates,

    /// Existing file header differs from the header this vocabulary expects
    #[error("Header of {} does not match the vocabulary header: expected {expected:?}, found {found:?}", .path.display())]
    HeaderMismatch {
        /// Vocabulary file
        path: PathBuf,
        /// Header this vocabulary writes
        expected: Vec<String>,
        /// Header found in the file
        found: Vec<String>,
    },
}
