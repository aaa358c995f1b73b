//! Error types for tabular I/O

use kurator_domain::HeaderError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing delimited text
#[derive(Error, Debug)]
pub enum TabularError {
    /// The path does not point to an existing file
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file has no header line
    #[error("File has no header: {}", .0.display())]
    Empty(PathBuf),

    /// The header row is malformed
    #[error("Invalid header: {0}")]
    Header(#[from] HeaderError),

    /// Bytes could not be decoded with the requested encoding
    #[error("Cannot decode {} as {encoding}", .path.display())]
    Decode {
        /// File being decoded
        path: PathBuf,
        /// Encoding label that failed
        encoding: String,
    },

    /// Text holds a character the file's encoding cannot represent
    #[error("Cannot write {ch:?} to {} as {encoding}", .path.display())]
    Encode {
        /// File being written
        path: PathBuf,
        /// Encoding of the file
        encoding: String,
        /// First character that does not fit
        ch: char,
    },

    /// Encoding label not recognised
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Delimiter not recognised
    #[error("Unsupported delimiter: {0:?}")]
    UnsupportedDelimiter(String),

    /// Malformed delimited text
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
