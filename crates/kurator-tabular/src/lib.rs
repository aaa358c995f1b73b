//! Kurator Tabular I/O
//!
//! Reads and writes the delimited text files every other layer works on.
//!
//! # Dialect
//!
//! - Comma or tab delimited, detected from the header line unless given
//! - Optional double-quote quoting
//! - UTF-8, falling back to Latin-1 when the bytes are not valid UTF-8
//! - The first record is always the header
//!
//! # Examples
//!
//! ```no_run
//! use kurator_tabular::{read_header, Delimiter, write_header};
//!
//! write_header("vocab.txt", &["verbatim".to_string()], Delimiter::Tab).unwrap();
//! assert_eq!(read_header("vocab.txt").unwrap(), vec!["verbatim"]);
//! ```

#![warn(missing_docs)]

mod check;
mod dialect;
mod error;
mod reader;
mod writer;

pub use check::{check_field_counts, composite_header, ShortRow};
pub use dialect::{sniff, Delimiter, Dialect, Encoding, ReadOptions};
pub use error::TabularError;
pub use reader::{read_header, read_header_with, TabularReader};
pub use writer::{append_rows, write_header, write_table};
