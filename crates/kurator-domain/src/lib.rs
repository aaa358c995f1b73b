//! Kurator Domain Layer
//!
//! This crate holds the value types and trait seams shared by every other crate
//! in the workspace. It has ZERO external dependencies so the reader, store,
//! extractor and CLI layers can all depend on it without pulling in I/O.
//!
//! ## Key Concepts
//!
//! - **Header**: ordered, unique field names of one tabular source
//! - **Row**: one data row, addressed by field name through its header
//! - **Composite key**: several field values joined in a fixed order by a separator
//! - **Vocabulary entry**: one row of an append-only vocabulary lookup file
//! - **Token statistics**: whitespace-token frequencies for one field
//! - **Darwin Core terms**: the reference term lists used for classification
//!
//! ## Architecture
//!
//! - Pure data and pure functions only
//! - File-backed implementations live in `kurator-tabular` and `kurator-store`
//! - Trait definitions (`RowSource`, `VocabularyStore`) mark the seams

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod composite;
pub mod header;
pub mod report;
pub mod row;
pub mod terms;
pub mod traits;
pub mod vocabulary;

// Re-exports for convenience
pub use composite::{compose_key, CompositeKey, DEFAULT_SEPARATOR};
pub use header::{clean_header, merge_headers, slugify, Header, HeaderError};
pub use report::{FieldCompleteness, TokenReport, TokenStats, ValueCount};
pub use row::Row;
pub use traits::{RowSource, VecRowSource, VocabularyStore};
pub use vocabulary::{VocabularyEntry, VocabularyKind};
