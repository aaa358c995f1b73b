//! Trait definitions at the I/O seams

use crate::{Header, Row, VocabularyEntry};
use std::collections::HashSet;
use std::sync::Arc;

/// A tabular source yielding rows against one header
///
/// Implementations read lazily; the extractor makes a single pass.
pub trait RowSource {
    /// Error type for read failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// Header of the source
    fn header(&self) -> &Arc<Header>;

    /// Next data row, `None` at end of input
    fn next_row(&mut self) -> Option<Result<Row, Self::Error>>;
}

/// Append-only, deduplicating vocabulary storage
pub trait VocabularyStore {
    /// Error type for storage operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Keys already present; empty when the store does not exist yet
    fn existing_keys(&self) -> Result<HashSet<String>, Self::Error>;

    /// Append candidates that are not yet present
    ///
    /// Returns the keys actually added, in candidate order. Calling this twice
    /// with the same candidates adds nothing the second time.
    fn append_new(&self, candidates: &[String]) -> Result<Vec<String>, Self::Error>;

    /// All entries in file order
    fn entries(&self) -> Result<Vec<VocabularyEntry>, Self::Error>;
}

/// In-memory row source, mostly for tests and piping already-read data
#[derive(Debug, Clone)]
pub struct VecRowSource {
    header: Arc<Header>,
    rows: std::vec::IntoIter<Vec<String>>,
}

impl VecRowSource {
    /// Wrap a header and raw row values
    pub fn new(header: Header, rows: Vec<Vec<String>>) -> Self {
        Self {
            header: Arc::new(header),
            rows: rows.into_iter(),
        }
    }
}

impl RowSource for VecRowSource {
    type Error = std::convert::Infallible;

    fn header(&self) -> &Arc<Header> {
        &self.header
    }

    fn next_row(&mut self) -> Option<Result<Row, Self::Error>> {
        self.rows
            .next()
            .map(|values| Ok(Row::new(Arc::clone(&self.header), values)))
    }
}
