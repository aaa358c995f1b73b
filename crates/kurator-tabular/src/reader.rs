//! Row-by-row reader over a delimited text file

use crate::dialect::{load, Dialect, ReadOptions};
use crate::TabularError;
use kurator_domain::{Header, Row, RowSource};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

type Records = csv::StringRecordsIntoIter<Cursor<Vec<u8>>>;

/// Build a `csv` reader for already decoded text
pub(crate) fn csv_reader(text: String, dialect: Dialect) -> csv::Reader<Cursor<Vec<u8>>> {
    csv::ReaderBuilder::new()
        .delimiter(dialect.delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(text.into_bytes()))
}

/// Reader yielding [`Row`]s against the file's header
///
/// The first record is the header. Data rows may be shorter or longer than
/// the header; short rows report their trailing fields as absent.
///
/// # Examples
///
/// ```no_run
/// use kurator_domain::RowSource;
/// use kurator_tabular::TabularReader;
///
/// let mut reader = TabularReader::open("occurrences.csv").unwrap();
/// while let Some(row) = reader.next_row() {
///     let row = row.unwrap();
///     println!("{}", row.get_or_empty("year"));
/// }
/// ```
pub struct TabularReader {
    path: PathBuf,
    dialect: Dialect,
    header: Arc<Header>,
    records: Records,
}

impl TabularReader {
    /// Open a file, detecting delimiter and encoding
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TabularError> {
        Self::open_with(path, ReadOptions::default())
    }

    /// Open a file with explicit dialect overrides
    pub fn open_with<P: AsRef<Path>>(path: P, options: ReadOptions) -> Result<Self, TabularError> {
        let path = path.as_ref();
        let (text, dialect) = load(path, options)?;

        let mut records = csv_reader(text, dialect).into_records();
        let first = records
            .next()
            .ok_or_else(|| TabularError::Empty(path.to_path_buf()))??;
        let header = Header::new(first.iter().map(str::to_string))?;
        debug!(path = %path.display(), fields = header.len(), "opened");

        Ok(Self {
            path: path.to_path_buf(),
            dialect,
            header: Arc::new(header),
            records,
        })
    }

    /// Path the reader was opened on
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Dialect the file is read with
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }
}

impl RowSource for TabularReader {
    type Error = TabularError;

    fn header(&self) -> &Arc<Header> {
        &self.header
    }

    fn next_row(&mut self) -> Option<Result<Row, Self::Error>> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };
        let values = record.iter().map(str::to_string).collect();
        Some(Ok(Row::new(Arc::clone(&self.header), values)))
    }
}

impl Iterator for TabularReader {
    type Item = Result<Row, TabularError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row()
    }
}

/// Header fields of a file, in order
pub fn read_header<P: AsRef<Path>>(path: P) -> Result<Vec<String>, TabularError> {
    read_header_with(path, ReadOptions::default())
}

/// Header fields of a file read with explicit dialect overrides
pub fn read_header_with<P: AsRef<Path>>(
    path: P,
    options: ReadOptions,
) -> Result<Vec<String>, TabularError> {
    let reader = TabularReader::open_with(path, options)?;
    Ok(reader.header().fields().to_vec())
}
