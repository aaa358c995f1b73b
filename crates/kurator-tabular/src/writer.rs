//! Writing and appending delimited text

use crate::{Delimiter, Dialect, TabularError};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::debug;

fn csv_writer<W: Write>(writer: W, delimiter: Delimiter) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(delimiter.as_byte())
        .terminator(csv::Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(writer)
}

/// Create (or truncate) a file holding only a header row
pub fn write_header<P: AsRef<Path>>(
    path: P,
    header: &[String],
    delimiter: Delimiter,
) -> Result<(), TabularError> {
    write_table(path, header, &[], delimiter)
}

/// Create (or truncate) a file with a header and rows
pub fn write_table<P: AsRef<Path>>(
    path: P,
    header: &[String],
    rows: &[Vec<String>],
    delimiter: Delimiter,
) -> Result<(), TabularError> {
    let path = path.as_ref();
    let mut writer = csv_writer(File::create(path)?, delimiter);
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    debug!(path = %path.display(), rows = rows.len(), "wrote table");
    Ok(())
}

/// Append rows to the end of an existing file
///
/// Rows are written in the file's own dialect: its delimiter, and its
/// encoding so a Latin-1 file stays Latin-1. A missing final newline is
/// restored first so the new rows never merge into the last existing line.
/// Returns the number of rows written.
///
/// # Errors
/// [`TabularError::Encode`] when a value cannot be represented in the
/// file's encoding; nothing is written in that case.
pub fn append_rows<P: AsRef<Path>>(
    path: P,
    rows: &[Vec<String>],
    dialect: Dialect,
) -> Result<usize, TabularError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(TabularError::NotFound(path.to_path_buf()));
    }
    if rows.is_empty() {
        return Ok(0);
    }

    let mut writer = csv_writer(Vec::new(), dialect.delimiter);
    for row in rows {
        writer.write_record(row)?;
    }
    let text = String::from_utf8(writer.into_inner().map_err(|e| e.into_error())?)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    let bytes = dialect
        .encoding
        .encode(&text)
        .map_err(|ch| TabularError::Encode {
            path: path.to_path_buf(),
            encoding: dialect.encoding.to_string(),
            ch,
        })?;

    let mut file = OpenOptions::new().read(true).append(true).open(path)?;
    if file.metadata()?.len() > 0 {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        if last[0] != b'\n' {
            file.write_all(b"\n")?;
        }
    }
    file.write_all(&bytes)?;
    file.flush()?;
    debug!(
        path = %path.display(),
        rows = rows.len(),
        encoding = %dialect.encoding,
        "appended rows"
    );
    Ok(rows.len())
}
