//! Delimiter and character encoding of a delimited text file

use crate::TabularError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Field delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delimiter {
    /// Comma separated values
    Comma,
    /// Tab separated values
    #[default]
    Tab,
}

impl Delimiter {
    /// Byte written between fields
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }

    /// Guess the delimiter from a header line
    ///
    /// Tabs win whenever the line has at least as many tabs as commas, so a
    /// one-column file defaults to tab-separated.
    ///
    /// ```
    /// use kurator_tabular::Delimiter;
    ///
    /// assert_eq!(Delimiter::detect("a,b,c"), Delimiter::Comma);
    /// assert_eq!(Delimiter::detect("a\tb,c\td"), Delimiter::Tab);
    /// ```
    pub fn detect(header_line: &str) -> Self {
        let tabs = header_line.matches('\t').count();
        let commas = header_line.matches(',').count();
        if commas > tabs {
            Delimiter::Comma
        } else {
            Delimiter::Tab
        }
    }

    /// Conventional delimiter for a file extension: `.csv` is comma, anything else tab
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Delimiter::Comma,
            _ => Delimiter::Tab,
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Comma => write!(f, "comma"),
            Delimiter::Tab => write!(f, "tab"),
        }
    }
}

impl FromStr for Delimiter {
    type Err = TabularError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "," | "comma" | "csv" => Ok(Delimiter::Comma),
            "\t" | "\\t" | "tab" | "tsv" | "txt" => Ok(Delimiter::Tab),
            _ => Err(TabularError::UnsupportedDelimiter(s.to_string())),
        }
    }
}

/// Character encoding of a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// UTF-8
    #[default]
    Utf8,
    /// ISO-8859-1, every byte maps to the code point of the same value
    Latin1,
}

impl Encoding {
    /// Decode raw bytes with this encoding
    pub fn decode(self, bytes: Vec<u8>) -> Result<String, Vec<u8>> {
        match self {
            Encoding::Utf8 => String::from_utf8(bytes).map_err(|e| e.into_bytes()),
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }

    /// Encode text with this encoding
    ///
    /// Fails with the first character Latin-1 cannot hold.
    pub fn encode(self, text: &str) -> Result<Vec<u8>, char> {
        match self {
            Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
            Encoding::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).map_err(|_| c))
                .collect(),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => write!(f, "utf-8"),
            Encoding::Latin1 => write!(f, "latin-1"),
        }
    }
}

impl FromStr for Encoding {
    type Err = TabularError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Ok(Encoding::Latin1),
            _ => Err(TabularError::UnsupportedEncoding(s.to_string())),
        }
    }
}

/// Overrides for dialect detection; `None` means detect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Field delimiter, detected from the header line when absent
    pub delimiter: Option<Delimiter>,
    /// Encoding, UTF-8 with a Latin-1 fallback when absent
    pub encoding: Option<Encoding>,
}

/// Delimiter and encoding actually used to read a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Field delimiter
    pub delimiter: Delimiter,
    /// Character encoding
    pub encoding: Encoding,
}

/// Read a file into text and work out its dialect
///
/// A leading byte-order mark is dropped. Returns the decoded text with the
/// dialect it was read with.
pub(crate) fn load(path: &Path, options: ReadOptions) -> Result<(String, Dialect), TabularError> {
    if !path.is_file() {
        return Err(TabularError::NotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path)?;

    let (mut text, encoding) = match options.encoding {
        Some(encoding) => {
            let text = encoding.decode(bytes).map_err(|_| TabularError::Decode {
                path: path.to_path_buf(),
                encoding: encoding.to_string(),
            })?;
            (text, encoding)
        }
        None => match Encoding::Utf8.decode(bytes) {
            Ok(text) => (text, Encoding::Utf8),
            Err(bytes) => {
                debug!(path = %path.display(), "not valid UTF-8, reading as latin-1");
                let text = Encoding::Latin1.decode(bytes).map_err(|_| TabularError::Decode {
                    path: path.to_path_buf(),
                    encoding: Encoding::Latin1.to_string(),
                })?;
                (text, Encoding::Latin1)
            }
        },
    };

    if text.starts_with('\u{feff}') {
        text.replace_range(..'\u{feff}'.len_utf8(), "");
    }

    let header_line = text.lines().next().unwrap_or("");
    if header_line.trim().is_empty() {
        return Err(TabularError::Empty(path.to_path_buf()));
    }

    let delimiter = options
        .delimiter
        .unwrap_or_else(|| Delimiter::detect(header_line));
    debug!(path = %path.display(), %delimiter, %encoding, "dialect");

    Ok((text, Dialect { delimiter, encoding }))
}

/// Detect the dialect of a file without reading its rows
pub fn sniff(path: &Path) -> Result<Dialect, TabularError> {
    load(path, ReadOptions::default()).map(|(_, dialect)| dialect)
}
