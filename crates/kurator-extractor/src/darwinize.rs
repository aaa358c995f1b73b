//! Header translation through a Darwin Cloud vocabulary

use crate::ExtractorError;
use kurator_domain::RowSource;
use kurator_store::VocabularyDict;
use kurator_tabular::{write_table, TabularReader};
use std::path::Path;
use tracing::info;

/// Replace each field with the `standard` of its vocabulary entry
///
/// Fields match vocabulary keys exactly, or failing that ignoring ASCII case.
/// Fields without an entry, or whose entry has a blank standard, are kept.
pub fn darwinize_header<S: AsRef<str>>(header: &[S], cloud: &VocabularyDict) -> Vec<String> {
    header
        .iter()
        .map(|field| {
            let field: &str = field.as_ref();
            match cloud.get_ignore_case(field) {
                Some(entry) if !entry.standard.trim().is_empty() => entry.standard.clone(),
                _ => field.to_string(),
            }
        })
        .collect()
}

/// Copy a data file with its header translated
///
/// Rows are copied unchanged in the input file's delimiter. Returns the new
/// header.
pub fn darwinize_file(
    input: &Path,
    output: &Path,
    cloud: &VocabularyDict,
) -> Result<Vec<String>, ExtractorError> {
    let mut reader = TabularReader::open(input)?;
    let header = darwinize_header(reader.header().fields(), cloud);
    let delimiter = reader.dialect().delimiter;

    let mut rows = Vec::new();
    while let Some(row) = reader.next_row() {
        rows.push(row?.values().to_vec());
    }
    write_table(output, &header, &rows, delimiter)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        rows = rows.len(),
        "darwinized header"
    );
    Ok(header)
}
