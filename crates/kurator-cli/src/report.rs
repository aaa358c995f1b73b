//! Report files written by the reporting commands.

use crate::error::Result;
use kurator_domain::{slugify, FieldCompleteness, TokenReport, ValueCount, VocabularyEntry, VocabularyKind};
use kurator_extractor::Standardized;
use kurator_tabular::{write_table, Delimiter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Layout of a report file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Tab separated, `.txt`
    #[default]
    Txt,
    /// Comma separated, `.csv`
    Csv,
}

impl ReportFormat {
    /// Delimiter written between fields.
    pub fn delimiter(self) -> Delimiter {
        match self {
            ReportFormat::Txt => Delimiter::Tab,
            ReportFormat::Csv => Delimiter::Comma,
        }
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Txt => "txt",
            ReportFormat::Csv => "csv",
        }
    }
}

/// Default report location: `<subject>_<kind>_report_<uuid>.<ext>` in the workspace.
///
/// The subject is slugged, so a composite key such as `year|month` becomes
/// `year_month`.
pub fn default_report_path(
    workspace: &Path,
    subject: &str,
    kind: &str,
    format: ReportFormat,
) -> PathBuf {
    let mut stem = slugify(subject, None);
    if stem.is_empty() {
        stem = "field".to_string();
    }
    workspace.join(format!(
        "{}_{}_report_{}.{}",
        stem,
        kind,
        Uuid::now_v7(),
        format.extension()
    ))
}

/// Resolve a named output file against the workspace, or fall back to the default name.
pub fn report_path(
    workspace: &Path,
    output: Option<&str>,
    subject: &str,
    kind: &str,
    format: ReportFormat,
) -> PathBuf {
    match output.map(str::trim).filter(|o| !o.is_empty()) {
        Some(name) => workspace.join(name),
        None => default_report_path(workspace, subject, kind, format),
    }
}

fn write_report(
    path: &Path,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    format: ReportFormat,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    write_table(path, &header, &rows, format.delimiter())?;
    debug!(path = %path.display(), rows = rows.len(), "wrote report");
    Ok(())
}

/// Write `token`, `rowcount`, `totalcount` rows, most frequent first.
pub fn write_token_report(path: &Path, report: &TokenReport, format: ReportFormat) -> Result<()> {
    let header = ["token", "rowcount", "totalcount"].map(String::from).to_vec();
    let rows = report
        .by_frequency()
        .into_iter()
        .map(|(token, stats)| {
            vec![
                token.to_string(),
                stats.row_count.to_string(),
                stats.total_count.to_string(),
            ]
        })
        .collect();
    write_report(path, header, rows, format)
}

/// Write `<key name>`, `count` rows in the given order.
pub fn write_value_count_report(
    path: &Path,
    key_name: &str,
    counts: &[ValueCount],
    format: ReportFormat,
) -> Result<()> {
    let header = vec![key_name.to_string(), "count".to_string()];
    let rows = counts
        .iter()
        .map(|c| vec![c.value.clone(), c.count.to_string()])
        .collect();
    write_report(path, header, rows, format)
}

/// Write `field`, `count` rows in header order.
pub fn write_completeness_report(
    path: &Path,
    completeness: &[FieldCompleteness],
    format: ReportFormat,
) -> Result<()> {
    let header = vec!["field".to_string(), "count".to_string()];
    let rows = completeness
        .iter()
        .map(|c| vec![c.field.clone(), c.populated.to_string()])
        .collect();
    write_report(path, header, rows, format)
}

/// Write a single column of values headed by the key name.
pub fn write_value_list_report(
    path: &Path,
    key_name: &str,
    values: &[String],
    format: ReportFormat,
) -> Result<()> {
    let header = vec![key_name.to_string()];
    let rows = values.iter().map(|v| vec![v.clone()]).collect();
    write_report(path, header, rows, format)
}

/// Write vocabulary entries in the vocabulary's own column layout.
pub fn write_recommendation_report(
    path: &Path,
    kind: &VocabularyKind,
    entries: &[&VocabularyEntry],
    format: ReportFormat,
) -> Result<()> {
    let header = kind.header();
    let width = header.len();
    let rows = entries.iter().map(|e| e.to_record(width)).collect();
    write_report(path, header, rows, format)
}

/// Write a standardized copy of a data file, `_orig` columns last.
pub fn write_standardized_report(
    path: &Path,
    standardized: &Standardized,
    format: ReportFormat,
) -> Result<()> {
    write_report(
        path,
        standardized.header.clone(),
        standardized.rows.clone(),
        format,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_report_path() {
        let path = default_report_path(Path::new("/ws"), "year|month", "count", ReportFormat::Csv);
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(path.starts_with("/ws"));
        assert!(name.starts_with("year_month_count_report_"));
        assert!(name.ends_with(".csv"));
    }

    #[test]
    fn test_named_output_lands_in_workspace() {
        let path = report_path(Path::new("/ws"), Some("months.txt"), "month", "count", ReportFormat::Txt);
        assert_eq!(path, PathBuf::from("/ws/months.txt"));

        let path = report_path(Path::new("/ws"), Some("  "), "month", "count", ReportFormat::Txt);
        assert!(path.to_str().unwrap().contains("month_count_report_"));
    }

    #[test]
    fn test_token_report_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tokens.txt");
        let mut report = TokenReport::new("locality");
        report.record("Ridge National Forest");
        report.record("National Park");

        write_token_report(&path, &report, ReportFormat::Txt).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("token\trowcount\ttotalcount"));
        assert_eq!(lines.next(), Some("National\t2\t2"));
    }

    #[test]
    fn test_value_count_report_csv() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("counts.csv");
        let counts = vec![
            ValueCount { value: "5".to_string(), count: 3 },
            ValueCount { value: "May, early".to_string(), count: 1 },
        ];

        write_value_count_report(&path, "month", &counts, ReportFormat::Csv).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "month,count\n5,3\n\"May, early\",1\n");
    }

    #[test]
    fn test_recommendation_report_uses_vocabulary_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recommended.txt");
        let mut entry = VocabularyEntry::new("Mai");
        entry.standard = "5".to_string();
        entry.checked = "1".to_string();

        write_recommendation_report(&path, &VocabularyKind::SingleTerm, &[&entry], ReportFormat::Txt)
            .unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("verbatim\tstandard\tchecked\t"));
        assert!(text.contains("Mai\t5\t1\t"));
    }
}
