//! Uniform command results.
//!
//! Every command answers with an [`ActorResponse`] carrying a success flag,
//! a message, the command's own output record and the files it produced.

use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Result of one command run.
#[derive(Debug, Clone, Serialize)]
pub struct ActorResponse<T> {
    /// Whether the command completed
    pub success: bool,

    /// Explanation, always set on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Command-specific output, absent on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<T>,

    /// Files written, by role
    pub artifacts: BTreeMap<String, PathBuf>,
}

impl<T> ActorResponse<T> {
    /// Successful response with an output record.
    pub fn ok(output: T) -> Self {
        Self {
            success: true,
            message: None,
            output: Some(output),
            artifacts: BTreeMap::new(),
        }
    }

    /// Failed response with a reason.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            output: None,
            artifacts: BTreeMap::new(),
        }
    }

    /// Attach a message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Record a file the command produced.
    pub fn with_artifact(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.artifacts.insert(name.into(), path.into());
        self
    }

    /// Turn an error raised while running a command into a failed response.
    pub fn from_result(result: Result<Self>) -> Self {
        match result {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(error = %e, "command failed");
                Self::failed(e.to_string())
            }
        }
    }
}

/// Distinct values of a field or composite key.
#[derive(Debug, Clone, Serialize)]
pub struct ValuesOutput {
    /// Field name or composite key name
    pub key: String,
    /// Distinct values
    pub values: Vec<String>,
}

/// Keys added to a vocabulary.
#[derive(Debug, Clone, Serialize)]
pub struct AppendOutput {
    /// Vocabulary file appended to
    pub vocabulary: PathBuf,
    /// Keys actually added, in candidate order
    pub added: Vec<String>,
}

/// One token of a token report.
#[derive(Debug, Clone, Serialize)]
pub struct TokenRow {
    /// Token text
    pub token: String,
    /// Rows containing the token
    pub row_count: usize,
    /// Occurrences overall
    pub total_count: usize,
}

/// Token statistics for one field.
#[derive(Debug, Clone, Serialize)]
pub struct TokensOutput {
    /// Input file
    pub input: PathBuf,
    /// Tokenized field
    pub field: String,
    /// Data rows read
    pub rows_scanned: usize,
    /// Rows with a non-blank value
    pub populated_rows: usize,
    /// Token occurrences overall
    pub token_occurrences: usize,
    /// Tokens, most frequent first
    pub tokens: Vec<TokenRow>,
}

/// A value and how often it occurs.
#[derive(Debug, Clone, Serialize)]
pub struct CountRow {
    /// Value, field name or composite key
    pub value: String,
    /// Occurrences
    pub count: usize,
}

/// Value counts for a field or composite key.
#[derive(Debug, Clone, Serialize)]
pub struct CountsOutput {
    /// Field name or composite key name
    pub key: String,
    /// Counts, most frequent first
    pub counts: Vec<CountRow>,
}

/// Populated-row counts per header field.
#[derive(Debug, Clone, Serialize)]
pub struct CompletenessOutput {
    /// Input file
    pub input: PathBuf,
    /// Counts in header order
    pub fields: Vec<CountRow>,
}

/// A vocabulary entry that recommends a standard value.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Verbatim value or composite key
    pub key: String,
    /// Recommended standard value
    pub standard: String,
    /// Curator comment
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// Recommendations from a vocabulary.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendOutput {
    /// Vocabulary read
    pub vocabulary: PathBuf,
    /// Entries recommending a change
    pub recommendations: Vec<Recommendation>,
    /// Values of the data file with no vocabulary entry
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub new_values: Vec<String>,
}

/// First short row of a file, if any.
#[derive(Debug, Clone, Serialize)]
pub struct CheckFieldsOutput {
    /// File checked
    pub input: PathBuf,
    /// 1-based data row index of the first short row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_short_row: Option<usize>,
    /// Raw text of that row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    /// Header field count
    pub expected: Option<usize>,
    /// Field count of the short row
    pub found: Option<usize>,
}

/// Header before and after darwinizing.
#[derive(Debug, Clone, Serialize)]
pub struct DarwinizeOutput {
    /// Header as read
    pub original: Vec<String>,
    /// Header as written
    pub darwinized: Vec<String>,
}

/// A data file rewritten with standardized key values.
#[derive(Debug, Clone, Serialize)]
pub struct StandardizeOutput {
    /// Input file
    pub input: PathBuf,
    /// Field or composite key name
    pub key: String,
    /// Rows written
    pub rows: usize,
    /// Rows whose key had a standard
    pub changed: usize,
    /// Header of the written file
    pub header: Vec<String>,
}

/// Populated-row count of one field.
#[derive(Debug, Clone, Serialize)]
pub struct TermCountOutput {
    /// Input file
    pub input: PathBuf,
    /// Field counted
    pub field: String,
    /// Rows with a non-blank value
    pub row_count: usize,
}

/// Merged header of several files.
#[derive(Debug, Clone, Serialize)]
pub struct CompositeHeaderOutput {
    /// Files read
    pub inputs: Vec<PathBuf>,
    /// Sorted union of their fields
    pub header: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_failed_response_from_error() {
        let response: ActorResponse<ValuesOutput> =
            ActorResponse::from_result(Err(CliError::MissingInput("No input file given".into())));
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("No input file given"));
        assert!(response.output.is_none());
    }

    #[test]
    fn test_json_shape() {
        let response = ActorResponse::ok(AppendOutput {
            vocabulary: PathBuf::from("month.txt"),
            added: vec!["May".to_string()],
        })
        .with_artifact("vocabulary_file", "month.txt");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("message").is_none());
        assert_eq!(json["output"]["added"][0], "May");
        assert_eq!(json["artifacts"]["vocabulary_file"], "month.txt");
    }
}
