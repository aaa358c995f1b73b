//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use kurator_tabular::{Delimiter, Encoding, ReadOptions};

/// Kurator - Extract values from occurrence data and grow Darwin Core vocabularies.
#[derive(Debug, Parser)]
#[command(name = "kurator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log filter, e.g. `info` or `kurator_store=debug`
    #[arg(long, global = true, env = "KURATOR_LOG")]
    pub log_level: Option<String>,

    /// Directory for report files
    #[arg(short, long, global = true)]
    pub workspace: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (primary values only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the distinct values of one field
    Extract(ExtractArgs),

    /// List the distinct values of a composite key
    ExtractComposite(ExtractCompositeArgs),

    /// Append values to a single-term vocabulary
    Append(AppendArgs),

    /// Append composite keys to a composite vocabulary
    AppendComposite(AppendCompositeArgs),

    /// Add the geography combinations of a file to a geography vocabulary
    GeogCollect(GeogCollectArgs),

    /// Add the non-Darwin Core fields of a header to a Darwin Cloud vocabulary
    CloudCollect(CloudCollectArgs),

    /// Report token counts for one field
    Tokens(TokensArgs),

    /// Report how often each value of a field or composite key occurs
    ValueCounts(ValueCountsArgs),

    /// Report how many rows populate each field
    Completeness(CompletenessArgs),

    /// Report values that are missing from a vocabulary
    Unknown(UnknownArgs),

    /// Report checked vocabulary entries that recommend a change
    Recommend(RecommendArgs),

    /// Find the first row with fewer fields than the header
    CheckFields(CheckFieldsArgs),

    /// Rewrite a header with standard terms from a Darwin Cloud vocabulary
    Darwinize(DarwinizeArgs),

    /// Replace the values of a field or composite key with their vocabulary standard
    Standardize(StandardizeArgs),

    /// Count the rows that populate one field
    TermCount(TermCountArgs),

    /// Write the sorted union of the headers of several files
    CompositeHeader(CompositeHeaderArgs),
}

/// Source file options shared by every command that reads data.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Delimited text file to read
    #[arg(short, long)]
    pub input: Option<String>,

    /// Field delimiter (comma or tab), detected from the header when absent
    #[arg(long)]
    pub delimiter: Option<Delimiter>,

    /// Encoding (utf-8 or latin-1), UTF-8 with a latin-1 fallback when absent
    #[arg(long)]
    pub encoding: Option<Encoding>,
}

impl InputArgs {
    /// Dialect overrides for the reader.
    pub fn read_options(&self) -> ReadOptions {
        ReadOptions {
            delimiter: self.delimiter,
            encoding: self.encoding,
        }
    }
}

/// Arguments for the extract command.
#[derive(Debug, Clone, Default, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Field to extract
    #[arg(long)]
    pub field: Option<String>,
}

/// Arguments for the extract-composite command.
#[derive(Debug, Clone, Default, Args)]
pub struct ExtractCompositeArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Fields joined by the separator, e.g. `country|stateProvince`
    #[arg(short, long)]
    pub key: Option<String>,

    /// Return keys in lexicographic order instead of first-seen order
    #[arg(long)]
    pub sorted: bool,
}

/// Arguments for the append command.
#[derive(Debug, Clone, Default, Args)]
pub struct AppendArgs {
    /// Vocabulary file to append to
    #[arg(long)]
    pub vocab: Option<String>,

    /// Comma separated values to add
    #[arg(long, value_delimiter = ',')]
    pub values: Option<Vec<String>>,

    /// Key column of the vocabulary
    #[arg(short, long, default_value = "verbatim")]
    pub key: String,

    /// Delimiter for a new vocabulary file
    #[arg(long)]
    pub vocab_delimiter: Option<Delimiter>,
}

/// Arguments for the append-composite command.
#[derive(Debug, Clone, Default, Args)]
pub struct AppendCompositeArgs {
    /// Vocabulary file to append to
    #[arg(long)]
    pub vocab: Option<String>,

    /// Key column of the vocabulary, e.g. `country|stateProvince`
    #[arg(short, long)]
    pub key: Option<String>,

    /// Comma separated composite keys to add
    #[arg(long, value_delimiter = ',')]
    pub values: Option<Vec<String>>,

    // Data file to take the composite keys from instead of `--values`
    #[command(flatten)]
    pub source: InputArgs,

    /// Delimiter for a new vocabulary file
    #[arg(long)]
    pub vocab_delimiter: Option<Delimiter>,
}

/// Arguments for the geog-collect command.
#[derive(Debug, Clone, Default, Args)]
pub struct GeogCollectArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Geography vocabulary file
    #[arg(long)]
    pub vocab: Option<String>,

    /// Delimiter for a new vocabulary file
    #[arg(long)]
    pub vocab_delimiter: Option<Delimiter>,
}

/// Arguments for the cloud-collect command.
#[derive(Debug, Clone, Default, Args)]
pub struct CloudCollectArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Darwin Cloud vocabulary file
    #[arg(long)]
    pub vocab: Option<String>,

    /// Slug the header fields before classifying them
    #[arg(long)]
    pub clean: bool,

    /// Delimiter for a new vocabulary file
    #[arg(long)]
    pub vocab_delimiter: Option<Delimiter>,
}

/// Report file options shared by the reporting commands.
#[derive(Debug, Clone, Default, Args)]
pub struct ReportArgs {
    /// Report file to write, named after the field in the workspace when absent
    #[arg(short, long)]
    pub output: Option<String>,

    /// Report file format (txt or csv)
    #[arg(long, value_enum)]
    pub report_format: Option<crate::report::ReportFormat>,
}

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default, Args)]
pub struct TokensArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Field whose values are tokenized
    #[arg(long)]
    pub field: Option<String>,

    #[command(flatten)]
    pub report: ReportArgs,
}

/// Arguments for the value-counts command.
#[derive(Debug, Clone, Default, Args)]
pub struct ValueCountsArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Field or composite key, e.g. `month` or `year|month`
    #[arg(short, long)]
    pub key: Option<String>,

    #[command(flatten)]
    pub report: ReportArgs,
}

/// Arguments for the completeness command.
#[derive(Debug, Clone, Default, Args)]
pub struct CompletenessArgs {
    #[command(flatten)]
    pub source: InputArgs,

    #[command(flatten)]
    pub report: ReportArgs,
}

/// Arguments for the unknown command.
#[derive(Debug, Clone, Default, Args)]
pub struct UnknownArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Field or composite key to look up
    #[arg(short, long)]
    pub key: Option<String>,

    /// Vocabulary to look the values up in
    #[arg(long)]
    pub vocab: Option<String>,

    #[command(flatten)]
    pub report: ReportArgs,
}

/// Arguments for the recommend command.
#[derive(Debug, Clone, Default, Args)]
pub struct RecommendArgs {
    /// Vocabulary to read
    #[arg(long)]
    pub vocab: Option<String>,

    /// Key column of the vocabulary
    #[arg(short, long, default_value = "verbatim")]
    pub key: String,

    // Only entries whose key is among the values of this data file
    #[command(flatten)]
    pub source: InputArgs,

    /// Field of the data file holding the keys, the key column when absent
    #[arg(long)]
    pub field: Option<String>,

    #[command(flatten)]
    pub report: ReportArgs,
}

/// Arguments for the check-fields command.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckFieldsArgs {
    #[command(flatten)]
    pub source: InputArgs,
}

/// Arguments for the darwinize command.
#[derive(Debug, Clone, Default, Args)]
pub struct DarwinizeArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Darwin Cloud vocabulary file
    #[arg(long)]
    pub vocab: Option<String>,

    /// File to write, `<input stem>_darwinized.<ext>` in the workspace when absent
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the standardize command.
#[derive(Debug, Clone, Default, Args)]
pub struct StandardizeArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Field or composite key to standardize, e.g. `month` or `country|stateProvince`
    #[arg(short, long)]
    pub key: Option<String>,

    /// Vocabulary holding the standard values
    #[arg(long)]
    pub vocab: Option<String>,

    #[command(flatten)]
    pub report: ReportArgs,
}

/// Arguments for the term-count command.
#[derive(Debug, Clone, Default, Args)]
pub struct TermCountArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Field whose populated rows are counted
    #[arg(long)]
    pub field: Option<String>,
}

/// Arguments for the composite-header command.
#[derive(Debug, Clone, Default, Args)]
pub struct CompositeHeaderArgs {
    /// Comma separated files whose headers are merged
    #[arg(short, long, value_delimiter = ',')]
    pub inputs: Option<Vec<String>>,

    /// Field delimiter (comma or tab), detected per file when absent
    #[arg(long)]
    pub delimiter: Option<Delimiter>,

    /// Encoding (utf-8 or latin-1), UTF-8 with a latin-1 fallback when absent
    #[arg(long)]
    pub encoding: Option<Encoding>,

    /// Tab separated header file to write in the workspace
    #[arg(short, long)]
    pub output: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
