//! Tokens command implementation.

use crate::cli::TokensArgs;
use crate::commands::{emit, extractor, open_source, require};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::report::{report_path, write_token_report};
use crate::response::{ActorResponse, TokenRow, TokensOutput};
use tracing::info;

/// Count the whitespace-separated tokens of one field and write a token report.
pub fn tokens(args: &TokensArgs, config: &Config) -> ActorResponse<TokensOutput> {
    ActorResponse::from_result(run(args, config))
}

fn run(args: &TokensArgs, config: &Config) -> Result<ActorResponse<TokensOutput>> {
    let mut source = open_source(&args.source, config)?;
    let field = require(args.field.as_deref(), "No term given")?;

    let report = extractor(config).token_counts(&mut source, field)?;

    let format = args.report.report_format.unwrap_or(config.settings.report_format);
    let path = report_path(
        &config.settings.workspace,
        args.report.output.as_deref(),
        field,
        "token",
        format,
    );
    write_token_report(&path, &report, format)?;
    info!(field, tokens = report.distinct_tokens(), report = %path.display(), "wrote token report");

    let output = TokensOutput {
        input: source.path().to_path_buf(),
        field: report.field.clone(),
        rows_scanned: report.rows_scanned,
        populated_rows: report.populated_rows,
        token_occurrences: report.token_occurrences,
        tokens: report
            .by_frequency()
            .into_iter()
            .map(|(token, stats)| TokenRow {
                token: token.to_string(),
                row_count: stats.row_count,
                total_count: stats.total_count,
            })
            .collect(),
    };
    Ok(ActorResponse::ok(output).with_artifact(format!("{}_token_report_file", field), path))
}

/// Execute the tokens command.
pub fn execute_tokens(args: TokensArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    emit(tokens(&args, config), formatter)
}
