//! Completeness command implementation.

use crate::cli::CompletenessArgs;
use crate::commands::{emit, extractor, open_source};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::report::{report_path, write_completeness_report};
use crate::response::{ActorResponse, CompletenessOutput, CountRow};
use tracing::info;

/// Count the rows populating each header field and write a completeness report.
pub fn completeness(args: &CompletenessArgs, config: &Config) -> ActorResponse<CompletenessOutput> {
    ActorResponse::from_result(run(args, config))
}

fn run(args: &CompletenessArgs, config: &Config) -> Result<ActorResponse<CompletenessOutput>> {
    let mut source = open_source(&args.source, config)?;
    let input = source.path().to_path_buf();
    let completeness = extractor(config).term_completeness(&mut source)?;

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("input")
        .to_string();
    let format = args.report.report_format.unwrap_or(config.settings.report_format);
    let path = report_path(
        &config.settings.workspace,
        args.report.output.as_deref(),
        &stem,
        "term_completeness",
        format,
    );
    write_completeness_report(&path, &completeness, format)?;
    info!(input = %input.display(), fields = completeness.len(), report = %path.display(), "wrote completeness report");

    let output = CompletenessOutput {
        input,
        fields: completeness
            .into_iter()
            .map(|c| CountRow {
                value: c.field,
                count: c.populated,
            })
            .collect(),
    };
    Ok(ActorResponse::ok(output).with_artifact("field_completeness_report_file", path))
}

/// Execute the completeness command.
pub fn execute_completeness(
    args: CompletenessArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<bool> {
    emit(completeness(&args, config), formatter)
}
