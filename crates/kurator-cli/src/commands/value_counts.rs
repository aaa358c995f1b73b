//! Value-counts command implementation.

use crate::cli::ValueCountsArgs;
use crate::commands::{emit, extractor, open_source, require};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::report::{report_path, write_value_count_report};
use crate::response::{ActorResponse, CountRow, CountsOutput};
use kurator_extractor::KeySpec;
use tracing::info;

/// Count how often each value of a field or composite key occurs and write a count report.
pub fn value_counts(args: &ValueCountsArgs, config: &Config) -> ActorResponse<CountsOutput> {
    ActorResponse::from_result(run(args, config))
}

fn run(args: &ValueCountsArgs, config: &Config) -> Result<ActorResponse<CountsOutput>> {
    let mut source = open_source(&args.source, config)?;
    let definition = require(args.key.as_deref(), "No field list given")?;
    let key = KeySpec::parse(definition, config.extractor.separator)?;
    let name = key.name();

    let counts = extractor(config).value_counts(&mut source, &key)?;
    if counts.is_empty() {
        return Ok(ActorResponse::failed(format!(
            "No values of {} in {}",
            name,
            source.path().display()
        )));
    }

    let format = args.report.report_format.unwrap_or(config.settings.report_format);
    let path = report_path(
        &config.settings.workspace,
        args.report.output.as_deref(),
        &name,
        "count",
        format,
    );
    write_value_count_report(&path, &name, &counts, format)?;
    info!(key = %name, values = counts.len(), report = %path.display(), "wrote count report");

    let artifact = format!("{}_count_report_file", name.replace(config.extractor.separator, "_"));
    let output = CountsOutput {
        key: name,
        counts: counts
            .into_iter()
            .map(|c| CountRow {
                value: c.value,
                count: c.count,
            })
            .collect(),
    };
    Ok(ActorResponse::ok(output).with_artifact(artifact, path))
}

/// Execute the value-counts command.
pub fn execute_value_counts(
    args: ValueCountsArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<bool> {
    emit(value_counts(&args, config), formatter)
}
