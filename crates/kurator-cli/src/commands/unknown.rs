//! Unknown command implementation.

use crate::cli::UnknownArgs;
use crate::commands::{emit, extractor, open_source, require, vocabulary_file};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::report::{report_path, write_value_list_report};
use crate::response::{ActorResponse, ValuesOutput};
use kurator_extractor::KeySpec;
use kurator_store::load_existing_keys;
use tracing::info;

/// Values of a field or composite key that have no entry in a vocabulary.
///
/// A vocabulary file that does not exist yet knows no values. The report is
/// only written when something is missing.
pub fn unknown(args: &UnknownArgs, config: &Config) -> ActorResponse<ValuesOutput> {
    ActorResponse::from_result(run(args, config))
}

fn run(args: &UnknownArgs, config: &Config) -> Result<ActorResponse<ValuesOutput>> {
    let mut source = open_source(&args.source, config)?;
    let vocabulary = vocabulary_file(args.vocab.as_deref(), config)?;
    let definition = require(args.key.as_deref(), "No key given")?;
    let key = KeySpec::parse(definition, config.extractor.separator)?;
    let name = key.name();

    let known = load_existing_keys(&vocabulary)?;
    let values = extractor(config).unknown_values(&mut source, &key, &known)?;

    if values.is_empty() {
        let message = format!(
            "No missing values of {} from {} found in {}",
            name,
            source.path().display(),
            vocabulary.display()
        );
        return Ok(ActorResponse::ok(ValuesOutput { key: name, values }).with_message(message));
    }

    let format = args.report.report_format.unwrap_or(config.settings.report_format);
    let path = report_path(
        &config.settings.workspace,
        args.report.output.as_deref(),
        &name,
        "unknown",
        format,
    );
    write_value_list_report(&path, &name, &values, format)?;
    info!(key = %name, unknown = values.len(), report = %path.display(), "wrote unknown value report");

    let artifact = format!("{}_unknown_report_file", name.replace(config.extractor.separator, "_"));
    Ok(ActorResponse::ok(ValuesOutput { key: name, values }).with_artifact(artifact, path))
}

/// Execute the unknown command.
pub fn execute_unknown(args: UnknownArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    emit(unknown(&args, config), formatter)
}
