//! Standardize command implementation.

use crate::cli::StandardizeArgs;
use crate::commands::{emit, existing_vocabulary_file, extractor, open_source, require};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::report::{report_path, write_standardized_report};
use crate::response::{ActorResponse, StandardizeOutput};
use kurator_domain::{slugify, VocabularyKind};
use kurator_extractor::KeySpec;
use kurator_store::VocabularyFile;
use tracing::info;

/// Copy a data file with the values of a key replaced by their vocabulary standard.
///
/// Every key field gets a `<field>_orig` column holding the value it replaced.
pub fn standardize(args: &StandardizeArgs, config: &Config) -> ActorResponse<StandardizeOutput> {
    ActorResponse::from_result(run(args, config))
}

fn run(args: &StandardizeArgs, config: &Config) -> Result<ActorResponse<StandardizeOutput>> {
    let mut source = open_source(&args.source, config)?;
    let vocabulary = existing_vocabulary_file(args.vocab.as_deref(), config)?;
    let key = KeySpec::parse(
        require(args.key.as_deref(), "No key given")?,
        config.extractor.separator,
    )?;
    let key_name = key.name();

    let dict = VocabularyFile::new(&vocabulary, VocabularyKind::SingleTerm).dict()?;
    let standardized = extractor(config).standardize(&mut source, &key, &dict)?;

    let format = args.report.report_format.unwrap_or(config.settings.report_format);
    let path = report_path(
        &config.settings.workspace,
        args.report.output.as_deref(),
        &key_name,
        "changed",
        format,
    );
    write_standardized_report(&path, &standardized, format)?;
    info!(key = %key_name, changed = standardized.changed, report = %path.display(), "wrote standardized file");

    let output = StandardizeOutput {
        input: source.path().to_path_buf(),
        key: key_name.clone(),
        rows: standardized.rows.len(),
        changed: standardized.changed,
        header: standardized.header,
    };
    let artifact = format!("{}_change_report_file", slugify(&key_name, None));
    Ok(ActorResponse::ok(output).with_artifact(artifact, path))
}

/// Execute the standardize command.
pub fn execute_standardize(args: StandardizeArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    emit(standardize(&args, config), formatter)
}
