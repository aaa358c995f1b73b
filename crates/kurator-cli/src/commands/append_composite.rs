//! Append-composite command implementation.

use crate::cli::AppendCompositeArgs;
use crate::commands::{emit, extractor, open_source, require, value_list, vocabulary_file};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::response::{ActorResponse, AppendOutput};
use kurator_domain::{CompositeKey, VocabularyKind};
use kurator_store::VocabularyFile;
use tracing::info;

/// Append composite keys to a vocabulary whose key column is the composite key name.
///
/// Keys come from `--values`, or are extracted from `--input` when no values
/// are listed. An existing vocabulary must carry exactly the header for this
/// key.
pub fn append_composite(args: &AppendCompositeArgs, config: &Config) -> ActorResponse<AppendOutput> {
    ActorResponse::from_result(run(args, config))
}

fn run(args: &AppendCompositeArgs, config: &Config) -> Result<ActorResponse<AppendOutput>> {
    let path = vocabulary_file(args.vocab.as_deref(), config)?;
    let definition = require(args.key.as_deref(), "No key given")?;
    let key = CompositeKey::parse(definition, config.extractor.separator)
        .map_err(CliError::InvalidInput)?;

    let candidates = match (&args.values, &args.source.input) {
        (Some(values), _) => value_list(Some(values.as_slice())),
        (None, Some(_)) => {
            let mut source = open_source(&args.source, config)?;
            extractor(config).composite_values(&mut source, &key)?
        }
        (None, None) => return Err(CliError::MissingInput("No values to check".to_string())),
    };

    let vocabulary = VocabularyFile::new(&path, VocabularyKind::Keyed(key.name()))
        .with_delimiter(args.vocab_delimiter.unwrap_or_default());
    let added = vocabulary.append(&candidates)?;
    info!(vocabulary = %path.display(), key = %key.name(), added = added.len(), "appended composite keys");

    Ok(ActorResponse::ok(AppendOutput {
        vocabulary: path.clone(),
        added,
    })
    .with_artifact("vocabulary_file", path))
}

/// Execute the append-composite command.
pub fn execute_append_composite(
    args: AppendCompositeArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<bool> {
    emit(append_composite(&args, config), formatter)
}
