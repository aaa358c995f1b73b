//! Append command implementation.

use crate::cli::AppendArgs;
use crate::commands::{emit, value_list, vocabulary_file};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::response::{ActorResponse, AppendOutput};
use kurator_store::append_new_with;
use tracing::info;

/// Append values to a vocabulary keyed by `--key`.
///
/// Values are trimmed and blank ones dropped. Leaving out `--values`
/// altogether is a failure; a list with nothing new in it is not.
pub fn append(args: &AppendArgs, config: &Config) -> ActorResponse<AppendOutput> {
    ActorResponse::from_result(run(args, config))
}

fn run(args: &AppendArgs, config: &Config) -> Result<ActorResponse<AppendOutput>> {
    let path = vocabulary_file(args.vocab.as_deref(), config)?;
    let candidates = args.values.as_deref().map(|v| value_list(Some(v)));

    let added = append_new_with(
        &path,
        candidates.as_deref(),
        args.key.trim(),
        args.vocab_delimiter.unwrap_or_default(),
    )?;
    info!(vocabulary = %path.display(), added = added.len(), "appended values");

    Ok(ActorResponse::ok(AppendOutput {
        vocabulary: path.clone(),
        added,
    })
    .with_artifact("vocabulary_file", path))
}

/// Execute the append command.
pub fn execute_append(args: AppendArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    emit(append(&args, config), formatter)
}
