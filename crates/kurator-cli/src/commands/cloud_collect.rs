//! Cloud-collect command implementation.

use crate::cli::CloudCollectArgs;
use crate::commands::{emit, extractor, input_file, vocabulary_file};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::response::{ActorResponse, AppendOutput};

/// Add the header fields of a file that are not Darwin Core terms to a Darwin Cloud vocabulary.
pub fn cloud_collect(args: &CloudCollectArgs, config: &Config) -> ActorResponse<AppendOutput> {
    ActorResponse::from_result(run(args, config))
}

fn run(args: &CloudCollectArgs, config: &Config) -> Result<ActorResponse<AppendOutput>> {
    let input = input_file(args.source.input.as_deref(), &config.settings.workspace)?;
    let path = vocabulary_file(args.vocab.as_deref(), config)?;

    let added = extractor(config).collect_darwin_cloud(
        &input,
        &path,
        args.clean,
        args.vocab_delimiter.unwrap_or_default(),
    )?;

    Ok(ActorResponse::ok(AppendOutput {
        vocabulary: path.clone(),
        added,
    })
    .with_artifact("vocabulary_file", path))
}

/// Execute the cloud-collect command.
pub fn execute_cloud_collect(
    args: CloudCollectArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<bool> {
    emit(cloud_collect(&args, config), formatter)
}
