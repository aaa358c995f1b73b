//! Geog-collect command implementation.

use crate::cli::GeogCollectArgs;
use crate::commands::{emit, extractor, input_file, vocabulary_file};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::response::{ActorResponse, AppendOutput};

/// Add the sorted distinct geography combinations of a file to a geography vocabulary.
pub fn geog_collect(args: &GeogCollectArgs, config: &Config) -> ActorResponse<AppendOutput> {
    ActorResponse::from_result(run(args, config))
}

fn run(args: &GeogCollectArgs, config: &Config) -> Result<ActorResponse<AppendOutput>> {
    let input = input_file(args.source.input.as_deref(), &config.settings.workspace)?;
    let path = vocabulary_file(args.vocab.as_deref(), config)?;

    let added = extractor(config).collect_geography(
        &input,
        &path,
        args.vocab_delimiter.unwrap_or_default(),
    )?;

    Ok(ActorResponse::ok(AppendOutput {
        vocabulary: path.clone(),
        added,
    })
    .with_artifact("vocabulary_file", path))
}

/// Execute the geog-collect command.
pub fn execute_geog_collect(
    args: GeogCollectArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<bool> {
    emit(geog_collect(&args, config), formatter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_geog_collect_rejects_foreign_vocabulary() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("occ.csv");
        fs::write(&input, "country,stateProvince\nUS,WA\n").unwrap();
        let vocab = dir.path().join("geog.txt");
        fs::write(&vocab, "verbatim\tstandard\n").unwrap();

        let mut args = GeogCollectArgs {
            vocab: Some(vocab.to_str().unwrap().to_string()),
            ..Default::default()
        };
        args.source.input = Some(input.to_str().unwrap().to_string());

        let response = geog_collect(&args, &Config::default());
        assert!(!response.success);
        assert_eq!(fs::read_to_string(&vocab).unwrap(), "verbatim\tstandard\n");
    }

    #[test]
    fn test_geog_collect_requires_vocabulary() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("occ.csv");
        fs::write(&input, "country\nUS\n").unwrap();
        let mut args = GeogCollectArgs::default();
        args.source.input = Some(input.to_str().unwrap().to_string());

        let response = geog_collect(&args, &Config::default());
        assert_eq!(response.message.as_deref(), Some("No vocabulary file given"));
    }
}
