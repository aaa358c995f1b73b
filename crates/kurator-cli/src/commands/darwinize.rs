//! Darwinize command implementation.

use crate::cli::DarwinizeArgs;
use crate::commands::{emit, existing_vocabulary_file, input_file};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::response::{ActorResponse, DarwinizeOutput};
use kurator_domain::VocabularyKind;
use kurator_extractor::darwinize_file;
use kurator_store::VocabularyFile;
use kurator_tabular::read_header_with;
use std::path::{Path, PathBuf};

fn default_output(input: &Path, workspace: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("input");
    let name = match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_darwinized.{}", stem, ext),
        None => format!("{}_darwinized", stem),
    };
    workspace.join(name)
}

/// Copy a data file with its header fields replaced by their Darwin Core standard names.
pub fn darwinize(args: &DarwinizeArgs, config: &Config) -> ActorResponse<DarwinizeOutput> {
    ActorResponse::from_result(run(args, config))
}

fn run(args: &DarwinizeArgs, config: &Config) -> Result<ActorResponse<DarwinizeOutput>> {
    let workspace = &config.settings.workspace;
    let input = input_file(args.source.input.as_deref(), workspace)?;
    let vocabulary = existing_vocabulary_file(args.vocab.as_deref(), config)?;

    let output = match args.output.as_deref().map(str::trim).filter(|o| !o.is_empty()) {
        Some(name) => workspace.join(name),
        None => default_output(&input, workspace),
    };
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let original = read_header_with(&input, args.source.read_options())?;
    let cloud = VocabularyFile::new(&vocabulary, VocabularyKind::SingleTerm).dict()?;
    let darwinized = darwinize_file(&input, &output, &cloud)?;

    Ok(ActorResponse::ok(DarwinizeOutput {
        original,
        darwinized,
    })
    .with_artifact("darwinized_header_file", output))
}

/// Execute the darwinize command.
pub fn execute_darwinize(args: DarwinizeArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    emit(darwinize(&args, config), formatter)
}
