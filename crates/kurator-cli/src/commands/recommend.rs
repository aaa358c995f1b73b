//! Recommend command implementation.

use crate::cli::RecommendArgs;
use crate::commands::{emit, existing_vocabulary_file, extractor, open_source};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::report::{report_path, write_recommendation_report};
use crate::response::{ActorResponse, RecommendOutput, Recommendation};
use kurator_domain::VocabularyKind;
use kurator_extractor::KeySpec;
use kurator_store::VocabularyFile;
use tracing::info;

fn vocabulary_kind(key_column: &str) -> VocabularyKind {
    if key_column == VocabularyKind::Geography.key_column() {
        VocabularyKind::Geography
    } else {
        VocabularyKind::for_key(key_column)
    }
}

/// Checked vocabulary entries whose standard value differs from their key.
///
/// With `--input`, only entries for values found in the data file are
/// considered, and values with no entry are listed as new.
pub fn recommend(args: &RecommendArgs, config: &Config) -> ActorResponse<RecommendOutput> {
    ActorResponse::from_result(run(args, config))
}

fn run(args: &RecommendArgs, config: &Config) -> Result<ActorResponse<RecommendOutput>> {
    let path = existing_vocabulary_file(args.vocab.as_deref(), config)?;
    let key_column = args.key.trim();
    let kind = vocabulary_kind(key_column);
    let mut dict = VocabularyFile::new(&path, kind.clone()).dict()?;

    let mut new_values = Vec::new();
    if args.source.input.is_some() {
        let mut source = open_source(&args.source, config)?;
        let field = args.field.as_deref().unwrap_or(key_column);
        let key = KeySpec::parse(field, config.extractor.separator)?;
        let extractor = extractor(config);
        let checklist = match &key {
            KeySpec::Field(field) => extractor.distinct_single_values(&mut source, field)?,
            KeySpec::Composite(composite) => extractor.composite_values(&mut source, composite)?,
        };
        new_values = dict
            .missing(checklist.as_slice())
            .into_iter()
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string)
            .collect();
        dict = dict.matching(checklist.as_slice());
    }

    let recommended = dict.recommended();
    let report = if recommended.is_empty() {
        None
    } else {
        let format = args.report.report_format.unwrap_or(config.settings.report_format);
        let report = report_path(
            &config.settings.workspace,
            args.report.output.as_deref(),
            key_column,
            "recommendation",
            format,
        );
        write_recommendation_report(&report, &kind, &recommended, format)?;
        info!(vocabulary = %path.display(), recommended = recommended.len(), report = %report.display(), "wrote recommendation report");
        Some(report)
    };

    let output = RecommendOutput {
        vocabulary: path.clone(),
        recommendations: recommended
            .iter()
            .map(|e| Recommendation {
                key: e.key.clone(),
                standard: e.standard.clone(),
                comment: e.comment.clone(),
            })
            .collect(),
        new_values,
    };
    Ok(match report {
        Some(report) => ActorResponse::ok(output).with_artifact("recommendation_report_file", report),
        None => ActorResponse::ok(output).with_message(format!(
            "Vocabulary {} has no recommended values",
            path.display()
        )),
    })
}

/// Execute the recommend command.
pub fn execute_recommend(args: RecommendArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    emit(recommend(&args, config), formatter)
}
