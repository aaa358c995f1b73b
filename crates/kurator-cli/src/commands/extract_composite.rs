//! Extract-composite command implementation.

use crate::cli::ExtractCompositeArgs;
use crate::commands::{emit, extractor, open_source, require};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::response::{ActorResponse, ValuesOutput};
use kurator_domain::CompositeKey;
use kurator_extractor::KeyOrder;
use tracing::info;

/// Distinct values of a composite key.
///
/// `--sorted` selects lexicographic order; otherwise the configured order
/// applies.
pub fn extract_composite(args: &ExtractCompositeArgs, config: &Config) -> ActorResponse<ValuesOutput> {
    ActorResponse::from_result(run(args, config))
}

fn run(args: &ExtractCompositeArgs, config: &Config) -> Result<ActorResponse<ValuesOutput>> {
    let mut source = open_source(&args.source, config)?;
    let definition = require(args.key.as_deref(), "No composite term given")?;
    let key = CompositeKey::parse(definition, config.extractor.separator)
        .map_err(CliError::InvalidInput)?;

    let order = if args.sorted {
        KeyOrder::Sorted
    } else {
        config.extractor.composite_order
    };
    let values = extractor(config).distinct_composite_values(&mut source, &key, order)?;
    info!(key = %key.name(), ?order, values = values.len(), "extracted composite values");

    Ok(ActorResponse::ok(ValuesOutput {
        key: key.name(),
        values,
    }))
}

/// Execute the extract-composite command.
pub fn execute_extract_composite(
    args: ExtractCompositeArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<bool> {
    emit(extract_composite(&args, config), formatter)
}
