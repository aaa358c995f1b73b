//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::commands::{emit, extractor, open_source, require};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::response::{ActorResponse, ValuesOutput};
use tracing::info;

/// Distinct values of one field, verbatim and in first-seen order.
pub fn extract(args: &ExtractArgs, config: &Config) -> ActorResponse<ValuesOutput> {
    ActorResponse::from_result(run(args, config))
}

fn run(args: &ExtractArgs, config: &Config) -> Result<ActorResponse<ValuesOutput>> {
    let mut source = open_source(&args.source, config)?;
    let field = require(args.field.as_deref(), "No term given")?;

    let values = extractor(config).distinct_single_values(&mut source, field)?;
    info!(field, values = values.len(), "extracted values");

    Ok(ActorResponse::ok(ValuesOutput {
        key: field.to_string(),
        values,
    }))
}

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    emit(extract(&args, config), formatter)
}
