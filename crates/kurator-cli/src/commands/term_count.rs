//! Term-count command implementation.

use crate::cli::TermCountArgs;
use crate::commands::{emit, extractor, open_source, require};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::response::{ActorResponse, TermCountOutput};

/// Count the rows with a non-blank value for one field.
pub fn term_count(args: &TermCountArgs, config: &Config) -> ActorResponse<TermCountOutput> {
    ActorResponse::from_result(run(args, config))
}

fn run(args: &TermCountArgs, config: &Config) -> Result<ActorResponse<TermCountOutput>> {
    let mut source = open_source(&args.source, config)?;
    let field = require(args.field.as_deref(), "No term given")?;

    let row_count = extractor(config).term_row_count(&mut source, field)?;

    Ok(ActorResponse::ok(TermCountOutput {
        input: source.path().to_path_buf(),
        field: field.to_string(),
        row_count,
    }))
}

/// Execute the term-count command.
pub fn execute_term_count(args: TermCountArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    emit(term_count(&args, config), formatter)
}
