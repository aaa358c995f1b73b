//! Check-fields command implementation.

use crate::cli::CheckFieldsArgs;
use crate::commands::{emit, input_file};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::response::{ActorResponse, CheckFieldsOutput};
use kurator_tabular::check_field_counts;
use tracing::warn;

/// Find the first data row with fewer fields than the header.
///
/// A short row fails the command, with the row still reported in the output.
pub fn check_fields(args: &CheckFieldsArgs, config: &Config) -> ActorResponse<CheckFieldsOutput> {
    ActorResponse::from_result(run(args, config))
}

fn run(args: &CheckFieldsArgs, config: &Config) -> Result<ActorResponse<CheckFieldsOutput>> {
    let input = input_file(args.source.input.as_deref(), &config.settings.workspace)?;

    match check_field_counts(&input, args.source.read_options())? {
        None => Ok(ActorResponse::ok(CheckFieldsOutput {
            input,
            first_short_row: None,
            line: None,
            expected: None,
            found: None,
        })),
        Some(short) => {
            warn!(input = %input.display(), row = short.index, "row with too few fields");
            let mut response = ActorResponse::failed("Row with incorrect number of fields found");
            response.output = Some(CheckFieldsOutput {
                input,
                first_short_row: Some(short.index),
                line: Some(short.line),
                expected: Some(short.expected),
                found: Some(short.found),
            });
            Ok(response)
        }
    }
}

/// Execute the check-fields command.
pub fn execute_check_fields(
    args: CheckFieldsArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<bool> {
    emit(check_fields(&args, config), formatter)
}
