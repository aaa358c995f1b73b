//! Composite-header command implementation.

use crate::cli::CompositeHeaderArgs;
use crate::commands::{emit, input_file, require, value_list};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::response::{ActorResponse, CompositeHeaderOutput};
use kurator_tabular::{composite_header as merge_file_headers, write_header, Delimiter, ReadOptions};
use std::path::PathBuf;
use tracing::info;

/// Write the sorted union of the header fields of several files as a tab separated header.
pub fn composite_header(
    args: &CompositeHeaderArgs,
    config: &Config,
) -> ActorResponse<CompositeHeaderOutput> {
    ActorResponse::from_result(run(args, config))
}

fn run(args: &CompositeHeaderArgs, config: &Config) -> Result<ActorResponse<CompositeHeaderOutput>> {
    let workspace = &config.settings.workspace;
    let names = value_list(args.inputs.as_deref());
    if names.is_empty() {
        return Err(CliError::MissingInput("No input file given".to_string()));
    }
    let inputs = names
        .iter()
        .map(|name| input_file(Some(name.as_str()), workspace))
        .collect::<Result<Vec<PathBuf>>>()?;
    let output = workspace.join(require(args.output.as_deref(), "No output file given")?);

    let options = ReadOptions {
        delimiter: args.delimiter,
        encoding: args.encoding,
    };
    let Some(header) = merge_file_headers(&inputs, options)? else {
        return Ok(ActorResponse::failed("Unable to construct composite header"));
    };

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    write_header(&output, &header, Delimiter::Tab)?;
    info!(files = inputs.len(), fields = header.len(), output = %output.display(), "wrote composite header");

    Ok(ActorResponse::ok(CompositeHeaderOutput { inputs, header })
        .with_artifact("composite_header_file", output))
}

/// Execute the composite-header command.
pub fn execute_composite_header(
    args: CompositeHeaderArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<bool> {
    emit(composite_header(&args, config), formatter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.settings.workspace = dir.path().to_path_buf();
        config
    }

    #[test]
    fn test_headers_are_merged_and_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.csv"), "year,country\n1990,Peru\n").unwrap();
        fs::write(dir.path().join("b.txt"), "month\tyear\n5\t1991\n").unwrap();

        let args = CompositeHeaderArgs {
            inputs: Some(vec!["a.csv".to_string(), "b.txt".to_string()]),
            output: Some("header.txt".to_string()),
            ..Default::default()
        };
        let response = composite_header(&args, &config(&dir));
        assert!(response.success, "{:?}", response.message);
        assert_eq!(response.output.unwrap().header, vec!["country", "month", "year"]);

        let text = fs::read_to_string(dir.path().join("header.txt")).unwrap();
        assert_eq!(text, "country\tmonth\tyear\n");
        assert!(response.artifacts.contains_key("composite_header_file"));
    }

    #[test]
    fn test_output_is_required() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.csv"), "year\n1990\n").unwrap();

        let args = CompositeHeaderArgs {
            inputs: Some(vec!["a.csv".to_string()]),
            ..Default::default()
        };
        let response = composite_header(&args, &config(&dir));
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("No output file given"));

        let response = composite_header(&CompositeHeaderArgs::default(), &config(&dir));
        assert_eq!(response.message.as_deref(), Some("No input file given"));
    }
}
