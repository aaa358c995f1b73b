//! Kurator CLI - Extract values from occurrence data and grow Darwin Core vocabularies.

use anyhow::Context;
use clap::Parser;
use kurator_cli::commands;
use kurator_cli::{Cli, Command, Config, Formatter};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run() -> anyhow::Result<bool> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    // Load config from the given path or the default location
    let path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::path()?,
    };
    let mut config = Config::load_from(&path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    if !path.exists() {
        if let Err(e) = config.save_to(&path) {
            warn!(path = %path.display(), error = %e, "could not write default configuration");
        }
    }

    if let Some(workspace) = cli.workspace {
        config.settings.workspace = PathBuf::from(workspace);
    }
    std::fs::create_dir_all(&config.settings.workspace).with_context(|| {
        format!(
            "failed to create workspace {}",
            config.settings.workspace.display()
        )
    })?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let success = match cli.command {
        Command::Extract(args) => commands::execute_extract(args, &config, &formatter)?,
        Command::ExtractComposite(args) => {
            commands::execute_extract_composite(args, &config, &formatter)?
        }
        Command::Append(args) => commands::execute_append(args, &config, &formatter)?,
        Command::AppendComposite(args) => {
            commands::execute_append_composite(args, &config, &formatter)?
        }
        Command::GeogCollect(args) => commands::execute_geog_collect(args, &config, &formatter)?,
        Command::CloudCollect(args) => commands::execute_cloud_collect(args, &config, &formatter)?,
        Command::Tokens(args) => commands::execute_tokens(args, &config, &formatter)?,
        Command::ValueCounts(args) => commands::execute_value_counts(args, &config, &formatter)?,
        Command::Completeness(args) => commands::execute_completeness(args, &config, &formatter)?,
        Command::Unknown(args) => commands::execute_unknown(args, &config, &formatter)?,
        Command::Recommend(args) => commands::execute_recommend(args, &config, &formatter)?,
        Command::CheckFields(args) => commands::execute_check_fields(args, &config, &formatter)?,
        Command::Darwinize(args) => commands::execute_darwinize(args, &config, &formatter)?,
        Command::Standardize(args) => commands::execute_standardize(args, &config, &formatter)?,
        Command::TermCount(args) => commands::execute_term_count(args, &config, &formatter)?,
        Command::CompositeHeader(args) => {
            commands::execute_composite_header(args, &config, &formatter)?
        }
    };

    Ok(success)
}
