//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::response::{
    ActorResponse, AppendOutput, CheckFieldsOutput, CompletenessOutput, CompositeHeaderOutput,
    CountsOutput, DarwinizeOutput, RecommendOutput, StandardizeOutput, TermCountOutput,
    TokensOutput, ValuesOutput,
};
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Tabular view of a command output.
pub trait Render {
    /// Column titles.
    fn columns(&self) -> Vec<&'static str>;

    /// Table rows, one cell per column.
    fn rows(&self) -> Vec<Vec<String>>;

    /// Primary values printed in quiet mode, one per line.
    fn quiet(&self) -> Vec<String>;

    /// One-line summary printed above the table.
    fn summary(&self) -> Option<String> {
        None
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a command response.
    pub fn format_response<T: Render + Serialize>(&self, response: &ActorResponse<T>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
            OutputFormat::Table => Ok(self.format_table(response)),
            OutputFormat::Quiet => Ok(self.format_quiet(response)),
        }
    }

    fn format_table<T: Render>(&self, response: &ActorResponse<T>) -> String {
        let mut lines = Vec::new();

        if !response.success {
            let message = response.message.as_deref().unwrap_or("Command failed");
            lines.push(self.error(message));
        }

        if let Some(output) = &response.output {
            if response.success {
                if let Some(summary) = output.summary() {
                    lines.push(self.success(&summary));
                }
                if let Some(message) = &response.message {
                    lines.push(self.info(message));
                }
            }

            let rows = output.rows();
            if rows.is_empty() {
                lines.push(self.warning("No values found."));
            } else {
                let mut builder = Builder::default();
                builder.push_record(output.columns());
                for row in rows {
                    builder.push_record(row);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                lines.push(table.to_string());
            }
        }

        for (name, path) in &response.artifacts {
            lines.push(self.info(&format!("{}: {}", name, path.display())));
        }

        lines.join("\n")
    }

    fn format_quiet<T: Render>(&self, response: &ActorResponse<T>) -> String {
        match (&response.output, response.success) {
            (Some(output), true) => output.quiet().join("\n"),
            _ => response.message.clone().unwrap_or_default(),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

impl Render for ValuesOutput {
    fn columns(&self) -> Vec<&'static str> {
        vec!["Value"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.values.iter().map(|v| vec![v.clone()]).collect()
    }

    fn quiet(&self) -> Vec<String> {
        self.values.clone()
    }

    fn summary(&self) -> Option<String> {
        Some(format!("{} distinct value(s) of {}", self.values.len(), self.key))
    }
}

impl Render for AppendOutput {
    fn columns(&self) -> Vec<&'static str> {
        vec!["Added"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.added.iter().map(|v| vec![v.clone()]).collect()
    }

    fn quiet(&self) -> Vec<String> {
        self.added.clone()
    }

    fn summary(&self) -> Option<String> {
        Some(format!(
            "Added {} value(s) to {}",
            self.added.len(),
            self.vocabulary.display()
        ))
    }
}

impl Render for TokensOutput {
    fn columns(&self) -> Vec<&'static str> {
        vec!["Token", "Rows", "Total"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.tokens
            .iter()
            .map(|t| vec![t.token.clone(), t.row_count.to_string(), t.total_count.to_string()])
            .collect()
    }

    fn quiet(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.token.clone()).collect()
    }

    fn summary(&self) -> Option<String> {
        Some(format!(
            "{} token(s) in {} of {} row(s) of {}",
            self.tokens.len(),
            self.populated_rows,
            self.rows_scanned,
            self.field
        ))
    }
}

impl Render for CountsOutput {
    fn columns(&self) -> Vec<&'static str> {
        vec!["Value", "Count"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.counts
            .iter()
            .map(|c| vec![c.value.clone(), c.count.to_string()])
            .collect()
    }

    fn quiet(&self) -> Vec<String> {
        self.counts.iter().map(|c| c.value.clone()).collect()
    }

    fn summary(&self) -> Option<String> {
        Some(format!("{} distinct value(s) of {}", self.counts.len(), self.key))
    }
}

impl Render for CompletenessOutput {
    fn columns(&self) -> Vec<&'static str> {
        vec!["Field", "Populated"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.fields
            .iter()
            .map(|c| vec![c.value.clone(), c.count.to_string()])
            .collect()
    }

    fn quiet(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|c| format!("{}\t{}", c.value, c.count))
            .collect()
    }
}

impl Render for RecommendOutput {
    fn columns(&self) -> Vec<&'static str> {
        vec!["Key", "Standard", "Comment"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.recommendations
            .iter()
            .map(|r| vec![r.key.clone(), r.standard.clone(), r.comment.clone()])
            .collect()
    }

    fn quiet(&self) -> Vec<String> {
        self.recommendations
            .iter()
            .map(|r| format!("{}\t{}", r.key, r.standard))
            .collect()
    }

    fn summary(&self) -> Option<String> {
        let mut summary = format!("{} recommendation(s)", self.recommendations.len());
        if !self.new_values.is_empty() {
            summary.push_str(&format!(", {} value(s) not in the vocabulary", self.new_values.len()));
        }
        Some(summary)
    }
}

impl Render for CheckFieldsOutput {
    fn columns(&self) -> Vec<&'static str> {
        vec!["Row", "Expected", "Found", "Line"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let cell = |v: Option<usize>| v.map(|n| n.to_string()).unwrap_or_default();
        match self.first_short_row {
            Some(index) => vec![vec![
                index.to_string(),
                cell(self.expected),
                cell(self.found),
                self.line.clone().unwrap_or_default(),
            ]],
            None => Vec::new(),
        }
    }

    fn quiet(&self) -> Vec<String> {
        self.first_short_row.iter().map(|i| i.to_string()).collect()
    }

    fn summary(&self) -> Option<String> {
        match self.first_short_row {
            Some(_) => None,
            None => Some(format!("Every row of {} is complete", self.input.display())),
        }
    }
}

impl Render for DarwinizeOutput {
    fn columns(&self) -> Vec<&'static str> {
        vec!["Original", "Darwinized"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.original
            .iter()
            .zip(&self.darwinized)
            .map(|(o, d)| vec![o.clone(), d.clone()])
            .collect()
    }

    fn quiet(&self) -> Vec<String> {
        self.darwinized.clone()
    }
}

impl Render for StandardizeOutput {
    fn columns(&self) -> Vec<&'static str> {
        vec!["Key", "Rows", "Changed"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.key.clone(),
            self.rows.to_string(),
            self.changed.to_string(),
        ]]
    }

    fn quiet(&self) -> Vec<String> {
        vec![self.changed.to_string()]
    }
}

impl Render for TermCountOutput {
    fn columns(&self) -> Vec<&'static str> {
        vec!["Field", "Rows"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![self.field.clone(), self.row_count.to_string()]]
    }

    fn quiet(&self) -> Vec<String> {
        vec![self.row_count.to_string()]
    }
}

impl Render for CompositeHeaderOutput {
    fn columns(&self) -> Vec<&'static str> {
        vec!["Field"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.header.iter().map(|f| vec![f.clone()]).collect()
    }

    fn quiet(&self) -> Vec<String> {
        self.header.clone()
    }

    fn summary(&self) -> Option<String> {
        Some(format!("Merged the headers of {} files", self.inputs.len()))
    }
}
