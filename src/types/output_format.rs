use std::fmt::Display;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable sentences
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

pub fn render<T: Serialize + Display>(
    report: &T,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}
