use anyhow::Result;
use colored::*;

use crate::people::Resolved;

pub const MISSING: &str = "<none>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

pub fn render(results: &[Resolved], format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(results)),
        Format::Json => Ok(serde_json::to_string_pretty(results)?),
    }
}

fn render_text(results: &[Resolved]) -> String {
    results
        .iter()
        .map(|r| {
            let middle = r
                .middle_name
                .as_ref()
                .fold(|| MISSING.dimmed().to_string(), |m| m.green().to_string());
            format!("{}: {}", r.name.yellow(), middle)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
