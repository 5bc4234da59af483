//! Output formatting for CLI

use serde::Serialize;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Compact,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "compact" => OutputFormat::Compact,
            _ => OutputFormat::Text,
        }
    }
}

/// Format a payload based on selected format
///
/// Text and JSON both pretty-print; compact emits a single line.
pub fn format_output<T: Serialize>(data: &T, format: &str) -> anyhow::Result<String> {
    let rendered = match OutputFormat::from(format) {
        OutputFormat::Compact => serde_json::to_string(data)?,
        OutputFormat::Json | OutputFormat::Text => serde_json::to_string_pretty(data)?,
    };
    Ok(rendered)
}
