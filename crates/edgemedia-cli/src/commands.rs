//! CLI command implementations

use crate::output::{format_output, OutputFormat};
use anyhow::Context;
use chrono::Utc;
use edgemedia_core::{
    edge_event, session_created_event, timestamp_from_secs, EventType, MediaCollection,
    MediaEventInput, MediaState,
};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Read a media event input document
pub fn read_input(path: &Path) -> anyhow::Result<MediaEventInput> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input {}", path.display()))?;
    let input: MediaEventInput = serde_json::from_str(&text)
        .with_context(|| format!("Invalid media event input in {}", path.display()))?;
    debug!(event_type = %input.event_type, path = %path.display(), "Loaded input");
    Ok(input)
}

/// Read a configuration document into a media state
pub fn read_config(path: &Path) -> anyhow::Result<MediaState> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let state = MediaState::from_config_json(&text)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;
    Ok(state)
}

/// Render the edge event for an input file
pub fn render(
    input_path: &Path,
    timestamp: Option<f64>,
    config_path: Option<&Path>,
    format: &str,
) -> anyhow::Result<()> {
    let mut input = read_input(input_path)?;

    // Configuration file wins over any media state embedded in the input
    if let Some(config_path) = config_path {
        input.media_state = Some(read_config(config_path)?);
    }

    let ts = match timestamp {
        Some(secs) => timestamp_from_secs(secs)?,
        None => Utc::now(),
    };

    let event = edge_event(&input, ts);
    info!(name = %event.name, path = %event.request_path(), "Rendered edge event");

    println!("{}", format_output(&event, format)?);
    Ok(())
}

/// Render the media collection for an input file
pub fn collection(input_path: &Path, format: &str) -> anyhow::Result<()> {
    let input = read_input(input_path)?;
    let collection = MediaCollection::build(&input);
    println!("{}", format_output(&collection, format)?);
    Ok(())
}

/// Render the session-created correlation event
pub fn correlate(tracker_session_id: &str, backend_session_id: &str, format: &str) -> anyhow::Result<()> {
    let event = session_created_event(tracker_session_id, backend_session_id);
    println!("{}", format_output(&event, format)?);
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeRow {
    pub raw_value: &'static str,
    pub edge_event_type: String,
    pub request_path: String,
}

pub fn event_type_rows() -> Vec<EventTypeRow> {
    EventType::ALL
        .iter()
        .map(|t| EventTypeRow {
            raw_value: t.raw_value(),
            edge_event_type: t.edge_event_type(),
            request_path: t.request_path(),
        })
        .collect()
}

/// List event types
pub fn event_types(format: &str) -> anyhow::Result<()> {
    let rows = event_type_rows();

    if OutputFormat::from(format) != OutputFormat::Text {
        println!("{}", format_output(&rows, format)?);
        return Ok(());
    }

    println!("  {:20} {:26} {}", "Event Type", "Edge Event Type", "Request Path");
    for row in &rows {
        println!("  {:20} {:26} {}", row.raw_value, row.edge_event_type, row.request_path);
    }
    Ok(())
}
