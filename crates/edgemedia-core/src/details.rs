//! Details builders
//!
//! One pure projection per event kind. Each reads a tracker fact map (and,
//! for sessions and ads, the classified metadata and media state) and writes
//! a fixed set of output fields. Missing string facts are omitted; missing or
//! non-numeric integer facts become [`UNKNOWN`].

use crate::keys;
use crate::metadata::{ad_field, media_field};
use crate::types::{FactMap, MediaState, Metadata, StateEntry};
use serde_json::Value;

/// A rendered details object (`sessionDetails`, `chapterDetails`...)
pub type Details = serde_json::Map<String, Value>;

/// Sentinel for an unknown integer field
pub const UNKNOWN: i64 = -1;

/// Read a fact as a number and truncate it toward zero.
///
/// Absent, null and non-numeric values all map to [`UNKNOWN`].
pub fn coerce_i64(facts: &FactMap, key: &str) -> i64 {
    facts
        .get(key)
        .and_then(Value::as_f64)
        .map(|v| v.trunc() as i64)
        .unwrap_or(UNKNOWN)
}

fn copy_fact(details: &mut Details, facts: &FactMap, key: &str, field: &str) {
    if let Some(value) = facts.get(key).filter(|v| !v.is_null()) {
        details.insert(field.to_string(), value.clone());
    }
}

fn put_int(details: &mut Details, facts: &FactMap, key: &str, field: &str) {
    details.insert(field.to_string(), Value::from(coerce_i64(facts, key)));
}

fn put_non_empty(details: &mut Details, field: &str, value: Option<&String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        details.insert(field.to_string(), Value::String(value.clone()));
    }
}

/// `sessionDetails` for session start
pub fn session_details(media_info: &FactMap, metadata: &Metadata, state: &MediaState) -> Details {
    let mut details = Details::new();
    copy_fact(&mut details, media_info, keys::media::ID, "name");
    copy_fact(&mut details, media_info, keys::media::NAME, "friendlyName");
    put_int(&mut details, media_info, keys::media::LENGTH, "length");
    copy_fact(&mut details, media_info, keys::media::MEDIA_TYPE, "streamType");
    copy_fact(&mut details, media_info, keys::media::STREAM_TYPE, "contentType");
    copy_fact(&mut details, media_info, keys::media::RESUMED, "hasResume");

    for (key, value) in metadata {
        if let Some(field) = media_field(key) {
            details.insert(field.to_string(), Value::String(value.clone()));
        }
    }

    put_non_empty(&mut details, "channel", state.channel.as_ref());
    put_non_empty(&mut details, "playerName", state.player_name.as_ref());
    put_non_empty(&mut details, "appVersion", state.app_version.as_ref());

    details
}

/// `advertisingDetails` for ad start
pub fn advertising_details(ad_info: &FactMap, metadata: &Metadata, state: &MediaState) -> Details {
    let mut details = Details::new();
    copy_fact(&mut details, ad_info, keys::ad::ID, "name");
    copy_fact(&mut details, ad_info, keys::ad::NAME, "friendlyName");
    put_int(&mut details, ad_info, keys::ad::LENGTH, "length");
    put_int(&mut details, ad_info, keys::ad::POSITION, "podPosition");

    for (key, value) in metadata {
        if let Some(field) = ad_field(key) {
            details.insert(field.to_string(), Value::String(value.clone()));
        }
    }

    put_non_empty(&mut details, "playerName", state.player_name.as_ref());

    details
}

/// `advertisingPodDetails` for ad break start
pub fn advertising_pod_details(ad_break_info: &FactMap) -> Details {
    let mut details = Details::new();
    copy_fact(&mut details, ad_break_info, keys::ad_break::NAME, "friendlyName");
    put_int(&mut details, ad_break_info, keys::ad_break::POSITION, "index");
    put_int(&mut details, ad_break_info, keys::ad_break::START_TIME, "offset");
    details
}

/// `chapterDetails` for chapter start
pub fn chapter_details(chapter_info: &FactMap) -> Details {
    let mut details = Details::new();
    copy_fact(&mut details, chapter_info, keys::chapter::NAME, "friendlyName");
    put_int(&mut details, chapter_info, keys::chapter::POSITION, "index");
    put_int(&mut details, chapter_info, keys::chapter::START_TIME, "offset");
    put_int(&mut details, chapter_info, keys::chapter::LENGTH, "length");
    details
}

/// `errorDetails` for error events
pub fn error_details(error_info: &FactMap) -> Details {
    let mut details = Details::new();
    copy_fact(&mut details, error_info, keys::error::ID, "name");
    copy_fact(&mut details, error_info, keys::error::SOURCE, "source");
    details
}

/// Single-element state list for `statesStart` / `statesEnd`
pub fn states_update(state_info: &FactMap) -> Vec<StateEntry> {
    let name = state_info
        .get(keys::state::NAME)
        .filter(|v| !v.is_null())
        .cloned();
    vec![StateEntry { name }]
}

/// `qoeDataDetails`
pub fn qoe_details(qoe_info: &FactMap) -> Details {
    let mut details = Details::new();
    put_int(&mut details, qoe_info, keys::qoe::BITRATE, "bitrate");
    put_int(&mut details, qoe_info, keys::qoe::DROPPED_FRAMES, "droppedFrames");
    put_int(&mut details, qoe_info, keys::qoe::FPS, "framesPerSecond");
    put_int(&mut details, qoe_info, keys::qoe::STARTUP_TIME, "timeToStart");
    details
}
