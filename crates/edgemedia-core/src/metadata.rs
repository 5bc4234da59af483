//! Metadata classification
//!
//! Splits application metadata into standard keys, which have a dedicated
//! output field in the session or advertising details, and custom keys,
//! which are rendered into `customMetadata`.

use crate::keys::{ad_metadata, audio_metadata, video_metadata};
use crate::types::{EventType, Metadata, MetadataEntry};
use tracing::trace;

/// Standard media metadata key → `sessionDetails` field
pub static STANDARD_MEDIA_METADATA: &[(&str, &str)] = &[
    // Video
    (video_metadata::AD_LOAD, "adLoad"),
    (video_metadata::ASSET_ID, "assetID"),
    (video_metadata::AUTHORIZED, "authorized"),
    (video_metadata::DAY_PART, "dayPart"),
    (video_metadata::EPISODE, "episode"),
    (video_metadata::FEED, "feed"),
    (video_metadata::FIRST_AIR_DATE, "firstAirDate"),
    (video_metadata::FIRST_DIGITAL_DATE, "firstDigitalDate"),
    (video_metadata::GENRE, "genre"),
    (video_metadata::MVPD, "mvpd"),
    (video_metadata::NETWORK, "network"),
    (video_metadata::ORIGINATOR, "originator"),
    (video_metadata::RATING, "rating"),
    (video_metadata::SEASON, "season"),
    (video_metadata::SHOW, "show"),
    (video_metadata::SHOW_TYPE, "showType"),
    (video_metadata::STREAM_FORMAT, "streamFormat"),
    // Audio
    (audio_metadata::ALBUM, "album"),
    (audio_metadata::ARTIST, "artist"),
    (audio_metadata::AUTHOR, "author"),
    (audio_metadata::LABEL, "label"),
    (audio_metadata::PUBLISHER, "publisher"),
    (audio_metadata::STATION, "station"),
];

/// Standard ad metadata key → `advertisingDetails` field
pub static STANDARD_AD_METADATA: &[(&str, &str)] = &[
    (ad_metadata::ADVERTISER, "advertiser"),
    (ad_metadata::CAMPAIGN_ID, "campaignID"),
    (ad_metadata::CREATIVE_ID, "creativeID"),
    (ad_metadata::CREATIVE_URL, "creativeURL"),
    (ad_metadata::PLACEMENT_ID, "placementID"),
    (ad_metadata::SITE_ID, "siteID"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(standard_key, _)| *standard_key == key)
        .map(|(_, field)| *field)
}

/// `sessionDetails` field for a standard media metadata key
pub fn media_field(key: &str) -> Option<&'static str> {
    lookup(STANDARD_MEDIA_METADATA, key)
}

/// `advertisingDetails` field for a standard ad metadata key
pub fn ad_field(key: &str) -> Option<&'static str> {
    lookup(STANDARD_AD_METADATA, key)
}

pub fn is_standard_media_key(key: &str) -> bool {
    media_field(key).is_some()
}

pub fn is_standard_ad_key(key: &str) -> bool {
    ad_field(key).is_some()
}

/// Returns true if `key` has a dedicated field for this event type.
///
/// Only session start (media keys) and ad start (ad keys) recognize
/// standard metadata; every key is custom for all other event types.
pub fn is_standard_for(event_type: EventType, key: &str) -> bool {
    match event_type {
        EventType::SessionStart => is_standard_media_key(key),
        EventType::AdStart => is_standard_ad_key(key),
        _ => false,
    }
}

/// Custom metadata entries for an event, sorted ascending by name
pub fn custom_metadata(event_type: EventType, metadata: &Metadata) -> Vec<MetadataEntry> {
    let mut entries: Vec<MetadataEntry> = metadata
        .iter()
        .filter(|(key, _)| !is_standard_for(event_type, key))
        .map(|(key, value)| MetadataEntry::new(key.as_str(), value.as_str()))
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    trace!(
        event_type = %event_type,
        total = metadata.len(),
        custom = entries.len(),
        "Classified metadata"
    );

    entries
}
