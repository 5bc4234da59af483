//! Core types for Edge Media Core

use crate::{keys, Error};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Fact map produced by the session tracker (media info, ad info, QoE info...)
pub type FactMap = serde_json::Map<String, serde_json::Value>;

/// Flat key/value metadata attached by the application
pub type Metadata = HashMap<String, String>;

/// Media event types understood by the collection service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    SessionStart,
    Play,
    Ping,
    BitrateChange,
    BufferStart,
    PauseStart,
    AdBreakStart,
    AdStart,
    AdComplete,
    AdSkip,
    AdBreakComplete,
    ChapterStart,
    ChapterComplete,
    ChapterSkip,
    Error,
    SessionEnd,
    SessionComplete,
    StatesUpdate,
}

impl EventType {
    /// Every event type, in declaration order
    pub const ALL: [EventType; 18] = [
        EventType::SessionStart,
        EventType::Play,
        EventType::Ping,
        EventType::BitrateChange,
        EventType::BufferStart,
        EventType::PauseStart,
        EventType::AdBreakStart,
        EventType::AdStart,
        EventType::AdComplete,
        EventType::AdSkip,
        EventType::AdBreakComplete,
        EventType::ChapterStart,
        EventType::ChapterComplete,
        EventType::ChapterSkip,
        EventType::Error,
        EventType::SessionEnd,
        EventType::SessionComplete,
        EventType::StatesUpdate,
    ];

    /// Internal string form, used in the request path
    pub fn raw_value(&self) -> &'static str {
        match self {
            EventType::SessionStart => "sessionStart",
            EventType::Play => "play",
            EventType::Ping => "ping",
            EventType::BitrateChange => "bitrateChange",
            EventType::BufferStart => "bufferStart",
            EventType::PauseStart => "pauseStart",
            EventType::AdBreakStart => "adBreakStart",
            EventType::AdStart => "adStart",
            EventType::AdComplete => "adComplete",
            EventType::AdSkip => "adSkip",
            EventType::AdBreakComplete => "adBreakComplete",
            EventType::ChapterStart => "chapterStart",
            EventType::ChapterComplete => "chapterComplete",
            EventType::ChapterSkip => "chapterSkip",
            EventType::Error => "error",
            EventType::SessionEnd => "sessionEnd",
            EventType::SessionComplete => "sessionComplete",
            EventType::StatesUpdate => "statesUpdate",
        }
    }

    /// Edge-facing string form, written to `xdm.eventType`
    pub fn edge_event_type(&self) -> String {
        format!("media.{}", self.raw_value())
    }

    /// Request path override, `/va/v1/<raw value>`
    pub fn request_path(&self) -> String {
        format!("{}{}", keys::event::REQUEST_PATH_PREFIX, self.raw_value())
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.raw_value())
    }
}

impl FromStr for EventType {
    type Err = Error;

    /// Accepts either the raw value (`adStart`) or the edge event type (`media.adStart`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix("media.").unwrap_or(s);
        EventType::ALL
            .iter()
            .copied()
            .find(|t| t.raw_value() == raw)
            .ok_or_else(|| Error::UnknownEventType(s.to_string()))
    }
}

/// Tracker configuration snapshot, read-only while mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaState {
    /// Distribution channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Player name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    /// Application version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
}

impl MediaState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    pub fn with_player_name(mut self, player_name: impl Into<String>) -> Self {
        self.player_name = Some(player_name.into());
        self
    }

    pub fn with_app_version(mut self, app_version: impl Into<String>) -> Self {
        self.app_version = Some(app_version.into());
        self
    }

    /// True when no field was configured
    pub fn is_empty(&self) -> bool {
        self.channel.is_none() && self.player_name.is_none() && self.app_version.is_none()
    }
}

/// Custom metadata entry as rendered into `customMetadata`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub name: String,
    pub value: String,
}

impl MetadataEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Player state entry as rendered into `statesStart` / `statesEnd`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<serde_json::Value>,
}
