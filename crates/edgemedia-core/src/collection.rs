//! Media collection assembly
//!
//! Combines playhead, backend session id, custom metadata and the details
//! object selected by the event type into the `mediaCollection` envelope.

use crate::details::{self, Details};
use crate::metadata::custom_metadata;
use crate::types::{EventType, FactMap, MediaState, Metadata, MetadataEntry, StateEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything the tracker knows about one media event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEventInput {
    /// Event type, selects the details builder
    pub event_type: EventType,
    /// Playback position
    #[serde(default)]
    pub playhead: i64,
    /// Session id issued by the collection service
    #[serde(default)]
    pub backend_session_id: Option<String>,
    /// Facts for the event type (media info, ad info, chapter info...)
    #[serde(default)]
    pub info: FactMap,
    /// Application metadata
    #[serde(default)]
    pub metadata: Option<Metadata>,
    /// Tracker configuration snapshot
    #[serde(default)]
    pub media_state: Option<MediaState>,
    /// QoE facts set since the last event, attached to this one
    #[serde(default)]
    pub qoe_info: Option<FactMap>,
    /// For states updates: true for `statesStart`, false for `statesEnd`
    #[serde(default = "default_state_start")]
    pub state_start: bool,
}

fn default_state_start() -> bool {
    true
}

impl MediaEventInput {
    /// Create an input with no facts
    pub fn new(event_type: EventType, playhead: i64) -> Self {
        Self {
            event_type,
            playhead,
            backend_session_id: None,
            info: FactMap::new(),
            metadata: None,
            media_state: None,
            qoe_info: None,
            state_start: true,
        }
    }

    pub fn with_backend_session_id(mut self, id: impl Into<String>) -> Self {
        self.backend_session_id = Some(id.into());
        self
    }

    pub fn with_info(mut self, info: FactMap) -> Self {
        self.info = info;
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_media_state(mut self, state: MediaState) -> Self {
        self.media_state = Some(state);
        self
    }

    pub fn with_qoe_info(mut self, qoe_info: FactMap) -> Self {
        self.qoe_info = Some(qoe_info);
        self
    }

    /// Mark a states update as the end of the listed states
    pub fn state_end(mut self) -> Self {
        self.state_start = false;
        self
    }
}

/// The single details object carried by a media collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MediaDetails {
    #[serde(rename = "sessionDetails")]
    Session(Details),
    #[serde(rename = "advertisingDetails")]
    Advertising(Details),
    #[serde(rename = "advertisingPodDetails")]
    AdvertisingPod(Details),
    #[serde(rename = "chapterDetails")]
    Chapter(Details),
    #[serde(rename = "errorDetails")]
    Error(Details),
    #[serde(rename = "statesStart")]
    StatesStart(Vec<StateEntry>),
    #[serde(rename = "statesEnd")]
    StatesEnd(Vec<StateEntry>),
}

impl MediaDetails {
    /// Output key in the media collection
    pub fn key(&self) -> &'static str {
        match self {
            MediaDetails::Session(_) => "sessionDetails",
            MediaDetails::Advertising(_) => "advertisingDetails",
            MediaDetails::AdvertisingPod(_) => "advertisingPodDetails",
            MediaDetails::Chapter(_) => "chapterDetails",
            MediaDetails::Error(_) => "errorDetails",
            MediaDetails::StatesStart(_) => "statesStart",
            MediaDetails::StatesEnd(_) => "statesEnd",
        }
    }
}

/// `xdm.mediaCollection`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaCollection {
    pub playhead: i64,
    #[serde(rename = "sessionID", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(rename = "customMetadata", skip_serializing_if = "Option::is_none")]
    pub custom_metadata: Option<Vec<MetadataEntry>>,
    #[serde(flatten)]
    pub details: Option<MediaDetails>,
    #[serde(rename = "qoeDataDetails", skip_serializing_if = "Option::is_none")]
    pub qoe_data_details: Option<Details>,
}

impl MediaCollection {
    /// Assemble the collection for one event
    pub fn build(input: &MediaEventInput) -> Self {
        let event_type = input.event_type;

        let session_id = match event_type {
            EventType::SessionStart => None,
            _ => input.backend_session_id.clone(),
        };

        let custom_metadata = input
            .metadata
            .as_ref()
            .filter(|metadata| !metadata.is_empty())
            .map(|metadata| custom_metadata(event_type, metadata));

        let (details, mut qoe_data_details) = dispatch_details(input);

        // QoE facts attach to whatever event follows them, bitrate change included
        if let Some(qoe_info) = &input.qoe_info {
            qoe_data_details = Some(details::qoe_details(qoe_info));
        }

        debug!(
            event_type = %event_type,
            details = details.as_ref().map(MediaDetails::key).unwrap_or("none"),
            qoe = qoe_data_details.is_some(),
            "Built media collection"
        );

        Self {
            playhead: input.playhead,
            session_id,
            custom_metadata,
            details,
            qoe_data_details,
        }
    }
}

fn dispatch_details(input: &MediaEventInput) -> (Option<MediaDetails>, Option<Details>) {
    let empty_metadata = Metadata::new();
    let metadata = input.metadata.as_ref().unwrap_or(&empty_metadata);
    let default_state = MediaState::default();
    let state = input.media_state.as_ref().unwrap_or(&default_state);
    let info = &input.info;

    match input.event_type {
        EventType::SessionStart => (
            Some(MediaDetails::Session(details::session_details(info, metadata, state))),
            None,
        ),
        EventType::AdStart => (
            Some(MediaDetails::Advertising(details::advertising_details(info, metadata, state))),
            None,
        ),
        EventType::AdBreakStart => (
            Some(MediaDetails::AdvertisingPod(details::advertising_pod_details(info))),
            None,
        ),
        EventType::ChapterStart => (Some(MediaDetails::Chapter(details::chapter_details(info))), None),
        EventType::Error => (Some(MediaDetails::Error(details::error_details(info))), None),
        EventType::StatesUpdate => {
            let states = details::states_update(info);
            if input.state_start {
                (Some(MediaDetails::StatesStart(states)), None)
            } else {
                (Some(MediaDetails::StatesEnd(states)), None)
            }
        }
        EventType::BitrateChange => (None, Some(details::qoe_details(info))),
        EventType::Play
        | EventType::Ping
        | EventType::BufferStart
        | EventType::PauseStart
        | EventType::AdComplete
        | EventType::AdSkip
        | EventType::AdBreakComplete
        | EventType::ChapterComplete
        | EventType::ChapterSkip
        | EventType::SessionEnd
        | EventType::SessionComplete => (None, None),
    }
}
