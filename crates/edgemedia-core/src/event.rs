//! Outbound event factories
//!
//! Wraps a media collection into the edge request event, and produces the
//! session-created event that links a tracker session to a backend session.

use crate::collection::{MediaCollection, MediaEventInput};
use crate::keys;
use crate::types::EventType;
use crate::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

/// `xdm` payload of an edge event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Xdm {
    /// Edge-facing event type (`media.sessionStart`)
    pub event_type: String,
    /// UTC ISO-8601 with millisecond precision
    pub timestamp: String,
    pub media_collection: MediaCollection,
}

/// Request overrides of an edge event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestOverride {
    pub path: String,
}

/// Data of an edge event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeEventData {
    pub xdm: Xdm,
    pub request: RequestOverride,
}

/// Event handed to the edge transport
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundEvent {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub source: String,
    pub data: EdgeEventData,
}

impl OutboundEvent {
    /// Request path override (`/va/v1/<event type>`)
    pub fn request_path(&self) -> &str {
        &self.data.request.path
    }

    pub fn media_collection(&self) -> &MediaCollection {
        &self.data.xdm.media_collection
    }
}

/// Event linking a tracker session id to a backend session id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationEvent {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub source: String,
    pub data: serde_json::Map<String, Value>,
}

impl CorrelationEvent {
    pub fn backend_session_id(&self) -> Option<&str> {
        self.data
            .get(keys::tracker::BACKEND_SESSION_ID)
            .and_then(Value::as_str)
    }

    pub fn tracker_session_id(&self) -> Option<&str> {
        self.data.get(keys::tracker::SESSION_ID).and_then(Value::as_str)
    }
}

/// Format a timestamp as `yyyy-MM-ddTHH:mm:ss.SSSZ`
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Convert epoch seconds, as reported by the tracker, into a UTC timestamp
pub fn timestamp_from_secs(secs: f64) -> Result<DateTime<Utc>> {
    if !secs.is_finite() {
        return Err(Error::InvalidTimestamp(secs));
    }
    let millis = (secs * 1000.0).trunc();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return Err(Error::InvalidTimestamp(secs));
    }
    DateTime::from_timestamp_millis(millis as i64).ok_or(Error::InvalidTimestamp(secs))
}

/// Build the edge request event for a media event
pub fn edge_event(input: &MediaEventInput, ts: DateTime<Utc>) -> OutboundEvent {
    let event_type: EventType = input.event_type;
    let edge_event_type = event_type.edge_event_type();
    let path = event_type.request_path();

    debug!(event_type = %event_type, path = %path, "Building edge event");

    let xdm = Xdm {
        event_type: edge_event_type.clone(),
        timestamp: format_timestamp(&ts),
        media_collection: MediaCollection::build(input),
    };

    OutboundEvent {
        id: Uuid::new_v4(),
        name: format!("{}{}", keys::event::EDGE_EVENT_NAME_PREFIX, edge_event_type),
        event_type: keys::event::EDGE_TYPE.to_string(),
        source: keys::event::REQUEST_CONTENT_SOURCE.to_string(),
        data: EdgeEventData {
            xdm,
            request: RequestOverride { path },
        },
    }
}

/// Build the session-created event for a backend session id
pub fn session_created_event(tracker_session_id: &str, backend_session_id: &str) -> CorrelationEvent {
    let mut data = serde_json::Map::new();
    data.insert(
        keys::tracker::BACKEND_SESSION_ID.to_string(),
        Value::String(backend_session_id.to_string()),
    );
    data.insert(
        keys::tracker::SESSION_ID.to_string(),
        Value::String(tracker_session_id.to_string()),
    );

    debug!(tracker_session_id, backend_session_id, "Session created");

    CorrelationEvent {
        id: Uuid::new_v4(),
        name: keys::event::SESSION_CREATED_NAME.to_string(),
        event_type: keys::event::EDGE_MEDIA_TYPE.to_string(),
        source: keys::event::SESSION_CREATED_SOURCE.to_string(),
        data,
    }
}
