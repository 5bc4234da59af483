//! Edge Media Core - media analytics payload mapping
//!
//! This crate turns media playback facts reported by a session tracker into
//! the events sent to an edge analytics collection service:
//! - Classification of metadata into standard and custom keys
//! - Per-event-type details projection
//! - Media collection assembly
//! - Edge request events and session-created correlation events
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Edge Media Core                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  facts + metadata + media state                                 │
//! │                           │                                     │
//! │                    ┌──────┴──────┐                              │
//! │                    │  Metadata   │                              │
//! │                    │ Classifier  │                              │
//! │                    └──────┬──────┘                              │
//! │                    ┌──────┴──────┐                              │
//! │                    │  Details    │                              │
//! │                    │  Builders   │                              │
//! │                    └──────┬──────┘                              │
//! │                    ┌──────┴──────┐      ┌──────────────┐        │
//! │                    │   Media     │      │   Session    │        │
//! │                    │ Collection  │      │   Created    │        │
//! │                    └──────┬──────┘      └──────┬───────┘        │
//! │                    ┌──────┴──────┐             │                │
//! │                    │ Edge Event  │             │                │
//! │                    └──────┬──────┘             │                │
//! │                           └──────────┬─────────┘                │
//! │                                  transport                      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mapping function is pure; inputs are snapshots owned by the caller.

pub mod collection;
pub mod config;
pub mod details;
pub mod error;
pub mod event;
pub mod keys;
pub mod metadata;
pub mod types;

pub use collection::{MediaCollection, MediaDetails, MediaEventInput};
pub use details::{Details, UNKNOWN};
pub use error::{Error, Result};
pub use event::{
    edge_event, format_timestamp, session_created_event, timestamp_from_secs, CorrelationEvent,
    OutboundEvent,
};
pub use metadata::custom_metadata;
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the library version
pub fn init() {
    tracing::info!(version = VERSION, "Edge Media Core initialized");
}
