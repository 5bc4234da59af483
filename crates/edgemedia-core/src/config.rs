//! Media state configuration
//!
//! Reads the `edgemedia.*` entries of a shared configuration map into a
//! [`MediaState`] snapshot.

use crate::keys;
use crate::types::MediaState;
use crate::{Error, Result};
use serde_json::{Map, Value};
use tracing::debug;

fn read_string(config: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match config.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(Error::config(
            key,
            format!("expected a string, found {}", other),
        )),
    }
}

impl MediaState {
    /// Build a media state from a configuration map.
    ///
    /// Unrelated keys are ignored. A present key with a non-string value is
    /// rejected.
    pub fn from_config(config: &Map<String, Value>) -> Result<Self> {
        let state = MediaState {
            channel: read_string(config, keys::config::CHANNEL)?,
            player_name: read_string(config, keys::config::PLAYER_NAME)?,
            app_version: read_string(config, keys::config::APP_VERSION)?,
        };

        debug!(
            channel = ?state.channel,
            player_name = ?state.player_name,
            app_version = ?state.app_version,
            "Media state configured"
        );

        Ok(state)
    }

    /// Parse a JSON configuration document
    pub fn from_config_json(json: &str) -> Result<Self> {
        let config: Map<String, Value> = serde_json::from_str(json)?;
        Self::from_config(&config)
    }
}
