//! Integration tests for Edge Media Core

use chrono::{TimeZone, Utc};
use edgemedia_core::{
    custom_metadata, edge_event, session_created_event, EventType, FactMap, MediaCollection,
    MediaEventInput, MediaState, Metadata, MetadataEntry,
};
use proptest::prelude::*;
use serde_json::{json, Value};

fn facts(value: Value) -> FactMap {
    match value {
        Value::Object(map) => map,
        _ => panic!("facts must be an object"),
    }
}

fn metadata(pairs: &[(&str, &str)]) -> Metadata {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// Session Start Tests
// =============================================================================

#[test]
fn test_session_start_full_payload() {
    let input = MediaEventInput::new(EventType::SessionStart, 0)
        .with_backend_session_id("ignored-for-session-start")
        .with_info(facts(json!({
            "media.id": "video-1",
            "media.name": "Sintel",
            "media.length": 888.0,
            "media.type": "video",
            "media.streamtype": "vod",
            "media.resumed": false,
        })))
        .with_metadata(metadata(&[
            ("a.media.show", "Open Movies"),
            ("a.media.genre", "fantasy"),
            ("custom.foo", "bar"),
            ("a.media.ad.advertiser", "acme"),
        ]))
        .with_media_state(
            MediaState::new()
                .with_channel("test-channel")
                .with_player_name("testPlayerName")
                .with_app_version("1.0.0"),
        );

    let event = edge_event(&input, Utc.timestamp_millis_opt(1_650_000_000_123).unwrap());
    let json = serde_json::to_value(&event).unwrap();

    assert_eq!(json["name"], "MediaEdge event - media.sessionStart");
    assert_eq!(json["data"]["request"]["path"], "/va/v1/sessionStart");
    assert_eq!(json["data"]["xdm"]["timestamp"], "2022-04-15T05:20:00.123Z");

    let collection = &json["data"]["xdm"]["mediaCollection"];
    assert_eq!(
        *collection,
        json!({
            "playhead": 0,
            "customMetadata": [
                { "name": "a.media.ad.advertiser", "value": "acme" },
                { "name": "custom.foo", "value": "bar" },
            ],
            "sessionDetails": {
                "name": "video-1",
                "friendlyName": "Sintel",
                "length": 888,
                "streamType": "video",
                "contentType": "vod",
                "hasResume": false,
                "show": "Open Movies",
                "genre": "fantasy",
                "channel": "test-channel",
                "playerName": "testPlayerName",
                "appVersion": "1.0.0",
            },
        })
    );
}

#[test]
fn test_session_start_round_trip() {
    let input = MediaEventInput::new(EventType::SessionStart, 0)
        .with_metadata(metadata(&[("a.media.show", "X"), ("custom.foo", "bar")]));
    let json = serde_json::to_value(MediaCollection::build(&input)).unwrap();

    assert_eq!(json["sessionDetails"]["show"], "X");
    assert_eq!(json["customMetadata"], json!([{ "name": "custom.foo", "value": "bar" }]));
}

#[test]
fn test_session_start_without_media_state() {
    let input = MediaEventInput::new(EventType::SessionStart, 0);
    let json = serde_json::to_value(MediaCollection::build(&input)).unwrap();
    assert_eq!(json, json!({ "playhead": 0, "sessionDetails": { "length": -1 } }));
}

// =============================================================================
// Ad Tests
// =============================================================================

#[test]
fn test_ad_start_payload() {
    let input = MediaEventInput::new(EventType::AdStart, 15)
        .with_backend_session_id("backend-1")
        .with_info(facts(json!({
            "ad.id": "ad-1",
            "ad.name": "Pre-roll",
            "ad.length": 30.0,
            "ad.position": 1,
        })))
        .with_metadata(metadata(&[
            ("a.media.ad.campaign", "spring"),
            ("a.media.ad.creativeURL", "https://cdn.example.com/ad.mp4"),
            ("a.media.show", "custom for ads"),
        ]))
        .with_media_state(MediaState::new().with_player_name("testPlayerName"));

    let json = serde_json::to_value(MediaCollection::build(&input)).unwrap();
    assert_eq!(json["sessionID"], "backend-1");
    assert_eq!(
        json["advertisingDetails"],
        json!({
            "name": "ad-1",
            "friendlyName": "Pre-roll",
            "length": 30,
            "podPosition": 1,
            "campaignID": "spring",
            "creativeURL": "https://cdn.example.com/ad.mp4",
            "playerName": "testPlayerName",
        })
    );
    assert_eq!(json["customMetadata"], json!([{ "name": "a.media.show", "value": "custom for ads" }]));
}

#[test]
fn test_ad_break_start_request_path() {
    let input = MediaEventInput::new(EventType::AdBreakStart, 0)
        .with_info(facts(json!({ "adbreak.name": "mid", "adbreak.position": 2 })));
    let event = edge_event(&input, Utc::now());

    assert_eq!(event.request_path(), format!("/va/v1/{}", EventType::AdBreakStart.raw_value()));
    assert_eq!(event.request_path(), "/va/v1/adBreakStart");

    let json = serde_json::to_value(event.media_collection()).unwrap();
    assert_eq!(
        json["advertisingPodDetails"],
        json!({ "friendlyName": "mid", "index": 2, "offset": -1 })
    );
}

// =============================================================================
// Chapter, Error and State Tests
// =============================================================================

#[test]
fn test_chapter_start_metadata_is_custom() {
    let input = MediaEventInput::new(EventType::ChapterStart, 60)
        .with_backend_session_id("backend-1")
        .with_info(facts(json!({
            "chapter.name": "Act 2",
            "chapter.position": 2,
            "chapter.starttime": 60.5,
            "chapter.length": 120,
        })))
        .with_metadata(metadata(&[("a.media.show", "X")]));

    let json = serde_json::to_value(MediaCollection::build(&input)).unwrap();
    assert_eq!(
        json["chapterDetails"],
        json!({ "friendlyName": "Act 2", "index": 2, "offset": 60, "length": 120 })
    );
    assert_eq!(json["customMetadata"], json!([{ "name": "a.media.show", "value": "X" }]));
}

#[test]
fn test_error_payload() {
    let input = MediaEventInput::new(EventType::Error, 33)
        .with_backend_session_id("backend-1")
        .with_info(facts(json!({ "error.id": "network-timeout", "error.source": "player" })));

    let event = edge_event(&input, Utc::now());
    assert_eq!(event.name, "MediaEdge event - media.error");
    assert_eq!(event.request_path(), "/va/v1/error");

    let json = serde_json::to_value(event.media_collection()).unwrap();
    assert_eq!(
        json,
        json!({
            "playhead": 33,
            "sessionID": "backend-1",
            "errorDetails": { "name": "network-timeout", "source": "player" },
        })
    );
}

#[test]
fn test_states_update_end() {
    let input = MediaEventInput::new(EventType::StatesUpdate, 0)
        .with_info(facts(json!({ "state.name": "pictureInPicture" })))
        .state_end();
    let json = serde_json::to_value(MediaCollection::build(&input)).unwrap();
    assert_eq!(json["statesEnd"], json!([{ "name": "pictureInPicture" }]));
    assert!(json.get("statesStart").is_none());
}

// =============================================================================
// QoE Tests
// =============================================================================

#[test]
fn test_qoe_override_replaces_bitrate_change_details() {
    let input = MediaEventInput::new(EventType::BitrateChange, 0)
        .with_info(facts(json!({ "qoe.bitrate": 800_000, "qoe.fps": 30 })))
        .with_qoe_info(facts(json!({ "qoe.bitrate": 4_000_000, "qoe.droppedframes": 2 })));

    let json = serde_json::to_value(MediaCollection::build(&input)).unwrap();
    assert_eq!(
        json["qoeDataDetails"],
        json!({ "bitrate": 4_000_000, "droppedFrames": 2, "framesPerSecond": -1, "timeToStart": -1 })
    );
}

#[test]
fn test_qoe_attached_to_ping() {
    let input = MediaEventInput::new(EventType::Ping, 50)
        .with_backend_session_id("backend-1")
        .with_qoe_info(facts(json!({ "qoe.startuptime": 1.75 })));

    let json = serde_json::to_value(MediaCollection::build(&input)).unwrap();
    assert_eq!(json["qoeDataDetails"]["timeToStart"], 1);
    assert_eq!(json["sessionID"], "backend-1");
}

// =============================================================================
// Correlation Tests
// =============================================================================

#[test]
fn test_session_created_event_data() {
    let event = session_created_event("tracker-session", "backend-session");
    let json = serde_json::to_value(&event).unwrap();

    assert_eq!(json["name"], "Media::SessionCreated");
    assert_eq!(json["type"], "com.adobe.eventtype.edgemedia");
    assert_eq!(json["source"], "com.adobe.eventsource.edgemedia.sessioncreated");
    assert_eq!(
        json["data"],
        json!({ "mediaservice.sessionid": "backend-session", "sessionid": "tracker-session" })
    );
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_configured_media_state_flows_into_session_details() {
    let state = MediaState::from_config_json(
        r#"{"edgemedia.channel": "test-channel", "edgemedia.playerName": "testPlayerName"}"#,
    )
    .unwrap();
    let input = MediaEventInput::new(EventType::SessionStart, 0).with_media_state(state);

    let json = serde_json::to_value(MediaCollection::build(&input)).unwrap();
    assert_eq!(json["sessionDetails"]["channel"], "test-channel");
    assert_eq!(json["sessionDetails"]["playerName"], "testPlayerName");
    assert!(json["sessionDetails"].get("appVersion").is_none());
}

// =============================================================================
// Property Tests
// =============================================================================

fn any_event_type() -> impl Strategy<Value = EventType> {
    (0..EventType::ALL.len()).prop_map(|i| EventType::ALL[i])
}

fn any_metadata() -> impl Strategy<Value = Metadata> {
    let key = prop_oneof![
        Just("a.media.show".to_string()),
        Just("a.media.genre".to_string()),
        Just("a.media.ad.advertiser".to_string()),
        Just("a.media.ad.site".to_string()),
        "[a-z]{1,8}(\\.[a-z]{1,8})?",
    ];
    proptest::collection::hash_map(key, "[a-zA-Z0-9 ]{0,12}", 0..12)
}

proptest! {
    #[test]
    fn prop_custom_metadata_sorted_without_standard_keys(
        event_type in any_event_type(),
        md in any_metadata(),
    ) {
        let custom = custom_metadata(event_type, &md);

        prop_assert!(custom.windows(2).all(|w| w[0].name < w[1].name));
        for MetadataEntry { name, value } in &custom {
            prop_assert!(!edgemedia_core::metadata::is_standard_for(event_type, name));
            prop_assert_eq!(md.get(name), Some(value));
        }

        let standard = md
            .keys()
            .filter(|k| edgemedia_core::metadata::is_standard_for(event_type, k.as_str()))
            .count();
        prop_assert_eq!(custom.len() + standard, md.len());
    }

    #[test]
    fn prop_missing_numeric_facts_are_unknown(position in any::<i32>()) {
        let info = facts(json!({ "adbreak.name": "pod", "adbreak.position": position }));
        let input = MediaEventInput::new(EventType::AdBreakStart, 0).with_info(info);
        let json = serde_json::to_value(MediaCollection::build(&input)).unwrap();

        prop_assert_eq!(&json["advertisingPodDetails"]["index"], &json!(position));
        prop_assert_eq!(&json["advertisingPodDetails"]["offset"], &json!(-1));
    }

    #[test]
    fn prop_non_numeric_length_is_unknown(length in "[a-z]{0,10}") {
        let info = facts(json!({ "media.length": length }));
        let input = MediaEventInput::new(EventType::SessionStart, 0).with_info(info);
        let json = serde_json::to_value(MediaCollection::build(&input)).unwrap();

        prop_assert_eq!(&json["sessionDetails"]["length"], &json!(-1));
    }
}
