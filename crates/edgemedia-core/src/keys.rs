//! Key constants shared with the session tracker and the collection service
//!
//! These strings are an integration contract: the tracker writes facts under
//! the fact-map keys, and the collection service parses the output field names
//! verbatim. Do not rename them.

/// Media info fact keys (session start)
pub mod media {
    pub const ID: &str = "media.id";
    pub const NAME: &str = "media.name";
    pub const LENGTH: &str = "media.length";
    pub const MEDIA_TYPE: &str = "media.type";
    pub const STREAM_TYPE: &str = "media.streamtype";
    pub const RESUMED: &str = "media.resumed";
}

/// Ad info fact keys
pub mod ad {
    pub const ID: &str = "ad.id";
    pub const NAME: &str = "ad.name";
    pub const LENGTH: &str = "ad.length";
    pub const POSITION: &str = "ad.position";
}

/// Ad break info fact keys
pub mod ad_break {
    pub const NAME: &str = "adbreak.name";
    pub const POSITION: &str = "adbreak.position";
    pub const START_TIME: &str = "adbreak.starttime";
}

/// Chapter info fact keys
pub mod chapter {
    pub const NAME: &str = "chapter.name";
    pub const POSITION: &str = "chapter.position";
    pub const START_TIME: &str = "chapter.starttime";
    pub const LENGTH: &str = "chapter.length";
}

/// Error info fact keys
pub mod error {
    pub const ID: &str = "error.id";
    pub const SOURCE: &str = "error.source";
}

/// Player state fact keys
pub mod state {
    pub const NAME: &str = "state.name";
}

/// QoE info fact keys
pub mod qoe {
    pub const BITRATE: &str = "qoe.bitrate";
    pub const DROPPED_FRAMES: &str = "qoe.droppedframes";
    pub const FPS: &str = "qoe.fps";
    pub const STARTUP_TIME: &str = "qoe.startuptime";
}

/// Standard video metadata keys
pub mod video_metadata {
    pub const AD_LOAD: &str = "a.media.adLoad";
    pub const ASSET_ID: &str = "a.media.asset";
    pub const AUTHORIZED: &str = "a.media.pass.auth";
    pub const DAY_PART: &str = "a.media.dayPart";
    pub const EPISODE: &str = "a.media.episode";
    pub const FEED: &str = "a.media.feed";
    pub const FIRST_AIR_DATE: &str = "a.media.airDate";
    pub const FIRST_DIGITAL_DATE: &str = "a.media.digitalDate";
    pub const GENRE: &str = "a.media.genre";
    pub const MVPD: &str = "a.media.pass.mvpd";
    pub const NETWORK: &str = "a.media.network";
    pub const ORIGINATOR: &str = "a.media.originator";
    pub const RATING: &str = "a.media.rating";
    pub const SEASON: &str = "a.media.season";
    pub const SHOW: &str = "a.media.show";
    pub const SHOW_TYPE: &str = "a.media.type";
    pub const STREAM_FORMAT: &str = "a.media.format";
}

/// Standard audio metadata keys
pub mod audio_metadata {
    pub const ALBUM: &str = "a.media.album";
    pub const ARTIST: &str = "a.media.artist";
    pub const AUTHOR: &str = "a.media.author";
    pub const LABEL: &str = "a.media.label";
    pub const PUBLISHER: &str = "a.media.publisher";
    pub const STATION: &str = "a.media.station";
}

/// Standard ad metadata keys
pub mod ad_metadata {
    pub const ADVERTISER: &str = "a.media.ad.advertiser";
    pub const CAMPAIGN_ID: &str = "a.media.ad.campaign";
    pub const CREATIVE_ID: &str = "a.media.ad.creative";
    pub const CREATIVE_URL: &str = "a.media.ad.creativeURL";
    pub const PLACEMENT_ID: &str = "a.media.ad.placement";
    pub const SITE_ID: &str = "a.media.ad.site";
}

/// Configuration keys read into [`crate::MediaState`]
pub mod config {
    pub const CHANNEL: &str = "edgemedia.channel";
    pub const PLAYER_NAME: &str = "edgemedia.playerName";
    pub const APP_VERSION: &str = "edgemedia.appVersion";
}

/// Tracker keys used by the session-created correlation event
pub mod tracker {
    /// Tracker-local session id
    pub const SESSION_ID: &str = "sessionid";
    /// Session id issued by the media collection service
    pub const BACKEND_SESSION_ID: &str = "mediaservice.sessionid";
}

/// Event name/type/source constants
pub mod event {
    pub const EDGE_EVENT_NAME_PREFIX: &str = "MediaEdge event - ";
    pub const EDGE_TYPE: &str = "com.adobe.eventType.edge";
    pub const REQUEST_CONTENT_SOURCE: &str = "com.adobe.eventSource.requestContent";

    pub const SESSION_CREATED_NAME: &str = "Media::SessionCreated";
    pub const EDGE_MEDIA_TYPE: &str = "com.adobe.eventtype.edgemedia";
    pub const SESSION_CREATED_SOURCE: &str = "com.adobe.eventsource.edgemedia.sessioncreated";

    /// Request path prefix, followed by the event type raw value
    pub const REQUEST_PATH_PREFIX: &str = "/va/v1/";
}
