//! Widget-facing snapshot of the player
//!
//! Everything here is recomputed from a fresh [`PlayerState`] on every
//! request; nothing is cached between reads.
//!
//! [`PlayerState`]: crate::provider::PlayerState

use amuse_common::wire::js_number;
use serde::Serialize;
use serde_json::Value;

mod assembler;
pub mod names;
pub mod repeat;

pub use assembler::{assemble, track_url, TRACK_URL_BASE};
pub use repeat::{map_repeat, RepeatType};

/// Body of `GET /query`
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub player: PlayerSnapshot,
    pub track: TrackSnapshot,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub has_song: bool,
    pub is_paused: bool,
    #[serde(serialize_with = "js_number")]
    pub volume_percent: f64,
    pub seekbar_current_position: u64,
    pub seekbar_current_position_human: String,
    /// `null` on the wire when the track length is zero
    #[serde(serialize_with = "js_number")]
    pub state_percent: f64,
    /// Copied from the player without validation
    pub like_status: Value,
    pub repeat_type: RepeatType,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSnapshot {
    pub author: String,
    pub title: String,
    pub album: String,
    pub cover: String,
    pub duration: u64,
    pub duration_human: String,
    pub url: String,
    pub id: String,
    // The player exposes none of these
    pub is_video: bool,
    pub is_advertisement: bool,
    pub in_library: bool,
}
