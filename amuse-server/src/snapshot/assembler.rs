//! Snapshot assembly from raw player state

use amuse_common::human_time::{percent, to_human, whole_seconds};

use super::names::{album_title, artists_line, track_title};
use super::{map_repeat, PlayerSnapshot, QueryResponse, TrackSnapshot};
use crate::provider::PlayerState;

/// Song page URL prefix; the numeric track id is appended
pub const TRACK_URL_BASE: &str = "https://music.163.com/song?id=";

pub fn track_url(id: u64) -> String {
    format!("{}{}", TRACK_URL_BASE, id)
}

/// Build the `{player, track}` snapshot. Pure in `state`.
pub fn assemble(state: &PlayerState) -> QueryResponse {
    let position = whole_seconds(state.progress);
    let duration = whole_seconds(state.current_track_duration);

    let player = PlayerSnapshot {
        has_song: state.enabled,
        is_paused: !state.playing,
        volume_percent: state.volume * 100.0,
        seekbar_current_position: position,
        seekbar_current_position_human: to_human(position),
        state_percent: percent(state.progress, state.current_track_duration),
        like_status: state.is_current_track_liked.clone(),
        repeat_type: map_repeat(state.repeat_mode.as_str()),
    };

    let current = state.active_track();
    let track = TrackSnapshot {
        author: artists_line(&current.artists),
        title: track_title(current),
        album: album_title(&current.album),
        cover: current.album.pic_url.clone(),
        duration,
        duration_human: to_human(duration),
        url: track_url(current.id),
        id: current.id.to_string(),
        is_video: false,
        is_advertisement: false,
        in_library: false,
    };

    QueryResponse { player, track }
}
