//! Raw player state as read from the music player
//!
//! Field names follow the player's JSON. Where the player keeps a value in an
//! underscored own field (`_playing`, `_currentTrack`, ...) that name is
//! accepted too. `currentTrackDuration` and `isCurrentTrackLiked` are computed
//! by the player and have no underscored form, so a raw dump of the player
//! object must carry both under their public names.

use serde::Deserialize;
use serde_json::Value;

/// One instantaneous read of the player
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerState {
    /// A track is loaded
    #[serde(alias = "_enabled")]
    pub enabled: bool,
    /// Audio is actively playing
    #[serde(alias = "_playing")]
    pub playing: bool,
    /// Volume fraction, 0..1
    #[serde(alias = "_volume")]
    pub volume: f64,
    /// Playback position in seconds
    #[serde(alias = "_progress")]
    pub progress: f64,
    /// Length of the current track in seconds
    pub current_track_duration: f64,
    /// Passed through to clients untouched, whatever its shape
    pub is_current_track_liked: Value,
    /// `"on"`, `"all"`, `"off"`, or anything else
    #[serde(alias = "_repeatMode")]
    pub repeat_mode: Value,
    /// Personal radio mode is active
    #[serde(rename = "isPersonalFM", alias = "_isPersonalFM")]
    pub is_personal_fm: bool,
    #[serde(alias = "_currentTrack")]
    pub current_track: TrackRecord,
    #[serde(rename = "personalFMTrack", alias = "_personalFMTrack")]
    pub personal_fm_track: TrackRecord,
}

impl PlayerState {
    /// The record that describes what is playing right now.
    ///
    /// Personal radio plays from its own stream; the regular track record is
    /// stale while it is active.
    pub fn active_track(&self) -> &TrackRecord {
        if self.is_personal_fm {
            &self.personal_fm_track
        } else {
            &self.current_track
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackRecord {
    pub id: u64,
    pub name: String,
    pub alias: Vec<String>,
    pub trans_names: Option<Vec<String>>,
    pub album: AlbumRecord,
    pub artists: Vec<ArtistRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlbumRecord {
    pub id: u64,
    pub name: String,
    pub pic_url: String,
    pub alias: Vec<String>,
    pub trans_names: Option<Vec<String>>,
    pub trans_name: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArtistRecord {
    pub id: u64,
    pub name: String,
    pub alias: Vec<String>,
    /// Translated names
    pub tns: Option<Vec<String>>,
    /// Single translation or romanization
    pub trans: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_public_names() {
        let state: PlayerState = serde_json::from_value(json!({
            "enabled": true,
            "playing": false,
            "volume": 0.25,
            "progress": 12,
            "currentTrackDuration": 200,
            "isCurrentTrackLiked": "DISLIKE",
            "repeatMode": "on",
            "isPersonalFM": true,
            "currentTrack": { "id": 1, "name": "Queued" },
            "personalFMTrack": { "id": 2, "name": "Radio" }
        }))
        .unwrap();

        assert!(state.enabled);
        assert!(!state.playing);
        assert_eq!(state.volume, 0.25);
        assert_eq!(state.progress, 12.0);
        assert_eq!(state.current_track_duration, 200.0);
        assert_eq!(state.is_current_track_liked, json!("DISLIKE"));
        assert_eq!(state.repeat_mode, json!("on"));
        assert!(state.is_personal_fm);
        assert_eq!(state.current_track.name, "Queued");
        assert_eq!(state.personal_fm_track.name, "Radio");
    }

    #[test]
    fn test_decode_underscored_names() {
        let state: PlayerState = serde_json::from_value(json!({
            "_enabled": true,
            "_playing": true,
            "_volume": 1,
            "_progress": 3.5,
            "currentTrackDuration": 10,
            "_repeatMode": "all",
            "_isPersonalFM": false,
            "_currentTrack": { "id": 7, "name": "Seven" },
            "_personalFMTrack": { "id": 8 }
        }))
        .unwrap();

        assert!(state.enabled);
        assert!(state.playing);
        assert_eq!(state.volume, 1.0);
        assert_eq!(state.progress, 3.5);
        assert_eq!(state.current_track_duration, 10.0);
        assert_eq!(state.repeat_mode, json!("all"));
        assert_eq!(state.current_track.id, 7);
        assert_eq!(state.personal_fm_track.id, 8);
    }

    #[test]
    fn test_computed_fields_have_no_underscored_form() {
        let state: PlayerState = serde_json::from_value(json!({
            "_currentTrackDuration": 240,
            "_isCurrentTrackLiked": "LIKE"
        }))
        .unwrap();

        assert_eq!(state.current_track_duration, 0.0);
        assert!(state.is_current_track_liked.is_null());
    }

    #[test]
    fn test_missing_fields_default() {
        let state: PlayerState = serde_json::from_value(json!({})).unwrap();

        assert!(!state.enabled);
        assert!(state.is_current_track_liked.is_null());
        assert!(state.repeat_mode.is_null());
        assert_eq!(state.current_track, TrackRecord::default());
        assert!(state.current_track.trans_names.is_none());
        assert!(state.current_track.album.trans_name.is_none());
    }

    #[test]
    fn test_decode_track_record() {
        let track: TrackRecord = serde_json::from_value(json!({
            "id": 123,
            "name": "Song",
            "transNames": ["Translated"],
            "alias": ["Alias"],
            "artists": [{ "name": "Art", "tns": [], "trans": "ArtTrans", "alias": [] }],
            "album": {
                "name": "Alb",
                "picUrl": "http://x/y.jpg",
                "alias": [],
                "transName": ["AlbTrans"]
            }
        }))
        .unwrap();

        assert_eq!(track.id, 123);
        assert_eq!(track.trans_names, Some(vec!["Translated".to_string()]));
        assert_eq!(track.alias, vec!["Alias".to_string()]);
        assert_eq!(track.artists[0].trans.as_deref(), Some("ArtTrans"));
        assert_eq!(track.artists[0].tns, Some(vec![]));
        assert_eq!(track.album.pic_url, "http://x/y.jpg");
        assert_eq!(track.album.trans_name, Some(vec!["AlbTrans".to_string()]));
    }

    #[test]
    fn test_active_track_follows_radio_flag() {
        let mut state = PlayerState::default();
        state.current_track.name = "Queued".to_string();
        state.personal_fm_track.name = "Radio".to_string();

        assert_eq!(state.active_track().name, "Queued");
        state.is_personal_fm = true;
        assert_eq!(state.active_track().name, "Radio");
    }
}
