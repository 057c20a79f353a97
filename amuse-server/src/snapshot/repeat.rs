//! Repeat mode mapping

use serde::Serialize;

/// Repeat type as the widget protocol spells it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RepeatType {
    None,
    All,
    One,
}

/// Map the player's repeat token.
///
/// `"on"` repeats the current track, `"all"` the whole list; every other
/// token, including a missing one, means no repeat.
pub fn map_repeat(token: Option<&str>) -> RepeatType {
    match token {
        Some("on") => RepeatType::One,
        Some("all") => RepeatType::All,
        _ => RepeatType::None,
    }
}
