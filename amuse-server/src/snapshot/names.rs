//! Display names merged from primary and alternate names
//!
//! Tracks, albums and artists carry a primary name plus any number of
//! translations, romanizations and aliases. Only the first alternate is shown.

use crate::provider::{AlbumRecord, ArtistRecord, TrackRecord};

/// Separator between artists of one track
pub const ARTIST_SEPARATOR: &str = " / ";

/// `primary（first alternate）`, or `primary` alone when there is none.
///
/// Alternates after the first are ignored.
pub fn format_name<I, S>(primary: &str, alternates: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match alternates.into_iter().next() {
        Some(first) => format!("{}（{}）", primary, first.as_ref()),
        None => primary.to_string(),
    }
}

/// Track title; translated names win over aliases
pub fn track_title(track: &TrackRecord) -> String {
    let alternates = track.trans_names.iter().flatten().chain(&track.alias);
    format_name(&track.name, alternates)
}

/// Album title; translated names, then the single translation list, then aliases
pub fn album_title(album: &AlbumRecord) -> String {
    let alternates = album
        .trans_names
        .iter()
        .flatten()
        .chain(album.trans_name.iter().flatten())
        .chain(&album.alias);
    format_name(&album.name, alternates)
}

/// One artist's name; `tns`, then `trans`, then aliases
pub fn artist_name(artist: &ArtistRecord) -> String {
    // an empty translation counts as absent
    let trans = artist.trans.iter().filter(|t| !t.is_empty());
    let alternates = artist.tns.iter().flatten().chain(trans).chain(&artist.alias);
    format_name(&artist.name, alternates)
}

/// Every artist formatted independently, joined with [`ARTIST_SEPARATOR`]
pub fn artists_line(artists: &[ArtistRecord]) -> String {
    artists
        .iter()
        .map(artist_name)
        .collect::<Vec<_>>()
        .join(ARTIST_SEPARATOR)
}
