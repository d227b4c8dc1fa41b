//! Last.fm page URLs for the song links
//!
//! Absent segments encode as empty strings so a link is always produced.

use urlencoding::encode;

const MUSIC_BASE: &str = "https://www.last.fm/music";
const USER_BASE: &str = "https://www.last.fm/user";

fn segment(value: Option<&str>) -> String {
    encode(value.unwrap_or_default()).into_owned()
}

pub fn artist_url(artist: Option<&str>) -> String {
    format!("{MUSIC_BASE}/{}", segment(artist))
}

pub fn track_url(artist: Option<&str>, track: Option<&str>) -> String {
    format!("{MUSIC_BASE}/{}/_/{}", segment(artist), segment(track))
}

pub fn album_url(artist: Option<&str>, album: Option<&str>) -> String {
    format!("{MUSIC_BASE}/{}/{}", segment(artist), segment(album))
}

/// The user's scrobble history for one track
pub fn track_library_url(
    session_name: Option<&str>,
    artist: Option<&str>,
    track: Option<&str>,
) -> String {
    format!(
        "{USER_BASE}/{}/library/music/{}/_/{}",
        segment(session_name),
        segment(artist),
        segment(track)
    )
}
