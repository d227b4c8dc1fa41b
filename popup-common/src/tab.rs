use crate::ControllerMode;
use serde::{Deserialize, Serialize};

/// Snapshot of one browser tab's tracked playback, as reported by the
/// background controller.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabDescriptor {
    pub tab_id: i64,
    #[serde(default)]
    pub mode: ControllerMode,
    #[serde(default)]
    pub permanent_mode: ControllerMode,
    #[serde(default)]
    pub song: Option<RawSong>,
}

/// A song exactly as the controller serialises it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSong {
    /// Fields scraped from the page
    pub parsed: SongFields,
    /// Fields after corrections and lookups
    pub processed: SongFields,
    /// Fields before regex edits were applied
    pub no_regex: SongFields,
    pub flags: SongFlags,
    pub metadata: SongMetadata,
    pub connector: ConnectorMeta,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SongFields {
    pub track: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub album_artist: Option<String>,
    pub track_art: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SongFlags {
    pub is_corrected_by_user: bool,
    pub is_skipped: bool,
    pub is_scrobbled: bool,
    pub is_valid: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SongMetadata {
    pub userloved: Option<bool>,
    pub user_play_count: Option<i64>,
    pub track_art_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorMeta {
    pub label: String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl RawSong {
    /// First non-empty value of a field, preferring processed over
    /// regex-free over parsed.
    fn resolve(&self, field: impl Fn(&SongFields) -> &Option<String>) -> Option<&str> {
        non_empty(field(&self.processed))
            .or_else(|| non_empty(field(&self.no_regex)))
            .or_else(|| non_empty(field(&self.parsed)))
    }

    pub fn track(&self) -> Option<&str> {
        self.resolve(|f| &f.track)
    }

    pub fn artist(&self) -> Option<&str> {
        self.resolve(|f| &f.artist)
    }

    pub fn album(&self) -> Option<&str> {
        self.resolve(|f| &f.album)
    }

    pub fn album_artist(&self) -> Option<&str> {
        self.resolve(|f| &f.album_artist)
    }

    /// Cover art scraped from the page, else the one found by lookup.
    pub fn track_art(&self) -> Option<&str> {
        non_empty(&self.parsed.track_art).or_else(|| non_empty(&self.metadata.track_art_url))
    }
}
