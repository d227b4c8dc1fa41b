//! Display types for the popup
//!
//! Values derived from the controller's tab descriptor, recomputed on every
//! refresh. None of them outlive the descriptor they were built from.

use popup_common::{RawSong, SongFlags, TabDescriptor};

/// An asynchronously resolved value.
///
/// `Pending` is distinct from `Ready(None)`: the first means the provider
/// has not answered yet, the second that it answered with nothing.
#[derive(Clone, Debug, PartialEq)]
pub enum Loadable<T> {
    Pending,
    Ready(Option<T>),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Pending
    }
}

impl<T> Loadable<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Loadable::Pending)
    }

    /// The value, if the provider answered with one
    pub fn resolved(&self) -> Option<&T> {
        match self {
            Loadable::Ready(Some(value)) => Some(value),
            _ => None,
        }
    }
}

/// Bridges a resource read, where the outer `None` means still pending.
impl<T> From<Option<Option<T>>> for Loadable<T> {
    fn from(value: Option<Option<T>>) -> Self {
        match value {
            None => Loadable::Pending,
            Some(inner) => Loadable::Ready(inner),
        }
    }
}

/// Read-only view of the tracked song plus the tab that owns it.
#[derive(Clone, Debug, PartialEq)]
pub struct SongSnapshot {
    tab_id: i64,
    song: RawSong,
}

impl SongSnapshot {
    pub fn new(song: RawSong, tab_id: i64) -> Self {
        Self { tab_id, song }
    }

    /// Snapshot of the descriptor's song. Absent when either the descriptor
    /// or its song is absent.
    pub fn from_tab(tab: Option<&TabDescriptor>) -> Option<Self> {
        let tab = tab?;
        let song = tab.song.as_ref()?;
        Some(Self::new(song.clone(), tab.tab_id))
    }

    pub fn tab_id(&self) -> i64 {
        self.tab_id
    }

    pub fn track(&self) -> Option<&str> {
        self.song.track()
    }

    pub fn artist(&self) -> Option<&str> {
        self.song.artist()
    }

    pub fn album(&self) -> Option<&str> {
        self.song.album()
    }

    pub fn album_artist(&self) -> Option<&str> {
        self.song.album_artist()
    }

    pub fn track_art(&self) -> Option<&str> {
        self.song.track_art()
    }

    pub fn flags(&self) -> &SongFlags {
        &self.song.flags
    }

    pub fn is_corrected_by_user(&self) -> bool {
        self.song.flags.is_corrected_by_user
    }

    pub fn is_loved(&self) -> bool {
        self.song.metadata.userloved.unwrap_or(false)
    }

    /// Scrobbles of this track on the linked account. Never negative.
    pub fn play_count(&self) -> u64 {
        self.song
            .metadata
            .user_play_count
            .map(|count| count.max(0) as u64)
            .unwrap_or(0)
    }

    pub fn connector_label(&self) -> &str {
        &self.song.connector.label
    }
}

/// Which top-level view the popup shows
#[derive(Clone, Debug, PartialEq)]
pub enum PopupView {
    Editing,
    NowPlaying(SongSnapshot),
    Placeholder,
}

/// Edit mode masks the song view even when the song has since disappeared.
pub fn select_view(is_editing: bool, song: Option<SongSnapshot>) -> PopupView {
    if is_editing {
        return PopupView::Editing;
    }
    match song {
        Some(song) => PopupView::NowPlaying(song),
        None => PopupView::Placeholder,
    }
}

/// Link into the options page shown in the compact action list
#[derive(Clone, Debug, PartialEq)]
pub struct NavigatorLink {
    pub label_key: String,
    pub href: String,
}

/// Group of options-page links appended to the compact action list
#[derive(Clone, Debug, PartialEq)]
pub struct NavigatorGroup {
    pub label_key: String,
    pub items: Vec<NavigatorLink>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use popup_common::{ConnectorMeta, ControllerMode, SongFields, SongMetadata};

    fn tab_with(song: Option<RawSong>) -> TabDescriptor {
        TabDescriptor {
            tab_id: 42,
            mode: ControllerMode::Playing,
            permanent_mode: ControllerMode::Unknown,
            song,
        }
    }

    fn raw_song() -> RawSong {
        RawSong {
            parsed: SongFields {
                track: Some("Avril 14th".into()),
                artist: Some("Aphex Twin".into()),
                album: Some("Drukqs".into()),
                album_artist: Some("Aphex Twin".into()),
                track_art: Some("https://img.example/drukqs.jpg".into()),
            },
            metadata: SongMetadata {
                userloved: Some(true),
                user_play_count: Some(12),
                track_art_url: None,
            },
            connector: ConnectorMeta {
                label: "Bandcamp".into(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_absent_descriptor_yields_no_song() {
        assert_eq!(SongSnapshot::from_tab(None), None);
    }

    #[test]
    fn test_descriptor_without_song_yields_no_song() {
        assert_eq!(SongSnapshot::from_tab(Some(&tab_with(None))), None);
    }

    #[test]
    fn test_snapshot_copies_fields_verbatim() {
        let tab = tab_with(Some(raw_song()));
        let song = SongSnapshot::from_tab(Some(&tab)).unwrap();

        assert_eq!(song.tab_id(), 42);
        assert_eq!(song.track(), Some("Avril 14th"));
        assert_eq!(song.artist(), Some("Aphex Twin"));
        assert_eq!(song.album(), Some("Drukqs"));
        assert_eq!(song.album_artist(), Some("Aphex Twin"));
        assert_eq!(song.track_art(), Some("https://img.example/drukqs.jpg"));
        assert_eq!(song.connector_label(), "Bandcamp");
        assert!(song.is_loved());
        assert_eq!(song.play_count(), 12);
    }

    #[test]
    fn test_equal_descriptors_give_equal_snapshots() {
        let tab = tab_with(Some(raw_song()));
        assert_eq!(
            SongSnapshot::from_tab(Some(&tab)),
            SongSnapshot::from_tab(Some(&tab.clone()))
        );
    }

    #[test]
    fn test_play_count_defaults_and_clamps() {
        let mut raw = raw_song();
        raw.metadata.user_play_count = None;
        assert_eq!(SongSnapshot::new(raw.clone(), 1).play_count(), 0);

        raw.metadata.user_play_count = Some(-3);
        assert_eq!(SongSnapshot::new(raw, 1).play_count(), 0);
    }

    #[test]
    fn test_missing_love_flag_is_not_loved() {
        let mut raw = raw_song();
        raw.metadata.userloved = None;
        assert!(!SongSnapshot::new(raw, 1).is_loved());
    }

    #[test]
    fn test_loadable_from_resource_read() {
        assert!(Loadable::<i32>::from(None).is_pending());
        assert_eq!(Loadable::<i32>::from(Some(None)), Loadable::Ready(None));
        assert_eq!(Loadable::from(Some(Some(3))).resolved(), Some(&3));
        assert_eq!(Loadable::<i32>::Pending.resolved(), None);
    }

    #[test]
    fn test_edit_mode_masks_song_view() {
        let song = SongSnapshot::new(raw_song(), 1);
        assert_eq!(select_view(true, Some(song.clone())), PopupView::Editing);
        assert_eq!(select_view(true, None), PopupView::Editing);
        assert_eq!(
            select_view(false, Some(song.clone())),
            PopupView::NowPlaying(song)
        );
    }

    #[test]
    fn test_leaving_edit_without_song_shows_placeholder() {
        assert_eq!(select_view(false, None), PopupView::Placeholder);
    }
}
