use dioxus::prelude::*;
use popup_ui::{use_translator, ChromelessButton, SongSnapshot};

/// Label key and current value of each editable field, empty when unknown
fn edit_fields(song: Option<&SongSnapshot>) -> [(&'static str, String); 4] {
    let value = |get: fn(&SongSnapshot) -> Option<&str>| {
        song.and_then(get).unwrap_or_default().to_string()
    };
    [
        ("infoTrackPlaceholder", value(SongSnapshot::track)),
        ("infoArtistPlaceholder", value(SongSnapshot::artist)),
        ("infoAlbumPlaceholder", value(SongSnapshot::album)),
        ("infoAlbumArtistPlaceholder", value(SongSnapshot::album_artist)),
    ]
}

/// Edit sub-view shell. Shows what would be corrected and leads back to
/// the now-playing view.
#[component]
pub fn EditShell(song: ReadSignal<Option<SongSnapshot>>, mut is_editing: Signal<bool>) -> Element {
    let t = use_translator();
    let fields = edit_fields(song.read().as_ref());

    rsx! {
        div { class: "flex flex-col gap-2 p-3 w-72",
            h2 { class: "text-sm font-semibold text-white", {t.t("infoEditTitle")} }
            for (label_key, value) in fields {
                label { key: "{label_key}", class: "flex flex-col gap-0.5 text-xs text-gray-400",
                    {t.t(label_key)}
                    input {
                        class: "px-2 py-1 rounded-md bg-gray-800 border border-gray-700 text-sm text-white",
                        r#type: "text",
                        readonly: true,
                        value,
                    }
                }
            }
            ChromelessButton {
                class: Some("self-end px-3 py-1 rounded-md text-sm text-gray-300 hover:bg-gray-700 hover:text-white".to_string()),
                onclick: move |_| is_editing.set(false),
                {t.t("buttonBack")}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use popup_common::RawSong;

    #[test]
    fn test_fields_follow_resolved_song() {
        let mut raw = RawSong::default();
        raw.parsed.track = Some("Teardrop".into());
        raw.processed.artist = Some("Massive Attack".into());
        let song = SongSnapshot::new(raw, 3);

        let fields = edit_fields(Some(&song));
        assert_eq!(fields[0], ("infoTrackPlaceholder", "Teardrop".to_string()));
        assert_eq!(fields[1], ("infoArtistPlaceholder", "Massive Attack".to_string()));
        assert_eq!(fields[2].1, "");
    }

    #[test]
    fn test_fields_empty_without_song() {
        assert!(edit_fields(None).iter().all(|(_, value)| value.is_empty()));
    }
}
