//! Track links, play details and (per platform) the love button or control row

use super::controls::{LoveButton, TrackControls};
use crate::components::{PopupLink, ScrobblesIcon};
use crate::config::use_popup_config;
use crate::dispatch::Intent;
use crate::display_types::SongSnapshot;
use crate::i18n::use_translator;
use crate::lifecycle::Affordances;
use crate::links::{album_url, artist_url, track_library_url, track_url};
use dioxus::prelude::*;
use popup_common::{ControllerMode, Platform};

#[component]
pub fn SongDetails(
    song: SongSnapshot,
    mode: Option<ControllerMode>,
    session_name: Option<String>,
    platform: Platform,
    on_intent: EventHandler<Intent>,
) -> Element {
    let is_loved = song.is_loved();
    let affordances = Affordances::new(mode, song.flags());

    rsx! {
        div { class: "flex flex-col min-w-0 gap-1",
            TrackData { song: song.clone() }
            if platform.is_restricted() {
                div { class: "flex",
                    LoveButton { is_loved, on_intent }
                }
            }
            PlayDetails { song, session_name }
            if !platform.is_restricted() {
                TrackControls { affordances, is_loved, on_intent }
            }
        }
    }
}

/// Track, artist, album and album artist, each linking to its scrobbler page
#[component]
fn TrackData(song: SongSnapshot) -> Element {
    let t = use_translator();
    let track = song.track().unwrap_or_default().to_string();
    let artist = song.artist().unwrap_or_default().to_string();

    let album = song.album().map(|album| {
        let owner = song.album_artist().or(song.artist());
        (album.to_string(), album_url(owner, Some(album)))
    });
    let album_artist = song
        .album_artist()
        .map(|name| (name.to_string(), artist_url(Some(name))));

    rsx! {
        PopupLink {
            class: Some("font-semibold text-white".to_string()),
            href: track_url(song.artist(), song.track()),
            title: t.t_with("infoViewTrackPage", track.clone()),
            "{track}"
        }
        PopupLink {
            href: artist_url(song.artist()),
            title: t.t_with("infoViewArtistPage", artist.clone()),
            "{artist}"
        }
        if let Some((ref album, ref href)) = album {
            PopupLink {
                class: Some("text-sm".to_string()),
                href: href.clone(),
                title: t.t_with("infoViewAlbumPage", album.clone()),
                "{album}"
            }
        }
        if let Some((ref name, ref href)) = album_artist {
            PopupLink {
                class: Some("text-sm text-gray-400".to_string()),
                href: href.clone(),
                title: t.t_with("infoViewArtistPage", name.clone()),
                "{name}"
            }
        }
    }
}

/// Play-count link and the label of the connector that detected the song
#[component]
fn PlayDetails(song: SongSnapshot, session_name: Option<String>) -> Element {
    let t = use_translator();
    let config = use_popup_config();
    let play_count = song.play_count();
    let href = track_library_url(session_name.as_deref(), song.artist(), song.track());
    let connector = song.connector_label().to_string();

    rsx! {
        div { class: "flex items-center gap-3 text-xs text-gray-400",
            PopupLink {
                class: Some("flex items-center gap-1".to_string()),
                href,
                title: t.t_with("infoYourScrobbles", play_count.to_string()),
                ScrobblesIcon { class: "w-3 h-3" }
                span { "{play_count}" }
                span { class: "sr-only", "{config.scrobbler_label}" }
            }
            if !connector.is_empty() {
                span { class: "truncate", "{connector}" }
            }
        }
    }
}
