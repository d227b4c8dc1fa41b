//! Top-level now-playing view
//!
//! Owns the song derivation, the viewport reconciler and the mapping from
//! user intents to dispatcher calls. Child views are pure and props-based.

use super::compact_menu::CompactActionMenu;
use super::song_details::SongDetails;
use crate::components::PopupLink;
use crate::config::use_popup_config;
use crate::dispatch::{CommandDispatcher, Intent};
use crate::display_types::{select_view, Loadable, NavigatorGroup, PopupView, SongSnapshot};
use crate::i18n::use_translator;
use crate::wasm_utils::DomViewport;
use dioxus::prelude::*;
use popup_common::TabDescriptor;

/// Now-playing popup view.
///
/// Shows `edit_view` while editing, the song while one is tracked, and
/// `placeholder` otherwise. The tab source is expected to resolve through
/// [`CommandDispatcher::refreshed`].
#[component]
pub fn NowPlayingView(
    /// Active tab as reported by the controller
    tab: ReadSignal<Loadable<TabDescriptor>>,
    /// Options-page links for the compact action list
    navigator: ReadSignal<Loadable<NavigatorGroup>>,
    /// Display name of the linked scrobbler account
    session_name: ReadSignal<Option<String>>,
    dispatcher: CommandDispatcher,
    /// Edit flag, owned by the caller so the edit sub-view can clear it
    mut is_editing: Signal<bool>,
    edit_view: Element,
    placeholder: Element,
) -> Element {
    let config = use_popup_config();
    let t = use_translator();

    // Equal descriptors produce equal snapshots, so the memo only notifies
    // subscribers when the song actually changed.
    let song = use_memo(move || SongSnapshot::from_tab(tab.read().resolved()));

    let viewport = use_hook(DomViewport::shared);
    use_effect({
        let viewport = viewport.clone();
        move || {
            let editing = is_editing();
            viewport.borrow_mut().set_editing(editing);
        }
    });
    use_drop({
        let viewport = viewport.clone();
        move || viewport.borrow_mut().teardown()
    });

    let on_intent = EventHandler::new({
        let dispatcher = dispatcher.clone();
        move |intent: Intent| {
            if intent == Intent::Edit {
                is_editing.set(true);
                return;
            }
            let current_tab = tab.read();
            let current_song = song.read();
            dispatcher.dispatch(intent, current_tab.resolved(), current_song.as_ref());
        }
    });

    let song = match select_view(is_editing(), song()) {
        PopupView::Editing => return edit_view,
        PopupView::Placeholder => return placeholder,
        PopupView::NowPlaying(song) => song,
    };

    let mode = tab.read().resolved().map(|tab| tab.mode);
    let cover_url = config.cover_url(song.track_art());

    rsx! {
        if config.platform.is_restricted() {
            CompactActionMenu {
                song: song.clone(),
                mode,
                navigator,
                on_intent,
            }
        }
        div {
            class: "flex gap-3 p-3 w-max max-w-[36rem] text-gray-300",
            onmounted: move |evt: MountedEvent| {
                let Some(element) = evt.data().downcast::<web_sys_x::Element>().cloned() else {
                    return;
                };
                let mut viewport = viewport.borrow_mut();
                viewport.host_mut().set_target(element);
                viewport.mount();
            },
            PopupLink {
                class: Some("flex-shrink-0".to_string()),
                href: cover_url.clone(),
                title: t.t("infoOpenAlbumArt"),
                img {
                    class: "w-24 h-24 rounded-xl object-cover bg-gray-700",
                    src: "{cover_url}",
                    alt: "",
                }
            }
            SongDetails {
                song,
                mode,
                session_name: session_name(),
                platform: config.platform,
                on_intent,
            }
        }
    }
}
