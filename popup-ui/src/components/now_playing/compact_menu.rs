//! Compact action list for platforms without hover or context menus

use crate::actions::{compact_entries, ActionGlyph, CompactEntry};
use crate::components::{
    BanIcon, ChromelessButton, EllipsisIcon, HeartIcon, MenuDivider, MenuItem, MenuLink,
    PencilIcon, RotateCcwIcon,
};
use crate::dispatch::Intent;
use crate::display_types::{Loadable, NavigatorGroup, SongSnapshot};
use crate::i18n::use_translator;
use dioxus::prelude::*;
use popup_common::ControllerMode;

#[component]
pub fn CompactActionMenu(
    song: SongSnapshot,
    mode: Option<ControllerMode>,
    navigator: ReadSignal<Loadable<NavigatorGroup>>,
    on_intent: EventHandler<Intent>,
) -> Element {
    let mut is_open = use_signal(|| false);
    let entries = compact_entries(mode, &song, &navigator.read());

    rsx! {
        div { class: "relative flex justify-end px-2 pt-2",
            ChromelessButton {
                class: Some("w-8 h-8 rounded-md flex items-center justify-center text-gray-300 hover:bg-gray-700".to_string()),
                aria_label: Some("Actions".to_string()),
                aria_pressed: Some(is_open()),
                onclick: move |_| is_open.set(!is_open()),
                EllipsisIcon {}
            }
            if is_open() {
                div { class: "absolute right-2 top-11 z-10 min-w-48 p-1 bg-gray-800 border border-gray-700 rounded-lg shadow-lg",
                    for (index, entry) in entries.into_iter().enumerate() {
                        CompactEntryView {
                            key: "{index}",
                            entry,
                            on_select: move |intent: Intent| {
                                is_open.set(false);
                                on_intent.call(intent);
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CompactEntryView(entry: CompactEntry, on_select: EventHandler<Intent>) -> Element {
    let t = use_translator();

    match entry {
        CompactEntry::Action {
            intent,
            label_key,
            enabled,
        } => {
            let label = t.t(label_key);
            let icon = match ActionGlyph::for_intent(intent) {
                ActionGlyph::Pencil => rsx! { PencilIcon {} },
                ActionGlyph::RotateCcw => rsx! { RotateCcwIcon {} },
                ActionGlyph::Ban => rsx! { BanIcon {} },
                ActionGlyph::Heart => rsx! { HeartIcon {} },
            };
            rsx! {
                MenuItem {
                    disabled: !enabled,
                    onclick: move |_| on_select.call(intent),
                    {icon}
                    "{label}"
                }
            }
        }
        CompactEntry::Navigation(group) => {
            let heading = t.t(&group.label_key);
            let links: Vec<(String, String)> = group
                .items
                .iter()
                .map(|link| (t.t(&link.label_key), link.href.clone()))
                .collect();
            rsx! {
                MenuDivider {}
                div { class: "px-3 pt-1 pb-0.5 text-xs text-gray-500", "{heading}" }
                for (label, href) in links {
                    MenuLink { key: "{href}", href: href.clone(), "{label}" }
                }
            }
        }
    }
}
