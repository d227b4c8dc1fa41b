//! Inline control row for platforms with hover
//!
//! Each button forwards an [`Intent`]; enablement and decoration come from
//! [`Affordances`].

use crate::components::{BanIcon, ControlButton, HeartCrackIcon, HeartIcon, PencilIcon, RotateCcwIcon};
use crate::dispatch::Intent;
use crate::i18n::use_translator;
use crate::lifecycle::{love_label, Affordances};
use dioxus::prelude::*;

#[component]
pub fn TrackControls(
    affordances: Affordances,
    is_loved: bool,
    on_intent: EventHandler<Intent>,
) -> Element {
    let t = use_translator();

    rsx! {
        div { class: "flex items-center gap-1 mt-1",
            ControlButton {
                title: t.t(affordances.edit_label(false)),
                disabled: !affordances.can_mutate,
                onclick: move |_| on_intent.call(Intent::Edit),
                PencilIcon {}
            }
            if affordances.show_revert {
                ControlButton {
                    title: t.t(affordances.revert_label(false)),
                    disabled: !affordances.can_mutate,
                    onclick: move |_| on_intent.call(Intent::Revert),
                    RotateCcwIcon {}
                }
            }
            ControlButton {
                title: t.t(affordances.skip_label(false)),
                disabled: !affordances.can_mutate,
                active: affordances.skip_active,
                muted: affordances.skip_muted,
                onclick: move |_| on_intent.call(Intent::Skip),
                BanIcon {}
            }
            LoveButton { is_loved, on_intent }
        }
    }
}

/// Love toggle. Never disabled; a loved track shows a broken heart on hover.
#[component]
pub fn LoveButton(is_loved: bool, on_intent: EventHandler<Intent>) -> Element {
    let t = use_translator();

    rsx! {
        ControlButton {
            title: t.t(love_label(is_loved)),
            active: is_loved,
            onclick: move |_| on_intent.call(Intent::ToggleLove),
            span { class: "group-hover:hidden",
                HeartIcon { filled: is_loved }
            }
            span { class: "hidden group-hover:inline",
                if is_loved {
                    HeartCrackIcon {}
                } else {
                    HeartIcon { filled: true }
                }
            }
        }
    }
}
