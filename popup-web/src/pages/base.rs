use dioxus::prelude::*;
use popup_ui::use_translator;

/// Shown while no song is tracked for the active tab
#[component]
pub fn Base() -> Element {
    let t = use_translator();

    rsx! {
        div { class: "flex flex-col items-center gap-2 px-6 py-5 w-64 text-center",
            p { class: "text-sm text-white", {t.t("infoNothingPlaying")} }
            p { class: "text-xs text-gray-400", {t.t("infoNothingPlayingHint")} }
        }
    }
}
