//! Popup buttons

use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by ControlButton and menu items.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type: "button",
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_pressed: aria_pressed.map(|pressed| if pressed { "true" } else { "false" }),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Square icon button in the control row
#[component]
pub fn ControlButton(
    title: String,
    #[props(default)] disabled: bool,
    /// Toggled decoration (skipped, loved)
    #[props(default)]
    active: bool,
    /// Faded unless hovered
    #[props(default)]
    muted: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = "group relative w-8 h-8 rounded-md flex items-center justify-center transition-colors";
    let state = if disabled {
        "text-gray-500 cursor-not-allowed"
    } else {
        "text-gray-300 hover:bg-gray-700 hover:text-white"
    };
    let active_class = if active { "text-red-400" } else { "" };
    let muted_class = if muted && !active { "opacity-40" } else { "" };

    rsx! {
        ChromelessButton {
            disabled,
            class: Some(format!("{base} {state} {active_class} {muted_class}")),
            title: Some(title.clone()),
            aria_label: Some(title),
            aria_pressed: Some(active),
            onclick,
            {children}
        }
    }
}
