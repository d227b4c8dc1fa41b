//! Menu components for the compact action list
//!
//! - `MenuItem` - individual menu item with hover states
//! - `MenuLink` - menu item that opens a page in a new tab
//! - `MenuDivider` - separator between groups

use crate::components::ChromelessButton;
use dioxus::prelude::*;

const ITEM_BASE: &str =
    "w-full text-left px-3 py-2 text-sm rounded-md transition-colors flex items-center gap-2";

/// Individual menu item
#[component]
pub fn MenuItem(
    /// Whether the item is disabled
    #[props(default)]
    disabled: bool,
    /// Click handler
    onclick: EventHandler<MouseEvent>,
    /// Item content (text and optional icon)
    children: Element,
) -> Element {
    let state = if disabled {
        "text-gray-500 cursor-not-allowed"
    } else {
        "text-gray-300 hover:bg-gray-700 hover:text-white"
    };

    rsx! {
        ChromelessButton {
            disabled,
            class: Some(format!("{ITEM_BASE} {state}")),
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                onclick.call(e);
            },
            {children}
        }
    }
}

#[component]
pub fn MenuLink(href: String, children: Element) -> Element {
    rsx! {
        a {
            class: "{ITEM_BASE} text-gray-300 hover:bg-gray-700 hover:text-white",
            href,
            target: "_blank",
            rel: "noopener noreferrer",
            {children}
        }
    }
}

/// Menu divider line
#[component]
pub fn MenuDivider() -> Element {
    rsx! {
        div { class: "my-1 border-t border-gray-700" }
    }
}
