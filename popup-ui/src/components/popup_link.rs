//! Anchor that opens in a new tab, leaving the popup in place

use dioxus::prelude::*;

#[component]
pub fn PopupLink(
    href: String,
    title: String,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        a {
            class: "text-inherit no-underline hover:text-white transition-colors truncate {extra}",
            href,
            title,
            target: "_blank",
            rel: "noopener noreferrer",
            {children}
        }
    }
}
