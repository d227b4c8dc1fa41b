pub mod api;
pub mod browser;
pub mod bus;
pub mod pages;

use bus::RuntimeBus;
use dioxus::prelude::*;
use pages::Popup;
use popup_common::Platform;
use popup_ui::{CommandDispatcher, PopupConfig, Translator};
use tracing::warn;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Bundled with the extension, not with the popup assets
const DEFAULT_COVER_PATH: &str = "img/cover_art_default.png";

fn resolve_config() -> PopupConfig {
    let platform = match browser::navigator_traits() {
        Ok((user_agent, max_touch_points)) => Platform::detect(&user_agent, max_touch_points),
        Err(e) => {
            warn!("Failed to read navigator, assuming a standard platform: {}", e);
            Platform::Standard
        }
    };
    let default_cover_url = browser::get_url(DEFAULT_COVER_PATH).unwrap_or_else(|e| {
        warn!("Failed to resolve default cover: {}", e);
        DEFAULT_COVER_PATH.to_string()
    });

    PopupConfig {
        platform,
        default_cover_url,
        ..Default::default()
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(resolve_config);
    use_context_provider(|| Translator::new(browser::get_message));
    use_context_provider(|| CommandDispatcher::new(RuntimeBus));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Popup {}
    }
}
