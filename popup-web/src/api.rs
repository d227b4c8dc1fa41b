//! Async lookups backing the popup's resources
//!
//! Failures are logged and resolve to `None`; the views only ever see
//! present or absent values.

use crate::browser::{self, BrowserResult};
use popup_common::{Platform, PopupRequest, SessionData, TabDescriptor};
use popup_ui::{NavigatorGroup, NavigatorLink};
use tracing::warn;

/// Storage key of the Last.fm scrobbler session
const SESSION_STORAGE_KEY: &str = "LastFM";

const OPTIONS_PAGE: &str = "src/ui/options/index.html";

/// Options-page sections listed in the compact action list
const NAVIGATOR_SECTIONS: &[(&str, &str)] = &[
    ("optionsOptions", "options"),
    ("optionsAccounts", "accounts"),
    ("optionsEditedTracks", "edited-tracks"),
    ("faqTitle", "faq"),
];

/// Ask the background controller for the active tab's descriptor
pub async fn fetch_active_tab() -> Option<TabDescriptor> {
    match browser::send_message::<_, Option<TabDescriptor>>(&PopupRequest::GetActiveTab).await {
        Ok(tab) => tab,
        Err(e) => {
            warn!("Failed to fetch active tab: {}", e);
            None
        }
    }
}

pub async fn fetch_session() -> Option<SessionData> {
    match browser::storage_local_get::<SessionData>(SESSION_STORAGE_KEY).await {
        Ok(session) => session,
        Err(e) => {
            warn!("Failed to read scrobbler session: {}", e);
            None
        }
    }
}

/// Links into the options page for platforms without a context menu.
/// Standard platforms never show the compact list and get no group.
pub async fn mobile_navigator_group(platform: Platform) -> Option<NavigatorGroup> {
    navigator_group_for(platform, browser::get_url)
}

fn navigator_group_for(
    platform: Platform,
    resolve_url: impl FnOnce(&str) -> BrowserResult<String>,
) -> Option<NavigatorGroup> {
    if !platform.is_restricted() {
        return None;
    }
    match resolve_url(OPTIONS_PAGE) {
        Ok(base) => Some(navigator_group(&base)),
        Err(e) => {
            warn!("Failed to resolve options page: {}", e);
            None
        }
    }
}

fn navigator_group(options_url: &str) -> NavigatorGroup {
    NavigatorGroup {
        label_key: "optionsNavigatorTitle".to_string(),
        items: NAVIGATOR_SECTIONS
            .iter()
            .map(|(label_key, section)| NavigatorLink {
                label_key: label_key.to_string(),
                href: format!("{options_url}#{section}"),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::BrowserError;
    use std::cell::Cell;

    #[test]
    fn test_navigator_group_links_into_options_sections() {
        let group = navigator_group("moz-extension://abc/src/ui/options/index.html");
        assert_eq!(group.items.len(), NAVIGATOR_SECTIONS.len());
        assert_eq!(group.items[0].label_key, "optionsOptions");
        assert_eq!(
            group.items[1].href,
            "moz-extension://abc/src/ui/options/index.html#accounts"
        );
    }

    #[test]
    fn test_standard_platform_skips_navigator_lookup() {
        let resolved = Cell::new(false);
        let group = navigator_group_for(Platform::Standard, |path| {
            resolved.set(true);
            Ok(path.to_string())
        });
        assert_eq!(group, None);
        assert!(!resolved.get());
    }

    #[test]
    fn test_restricted_platform_resolves_navigator() {
        let group = navigator_group_for(Platform::RestrictedInteraction, |path| {
            Ok(format!("safari-web-extension://abc/{path}"))
        });
        let group = group.expect("restricted platform gets links");
        assert_eq!(
            group.items[0].href,
            "safari-web-extension://abc/src/ui/options/index.html#options"
        );

        let unresolved = navigator_group_for(Platform::RestrictedInteraction, |_| {
            Err(BrowserError::Unavailable("runtime"))
        });
        assert_eq!(unresolved, None);
    }
}
