//! Popup configuration resolved once at startup

use dioxus::prelude::*;
use popup_common::Platform;

/// Host-resolved settings the views read through context.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupConfig {
    /// Interaction capabilities; picks inline controls or the compact list
    pub platform: Platform,
    /// Bundled cover shown when the song has no art
    pub default_cover_url: String,
    /// Scrobbler whose session name keys the play-count link
    pub scrobbler_label: String,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            platform: Platform::Standard,
            default_cover_url: "img/cover_art_default.png".to_string(),
            scrobbler_label: "Last.fm".to_string(),
        }
    }
}

impl PopupConfig {
    pub fn cover_url(&self, track_art: Option<&str>) -> String {
        track_art
            .map(str::to_string)
            .unwrap_or_else(|| self.default_cover_url.clone())
    }
}

pub fn use_popup_config() -> PopupConfig {
    try_use_context::<PopupConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_falls_back_to_bundled_image() {
        let config = PopupConfig {
            default_cover_url: "moz-extension://abc/img/cover_art_default.png".into(),
            ..Default::default()
        };
        assert_eq!(
            config.cover_url(None),
            "moz-extension://abc/img/cover_art_default.png"
        );
        assert_eq!(
            config.cover_url(Some("https://img.example/a.jpg")),
            "https://img.example/a.jpg"
        );
    }
}
