/// Interaction capabilities of the host browser, resolved once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Platform {
    /// Hover and secondary click available
    #[default]
    Standard,
    /// Touch-only (iOS Safari); inline controls are replaced by a compact action list
    RestrictedInteraction,
}

impl Platform {
    /// Classify from `navigator.userAgent` and `navigator.maxTouchPoints`.
    ///
    /// iPadOS reports a desktop Macintosh user agent, so a Mac with a touch
    /// screen counts as restricted.
    pub fn detect(user_agent: &str, max_touch_points: i32) -> Self {
        let is_ios_device = ["iPhone", "iPad", "iPod"]
            .iter()
            .any(|device| user_agent.contains(device));
        let is_ipad_os = user_agent.contains("Macintosh") && max_touch_points > 1;

        if is_ios_device || is_ipad_os {
            Platform::RestrictedInteraction
        } else {
            Platform::Standard
        }
    }

    pub fn is_restricted(self) -> bool {
        self == Platform::RestrictedInteraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
    const MAC_SAFARI: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15";
    const FIREFOX: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0";

    #[test]
    fn test_iphone_is_restricted() {
        assert_eq!(Platform::detect(IPHONE, 5), Platform::RestrictedInteraction);
    }

    #[test]
    fn test_ipad_os_reports_as_mac() {
        assert_eq!(Platform::detect(MAC_SAFARI, 5), Platform::RestrictedInteraction);
        assert_eq!(Platform::detect(MAC_SAFARI, 0), Platform::Standard);
    }

    #[test]
    fn test_desktop_is_standard() {
        assert!(!Platform::detect(FIREFOX, 0).is_restricted());
    }
}
