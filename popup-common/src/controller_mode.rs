use serde::{Deserialize, Serialize};

/// Lifecycle stage of the song tracked in a tab.
///
/// Owned and transitioned by the background controller. Only `Playing`,
/// `Skipped` and `Scrobbled` carry meaning for the popup; every other value
/// (including strings this build does not know) is treated as "unable".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerMode {
    Base,
    Loading,
    Playing,
    Unknown,
    Disabled,
    Err,
    Ignored,
    Scrobbled,
    Skipped,
    Unsupported,
    Disallowed,
    /// Any value sent by a newer controller
    #[serde(other)]
    Unrecognized,
}

impl ControllerMode {
    pub fn is_playing(self) -> bool {
        self == ControllerMode::Playing
    }
}

#[allow(clippy::derivable_impls)]
impl Default for ControllerMode {
    fn default() -> Self {
        ControllerMode::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_modes_deserialize() {
        let mode: ControllerMode = serde_json::from_str("\"Playing\"").unwrap();
        assert_eq!(mode, ControllerMode::Playing);
        let mode: ControllerMode = serde_json::from_str("\"Scrobbled\"").unwrap();
        assert_eq!(mode, ControllerMode::Scrobbled);
    }

    #[test]
    fn test_unknown_mode_degrades() {
        let mode: ControllerMode = serde_json::from_str("\"Rewinding\"").unwrap();
        assert_eq!(mode, ControllerMode::Unrecognized);
        assert!(!mode.is_playing());
    }
}
