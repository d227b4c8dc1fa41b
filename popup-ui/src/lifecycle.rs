//! Control labels and enablement derived from the controller mode
//!
//! Everything here is a pure function of `(mode, flags)`. The mode is an
//! `Option` because the tab may be absent or still loading; both count as
//! "unable".

use popup_common::{ControllerMode, SongFlags};

/// Label shown on the skip control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipLabel {
    Skip,
    AlreadySkipped,
    Unavailable,
}

impl SkipLabel {
    pub fn for_mode(mode: Option<ControllerMode>) -> Self {
        match mode {
            Some(ControllerMode::Playing) => SkipLabel::Skip,
            Some(ControllerMode::Skipped) => SkipLabel::AlreadySkipped,
            _ => SkipLabel::Unavailable,
        }
    }

    /// Translation message name
    pub fn message_key(self, short: bool) -> &'static str {
        match (self, short) {
            (SkipLabel::Skip, false) => "infoSkipTitle",
            (SkipLabel::Skip, true) => "infoSkipTitleShort",
            (SkipLabel::AlreadySkipped, false) => "infoSkippedTitle",
            (SkipLabel::AlreadySkipped, true) => "infoSkippedTitleShort",
            (SkipLabel::Unavailable, false) => "infoSkipUnableTitle",
            (SkipLabel::Unavailable, true) => "infoSkipUnableTitleShort",
        }
    }
}

pub fn skip_label_key(mode: Option<ControllerMode>, short: bool) -> &'static str {
    SkipLabel::for_mode(mode).message_key(short)
}

/// Enablement and decoration of the song controls
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affordances {
    mode: Option<ControllerMode>,
    /// Edit, revert and skip are only actionable while playing
    pub can_mutate: bool,
    /// Revert is only rendered for user-corrected songs
    pub show_revert: bool,
    /// Skip shows as toggled once the song was skipped
    pub skip_active: bool,
    /// Skip is de-emphasised unless the song was already scrobbled
    pub skip_muted: bool,
}

impl Affordances {
    pub fn new(mode: Option<ControllerMode>, flags: &SongFlags) -> Self {
        Self {
            mode,
            can_mutate: mode == Some(ControllerMode::Playing),
            show_revert: flags.is_corrected_by_user,
            skip_active: mode == Some(ControllerMode::Skipped),
            skip_muted: mode != Some(ControllerMode::Scrobbled),
        }
    }

    pub fn edit_label(&self, short: bool) -> &'static str {
        match (self.can_mutate, short) {
            (true, false) => "infoEditTitle",
            (true, true) => "infoEditTitleShort",
            (false, false) => "infoEditUnableTitle",
            (false, true) => "infoEditUnableTitleShort",
        }
    }

    pub fn revert_label(&self, short: bool) -> &'static str {
        match (self.can_mutate, short) {
            (true, false) => "infoRevertTitle",
            (true, true) => "infoRevertTitleShort",
            (false, false) => "infoRevertUnableTitle",
            (false, true) => "infoRevertUnableTitleShort",
        }
    }

    pub fn skip_label(&self, short: bool) -> &'static str {
        skip_label_key(self.mode, short)
    }
}

pub fn love_label(is_loved: bool) -> &'static str {
    if is_loved {
        "infoUnlove"
    } else {
        "infoLove"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_MODES: [ControllerMode; 12] = [
        ControllerMode::Base,
        ControllerMode::Loading,
        ControllerMode::Playing,
        ControllerMode::Unknown,
        ControllerMode::Disabled,
        ControllerMode::Err,
        ControllerMode::Ignored,
        ControllerMode::Scrobbled,
        ControllerMode::Skipped,
        ControllerMode::Unsupported,
        ControllerMode::Disallowed,
        ControllerMode::Unrecognized,
    ];

    fn corrected(value: bool) -> SongFlags {
        SongFlags {
            is_corrected_by_user: value,
            ..Default::default()
        }
    }

    #[test]
    fn test_skip_label_table() {
        use ControllerMode::*;
        assert_eq!(skip_label_key(Some(Playing), false), "infoSkipTitle");
        assert_eq!(skip_label_key(Some(Playing), true), "infoSkipTitleShort");
        assert_eq!(skip_label_key(Some(Skipped), false), "infoSkippedTitle");
        assert_eq!(skip_label_key(Some(Skipped), true), "infoSkippedTitleShort");
        assert_eq!(skip_label_key(Some(Scrobbled), false), "infoSkipUnableTitle");
        assert_eq!(skip_label_key(Some(Scrobbled), true), "infoSkipUnableTitleShort");
    }

    #[test]
    fn test_unknown_or_absent_mode_cannot_skip() {
        for mode in [
            None,
            Some(ControllerMode::Unrecognized),
            Some(ControllerMode::Loading),
            Some(ControllerMode::Base),
        ] {
            assert_eq!(SkipLabel::for_mode(mode), SkipLabel::Unavailable);
            assert_eq!(skip_label_key(mode, false), "infoSkipUnableTitle");
            assert_eq!(skip_label_key(mode, true), "infoSkipUnableTitleShort");
        }
    }

    #[test]
    fn test_mutating_controls_enabled_only_while_playing() {
        for mode in ALL_MODES {
            let affordances = Affordances::new(Some(mode), &corrected(true));
            assert_eq!(affordances.can_mutate, mode == ControllerMode::Playing);
        }
        assert!(!Affordances::new(None, &corrected(true)).can_mutate);
    }

    #[test]
    fn test_revert_shown_iff_corrected_regardless_of_mode() {
        for mode in ALL_MODES {
            assert!(Affordances::new(Some(mode), &corrected(true)).show_revert);
            assert!(!Affordances::new(Some(mode), &corrected(false)).show_revert);
        }
    }

    #[test]
    fn test_skip_decoration() {
        let skipped = Affordances::new(Some(ControllerMode::Skipped), &corrected(false));
        assert!(skipped.skip_active);
        assert!(skipped.skip_muted);

        let scrobbled = Affordances::new(Some(ControllerMode::Scrobbled), &corrected(false));
        assert!(!scrobbled.skip_active);
        assert!(!scrobbled.skip_muted);

        let playing = Affordances::new(Some(ControllerMode::Playing), &corrected(false));
        assert!(!playing.skip_active);
        assert!(playing.skip_muted);
    }

    #[test]
    fn test_edit_and_revert_labels_follow_mode() {
        let playing = Affordances::new(Some(ControllerMode::Playing), &corrected(true));
        assert_eq!(playing.edit_label(false), "infoEditTitle");
        assert_eq!(playing.revert_label(true), "infoRevertTitleShort");

        let scrobbled = Affordances::new(Some(ControllerMode::Scrobbled), &corrected(true));
        assert_eq!(scrobbled.edit_label(true), "infoEditUnableTitleShort");
        assert_eq!(scrobbled.revert_label(false), "infoRevertUnableTitle");
        assert_eq!(scrobbled.skip_label(false), "infoSkipUnableTitle");
    }

    #[test]
    fn test_love_label() {
        assert_eq!(love_label(true), "infoUnlove");
        assert_eq!(love_label(false), "infoLove");
    }
}
