//! Compact action list for touch-only platforms
//!
//! Built from the same affordances as the inline controls so both variants
//! agree on what is actionable.

use crate::dispatch::Intent;
use crate::display_types::{Loadable, NavigatorGroup, SongSnapshot};
use crate::lifecycle::Affordances;
use popup_common::ControllerMode;

#[derive(Clone, Debug, PartialEq)]
pub enum CompactEntry {
    Action {
        intent: Intent,
        label_key: &'static str,
        enabled: bool,
    },
    Navigation(NavigatorGroup),
}

/// Entries in display order: edit, revert (corrected songs only), skip,
/// then the navigation group once its provider has answered with links.
///
/// The list is rebuilt from scratch on every call, so re-resolving the
/// group never duplicates it and a group whose provider went back to
/// pending is dropped until it resolves again.
pub fn compact_entries(
    mode: Option<ControllerMode>,
    song: &SongSnapshot,
    navigator: &Loadable<NavigatorGroup>,
) -> Vec<CompactEntry> {
    let affordances = Affordances::new(mode, song.flags());
    let mut entries = vec![CompactEntry::Action {
        intent: Intent::Edit,
        label_key: affordances.edit_label(true),
        enabled: affordances.can_mutate,
    }];

    if affordances.show_revert {
        entries.push(CompactEntry::Action {
            intent: Intent::Revert,
            label_key: affordances.revert_label(true),
            enabled: affordances.can_mutate,
        });
    }

    entries.push(CompactEntry::Action {
        intent: Intent::Skip,
        label_key: affordances.skip_label(true),
        enabled: affordances.can_mutate,
    });

    if let Some(group) = navigator.resolved().filter(|group| !group.items.is_empty()) {
        entries.push(CompactEntry::Navigation(group.clone()));
    }

    entries
}

/// Icon shown next to an action entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionGlyph {
    Pencil,
    RotateCcw,
    Ban,
    Heart,
}

impl ActionGlyph {
    pub fn for_intent(intent: Intent) -> Self {
        match intent {
            Intent::Edit => ActionGlyph::Pencil,
            Intent::Revert => ActionGlyph::RotateCcw,
            Intent::Skip => ActionGlyph::Ban,
            Intent::ToggleLove => ActionGlyph::Heart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_types::NavigatorLink;
    use popup_common::RawSong;

    fn song(corrected: bool) -> SongSnapshot {
        let mut raw = RawSong::default();
        raw.flags.is_corrected_by_user = corrected;
        SongSnapshot::new(raw, 1)
    }

    fn group() -> NavigatorGroup {
        NavigatorGroup {
            label_key: "optionsMore".into(),
            items: vec![NavigatorLink {
                label_key: "optionsAccounts".into(),
                href: "options.html#accounts".into(),
            }],
        }
    }

    fn intents(entries: &[CompactEntry]) -> Vec<Intent> {
        entries
            .iter()
            .filter_map(|entry| match entry {
                CompactEntry::Action { intent, .. } => Some(*intent),
                CompactEntry::Navigation(_) => None,
            })
            .collect()
    }

    fn navigation_count(entries: &[CompactEntry]) -> usize {
        entries
            .iter()
            .filter(|entry| matches!(entry, CompactEntry::Navigation(_)))
            .count()
    }

    #[test]
    fn test_revert_entry_only_for_corrected_song() {
        let plain = compact_entries(Some(ControllerMode::Playing), &song(false), &Loadable::Pending);
        assert_eq!(intents(&plain), vec![Intent::Edit, Intent::Skip]);

        let corrected = compact_entries(Some(ControllerMode::Playing), &song(true), &Loadable::Pending);
        assert_eq!(
            intents(&corrected),
            vec![Intent::Edit, Intent::Revert, Intent::Skip]
        );
    }

    #[test]
    fn test_entries_use_short_labels() {
        let entries = compact_entries(Some(ControllerMode::Scrobbled), &song(true), &Loadable::Pending);
        let labels: Vec<&str> = entries
            .iter()
            .filter_map(|entry| match entry {
                CompactEntry::Action { label_key, .. } => Some(*label_key),
                CompactEntry::Navigation(_) => None,
            })
            .collect();
        assert_eq!(
            labels,
            vec![
                "infoEditUnableTitleShort",
                "infoRevertUnableTitleShort",
                "infoSkipUnableTitleShort",
            ]
        );
    }

    #[test]
    fn test_entries_disabled_unless_playing() {
        let entries = compact_entries(Some(ControllerMode::Skipped), &song(true), &Loadable::Pending);
        assert!(entries.iter().all(|entry| matches!(
            entry,
            CompactEntry::Action { enabled: false, .. }
        )));

        let entries = compact_entries(Some(ControllerMode::Playing), &song(true), &Loadable::Pending);
        assert!(entries.iter().all(|entry| matches!(
            entry,
            CompactEntry::Action { enabled: true, .. }
        )));
    }

    #[test]
    fn test_pending_navigator_is_not_appended() {
        let entries = compact_entries(Some(ControllerMode::Playing), &song(false), &Loadable::Pending);
        assert_eq!(navigation_count(&entries), 0);
    }

    #[test]
    fn test_resolved_navigator_appended_once() {
        let navigator = Loadable::Ready(Some(group()));
        let entries = compact_entries(Some(ControllerMode::Playing), &song(false), &navigator);
        assert_eq!(navigation_count(&entries), 1);
        assert_eq!(entries.last(), Some(&CompactEntry::Navigation(group())));

        // Rebuilding after the same resolution does not duplicate it
        let again = compact_entries(Some(ControllerMode::Playing), &song(false), &navigator);
        assert_eq!(navigation_count(&again), 1);
    }

    #[test]
    fn test_absent_or_empty_navigator_not_appended() {
        let absent = compact_entries(Some(ControllerMode::Playing), &song(false), &Loadable::Ready(None));
        assert_eq!(navigation_count(&absent), 0);

        let empty = NavigatorGroup {
            label_key: "optionsMore".into(),
            items: Vec::new(),
        };
        let entries = compact_entries(
            Some(ControllerMode::Playing),
            &song(false),
            &Loadable::Ready(Some(empty)),
        );
        assert_eq!(navigation_count(&entries), 0);
    }

    #[test]
    fn test_each_intent_has_its_own_glyph() {
        assert_eq!(ActionGlyph::for_intent(Intent::Edit), ActionGlyph::Pencil);
        assert_eq!(ActionGlyph::for_intent(Intent::Revert), ActionGlyph::RotateCcw);
        assert_eq!(ActionGlyph::for_intent(Intent::Skip), ActionGlyph::Ban);
        assert_eq!(ActionGlyph::for_intent(Intent::ToggleLove), ActionGlyph::Heart);
    }
}
