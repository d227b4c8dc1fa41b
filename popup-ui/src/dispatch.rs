//! Fire-and-forget commands toward the background controller
//!
//! The dispatcher never waits on or branches on a reply. The only feedback
//! is the next tab descriptor the resource provider hands us.

use crate::display_types::SongSnapshot;
use popup_common::{Command, LovePayload, MessageEnvelope, TabDescriptor, NO_TAB};
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

/// Outbound transport to the background controller.
///
/// Implementations must not block and must absorb their own failures.
pub trait MessageBus {
    fn send(&self, envelope: MessageEnvelope);
}

/// User intents the popup can express
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Local only: opens the edit sub-view
    Edit,
    Revert,
    Skip,
    ToggleLove,
}

/// Tab a command is addressed to
pub fn target_tab(tab: Option<&TabDescriptor>) -> i64 {
    tab.map(|tab| tab.tab_id).unwrap_or(NO_TAB)
}

/// Maps intents to commands and hands them to the bus.
///
/// Cloning shares the bus and the love expectation, so every clone handed
/// to a child view sees the same toggle history.
#[derive(Clone)]
pub struct CommandDispatcher {
    bus: Rc<dyn MessageBus>,
    /// Love state most recently requested and not yet confirmed by a refresh
    love_expectation: Rc<Cell<Option<bool>>>,
}

impl PartialEq for CommandDispatcher {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.bus, &other.bus) && Rc::ptr_eq(&self.love_expectation, &other.love_expectation)
    }
}

impl CommandDispatcher {
    pub fn new(bus: impl MessageBus + 'static) -> Self {
        Self {
            bus: Rc::new(bus),
            love_expectation: Rc::new(Cell::new(None)),
        }
    }

    /// Build and send the command for `intent`. Returns what was sent.
    pub fn dispatch(
        &self,
        intent: Intent,
        tab: Option<&TabDescriptor>,
        song: Option<&SongSnapshot>,
    ) -> Option<MessageEnvelope> {
        let command = self.command_for(intent, song)?;
        let envelope = MessageEnvelope::new(target_tab(tab), command);
        debug!(
            "Dispatching {} to tab {}",
            envelope.command.name(),
            envelope.tab_id
        );
        self.bus.send(envelope.clone());
        Some(envelope)
    }

    fn command_for(&self, intent: Intent, song: Option<&SongSnapshot>) -> Option<Command> {
        match intent {
            Intent::Edit => None,
            Intent::Revert => {
                if song.is_some_and(SongSnapshot::is_corrected_by_user) {
                    Some(Command::ResetData)
                } else {
                    debug!("Ignoring revert for a song without user corrections");
                    None
                }
            }
            Intent::Skip => Some(Command::SkipCurrentSong),
            Intent::ToggleLove => Some(Command::ToggleLove(LovePayload {
                is_loved: self.next_love_state(song),
            })),
        }
    }

    /// Negation of the latest known love state, remembered so a second
    /// toggle before the refresh arrives undoes the first.
    fn next_love_state(&self, song: Option<&SongSnapshot>) -> bool {
        let current = self
            .love_expectation
            .get()
            .unwrap_or_else(|| song.is_some_and(SongSnapshot::is_loved));
        let next = !current;
        self.love_expectation.set(Some(next));
        next
    }

    /// Pass a freshly resolved descriptor through, dropping pending
    /// expectations. Runs on every resolution, including one that returns
    /// the same descriptor as before.
    pub fn refreshed<T>(&self, resolved: T) -> T {
        self.observe_refresh();
        resolved
    }

    /// Called whenever a new descriptor resolves. The descriptor is now the
    /// latest known state, so pending expectations are dropped.
    pub fn observe_refresh(&self) {
        self.love_expectation.set(None);
    }
}
