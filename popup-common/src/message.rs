use serde::{Deserialize, Serialize};

/// Target used when no tab is known. The controller ignores it.
pub const NO_TAB: i64 = -1;

/// One-way user intent sent to the background controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Command {
    SkipCurrentSong,
    ResetData,
    ToggleLove(LovePayload),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LovePayload {
    pub is_loved: bool,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::SkipCurrentSong => "skipCurrentSong",
            Command::ResetData => "resetData",
            Command::ToggleLove(_) => "toggleLove",
        }
    }
}

/// A command addressed to a tab
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEnvelope {
    #[serde(flatten)]
    pub command: Command,
    pub tab_id: i64,
}

impl MessageEnvelope {
    pub fn new(tab_id: i64, command: Command) -> Self {
        Self { command, tab_id }
    }
}

/// Requests whose reply the popup does wait for
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PopupRequest {
    /// Reply is `TabDescriptor | null`
    GetActiveTab,
}

/// Messages the background broadcasts to open extension pages
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PopupNotification {
    /// The active tab's state changed; refetch it
    UpdateTab,
    #[serde(other)]
    Other,
}
