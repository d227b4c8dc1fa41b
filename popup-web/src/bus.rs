//! `MessageBus` over `runtime.sendMessage`

use crate::browser;
use dioxus::prelude::*;
use popup_common::MessageEnvelope;
use popup_ui::MessageBus;
use tracing::warn;

/// Sends each envelope on a spawned task without waiting for the reply.
/// A rejected send is logged and dropped.
pub struct RuntimeBus;

impl MessageBus for RuntimeBus {
    fn send(&self, envelope: MessageEnvelope) {
        spawn(async move {
            if let Err(e) = browser::send_command(&envelope).await {
                warn!("Failed to send {} to tab {}: {}", envelope.command.name(), envelope.tab_id, e);
            }
        });
    }
}
