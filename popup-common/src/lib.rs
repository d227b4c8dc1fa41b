//! popup-common - Wire and data types shared between the popup layers
//!
//! Everything here mirrors what the background controller owns or accepts.
//! The popup only reads these values and builds outbound messages from them.

mod controller_mode;
mod message;
mod platform;
mod session;
mod tab;

pub use controller_mode::ControllerMode;
pub use message::{Command, LovePayload, MessageEnvelope, PopupNotification, PopupRequest, NO_TAB};
pub use platform::Platform;
pub use session::SessionData;
pub use tab::{ConnectorMeta, RawSong, SongFields, SongFlags, SongMetadata, TabDescriptor};
