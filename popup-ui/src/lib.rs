//! popup-ui - Presenter core and view components for the now-playing popup
//!
//! Pure derivations (song snapshot, affordances, compact actions, links),
//! the command dispatcher and viewport reconciler behind their seams, and
//! the props-based components that render them.

pub mod actions;
pub mod components;
pub mod config;
pub mod dispatch;
pub mod display_types;
pub mod i18n;
pub mod lifecycle;
pub mod links;
pub mod viewport;
pub mod wasm_utils;

pub use components::*;
pub use config::{use_popup_config, PopupConfig};
pub use dispatch::{CommandDispatcher, Intent, MessageBus};
pub use display_types::*;
pub use i18n::{use_translator, Translator};
