mod base;
mod edit;
mod popup;

pub use base::Base;
pub use edit::EditShell;
pub use popup::Popup;
