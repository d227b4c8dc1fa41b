mod compact_menu;
mod controls;
mod song_details;
mod view;

pub use compact_menu::CompactActionMenu;
pub use controls::{LoveButton, TrackControls};
pub use song_details::SongDetails;
pub use view::NowPlayingView;
