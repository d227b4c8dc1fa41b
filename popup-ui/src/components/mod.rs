pub mod button;
pub mod icons;
pub mod menu;
pub mod now_playing;
pub mod popup_link;

pub use button::{ChromelessButton, ControlButton};
pub use icons::{
    BanIcon, EllipsisIcon, HeartCrackIcon, HeartIcon, PencilIcon, RotateCcwIcon, ScrobblesIcon,
};
pub use menu::{MenuDivider, MenuItem, MenuLink};
pub use now_playing::{CompactActionMenu, LoveButton, NowPlayingView, SongDetails, TrackControls};
pub use popup_link::PopupLink;
