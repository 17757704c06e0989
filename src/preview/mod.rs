//! Preview side of the editor: attribute rendering, the scrollable product
//! region and its pinned navigation bar.

pub mod nav;
pub mod renderer;
pub mod viewport;

pub use nav::{BottomNav, EditorTool};
pub use renderer::{
    render, AvatarAttributes, CardAttributes, TextAttributes, VisualAttributes, CARD_SHADOW,
    RADIUS_MAX_PX,
};
pub use viewport::ScrollViewport;
