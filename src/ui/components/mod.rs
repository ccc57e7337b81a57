//! Widgets drawn by the map UI.

/// Sheet shown for the selected place.
pub mod details;
pub mod logs;
/// Canvas with coastlines, pins and the route.
pub mod map;
pub mod status;

pub use details::render_details;
pub use logs::render_logs;
pub use map::{MapView, render_map};
pub use status::{StatusContext, render_status};
