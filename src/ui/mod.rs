//! Interactive terminal UI for the map.
//!
//! [`MapUi`] configures and launches the application. The remaining
//! submodules implement the event loop, key handling, rendering and the
//! widgets drawn on screen.

mod actions;
mod builder;
pub mod components;
mod render;
mod runtime;
mod state;
pub mod theme;

pub use builder::MapUi;
pub use state::{App, RouteOutcome, SessionOutcome};
pub use theme::Theme;
