//! Reusable widgets for the huddle TUI.

pub mod status_bar;
pub mod tabs;
pub mod text_input;

pub use status_bar::{KeyHint, StatusBar};
pub use tabs::TabBar;
pub use text_input::TextInputState;
