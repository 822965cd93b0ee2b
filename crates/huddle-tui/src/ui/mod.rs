//! UI module for the huddle TUI.

pub mod layout;
pub mod theme;
pub mod widgets;

pub use layout::*;
