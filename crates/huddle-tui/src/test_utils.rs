//! Test utilities for huddle-tui rendering and interaction tests.

use crate::app::{App, Tab};
pub use crate::headless::buffer_to_string;
use crate::screens::render_app;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use huddle_engine::{CannedReplyProvider, Config, Fixtures};
use ratatui::{buffer::Buffer, layout::Rect};
use std::sync::Arc;

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test app with the sample fixtures and default config.
pub fn create_test_app() -> App {
    let config = Config::default();
    let provider = Arc::new(CannedReplyProvider::new(config.placeholder_reply.clone()));
    App::new(config, Fixtures::sample(), provider)
}

/// Create a test app positioned at a specific tab.
pub fn create_test_app_at_tab(tab: Tab) -> App {
    let mut app = create_test_app();
    app.tab = tab;
    app
}

/// A key press without modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// A key press with Ctrl held.
pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Feed each character of `text` to the app as a key press.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

/// Render the whole app to a string.
pub fn render_app_to_string(app: &App) -> String {
    render_app_to_string_sized(app, TEST_WIDTH, TEST_HEIGHT)
}

/// Render the whole app to a string with custom dimensions.
pub fn render_app_to_string_sized(app: &App, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    render_app(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_app_at_tab() {
        let app = create_test_app_at_tab(Tab::Notifications);
        assert_eq!(app.tab, Tab::Notifications);
        assert!(!app.fixtures.posts.is_empty());
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 2, "World", ratatui::style::Style::default());

        assert_eq!(buffer_to_string(&buffer), "Hello\n\nWorld");
    }
}
