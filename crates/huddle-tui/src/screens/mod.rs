//! Screen definitions for the huddle TUI.

pub mod chat;
pub mod home;
pub mod notifications;

use crate::app::{App, Tab};
use crate::ui::theme::Styles;
use crate::ui::widgets::{KeyHint, StatusBar, TabBar};
use crate::ui::{centered_fixed, shell_layout};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

pub use chat::ChatScreen;
pub use home::HomeScreen;
pub use notifications::NotificationsScreen;

/// Trait for screens that can be rendered.
pub trait Screen {
    /// Render the screen content (between the tab bar and the status bar).
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);

    /// Key hints for the status bar.
    fn hints(&self, app: &App) -> Vec<KeyHint>;

    /// Right-aligned status text, shown when no notice is active.
    fn status_text(&self, _app: &App) -> String {
        String::new()
    }
}

/// Screen implementation for a tab.
pub fn screen_for(tab: Tab) -> &'static dyn Screen {
    match tab {
        Tab::Home => &HomeScreen,
        Tab::Chat => &ChatScreen,
        Tab::Notifications => &NotificationsScreen,
    }
}

/// Render the full application frame: tab bar, active screen, status bar, help.
pub fn render_app(app: &App, area: Rect, buf: &mut Buffer) {
    Block::default().style(Styles::default()).render(area, buf);

    let (tab_area, content_area, status_area) = shell_layout(area);

    TabBar::new(Tab::ALL.iter().map(|tab| tab.title()).collect())
        .select(app.tab.index())
        .badges(vec![0, 0, app.unread_notifications()])
        .render(tab_area, buf);

    let screen = screen_for(app.tab);
    screen.render(app, content_area, buf);

    let right = app
        .toast
        .clone()
        .unwrap_or_else(|| screen.status_text(app));
    StatusBar::new(app.tab.title())
        .hints(screen.hints(app))
        .right(&right)
        .render(status_area, buf);

    if app.show_help {
        render_help_overlay(area, buf);
    }
}

/// Render the help overlay.
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let help_text = r"  Everywhere
    Tab / Shift+Tab   Next/prev tab
    PgUp / PgDn       Scroll a page
    F10               Help
    Ctrl+C            Quit

  Home / Notifications
    1 2 3             Jump to tab
    j/k or Up/Down    Scroll
    h/l               Change filter
    a                 Mark all read
    ?  q              Help, quit

  Chat
    Enter             Send message
    F1..F9            Use suggested prompt
    Ctrl+O            Chats drawer
    Ctrl+N            New chat
    Esc               Close drawer
  [Press any key to close]
";

    let width = 50.min(area.width.saturating_sub(4));
    let height = 26.min(area.height.saturating_sub(2));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .style(Styles::default());

    Paragraph::new(help_text)
        .block(block)
        .style(Styles::default())
        .render(overlay_area, buf);
}
