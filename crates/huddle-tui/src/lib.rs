//! huddle-tui: Terminal UI for the huddle social/chat client
//!
//! This crate provides the TUI layer for huddle, including:
//! - Home feed, assistant chat and notifications tabs
//! - The chats drawer with its slide/dim animation
//! - Shared widgets (tab bar, status bar, text input)
//! - Headless mode for testing and automation

mod app;
mod event;
pub mod headless;
mod screens;
#[cfg(test)]
pub mod test_utils;
mod text;
mod ui;

pub use app::{App, Tab};
pub use event::{Action, Event, EventHandler};
pub use huddle_engine;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyEventKind, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use huddle_engine::{CannedReplyProvider, Config, Fixtures};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop, and restores the terminal on
/// exit. Must be called from within a tokio runtime; replies are delivered by
/// spawned tasks.
pub async fn run_tui(config: Config, fixtures: Fixtures) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let provider = Arc::new(CannedReplyProvider::new(config.placeholder_reply.clone()));
    let mut events = EventHandler::new(config.tick_rate());
    let mut app = App::new(config, fixtures, provider);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    terminal.show_cursor()?;
    info!("tui exited");

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            screens::render_app(app, area, frame.buffer_mut());
        })?;

        let Some(event) = events.next().await else {
            break;
        };

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => app.handle_action(Action::Up),
                MouseEventKind::ScrollDown => app.handle_action(Action::Down),
                MouseEventKind::Down(MouseButton::Left) => {
                    let size = terminal.size()?;
                    app.handle_click(
                        mouse.column,
                        mouse.row,
                        Rect::new(0, 0, size.width, size.height),
                    );
                }
                _ => {}
            },
            Event::Tick => {
                let now = Instant::now();
                app.tick(now.duration_since(last_tick));
                last_tick = now;
            }
            // Key releases/repeats; resize is picked up by the next draw.
            Event::Key(_) | Event::Resize(_, _) => {}
        }

        // Ticks can be starved by a burst of input.
        app.drain_replies();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}


#[cfg(test)]
mod navigation_tests {
    use super::*;
    use crate::test_utils::*;
    use crossterm::event::KeyCode;
    use huddle_engine::DrawerState;

    #[test]
    fn test_starts_on_home() {
        let app = create_test_app();
        assert_eq!(app.tab, Tab::Home);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_tab_key_cycles_tabs() {
        let mut app = create_test_app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Chat);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Notifications);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Home);
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.tab, Tab::Notifications);
    }

    #[test]
    fn test_tab_leaves_chat_even_with_text() {
        let mut app = create_test_app_at_tab(Tab::Chat);
        type_text(&mut app, "draft");
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Notifications);

        // The draft survives a round trip.
        app.handle_action(Action::Tab(1));
        assert_eq!(app.input_state.content(), "draft");
    }

    #[test]
    fn test_number_keys_jump_outside_chat() {
        let mut app = create_test_app();
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.tab, Tab::Notifications);
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.tab, Tab::Chat);

        // In chat, digits are text.
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.tab, Tab::Chat);
        assert_eq!(app.input_state.content(), "1");
    }

    #[test]
    fn test_help_toggle_and_dismiss() {
        let mut app = create_test_app();
        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.show_help);

        // Any key closes help without acting.
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_f10_opens_help_from_chat() {
        let mut app = create_test_app_at_tab(Tab::Chat);
        app.handle_key(key(KeyCode::Char('?')));
        assert!(!app.show_help);
        assert_eq!(app.input_state.content(), "?");

        app.handle_key(key(KeyCode::F(10)));
        assert!(app.show_help);
        let text = render_app_to_string(&app);
        assert!(text.contains("Use suggested prompt"));

        // The dismissing key is not typed.
        app.handle_key(key(KeyCode::Char('x')));
        assert!(!app.show_help);
        assert_eq!(app.input_state.content(), "?");
    }

    #[test]
    fn test_ctrl_c_quits_from_chat() {
        let mut app = create_test_app_at_tab(Tab::Chat);
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_o_opens_drawer_and_escape_closes() {
        let mut app = create_test_app_at_tab(Tab::Chat);
        app.handle_key(ctrl('o'));
        assert_eq!(app.drawer.state(), DrawerState::Open);

        app.tick(app.config.drawer_animation());
        app.handle_key(key(KeyCode::Esc));
        app.tick(app.config.drawer_animation());
        assert_eq!(app.drawer.state(), DrawerState::Closed);
    }

    #[test]
    fn test_ctrl_n_from_drawer_starts_fresh_chat() {
        let mut app = create_test_app_at_tab(Tab::Chat);
        app.handle_key(ctrl('o'));
        app.tick(app.config.drawer_animation());

        app.handle_key(ctrl('n'));
        assert!(app.session.is_empty());
        assert!(app.drawer.is_closing());

        let text = render_app_to_string(&app);
        assert!(text.contains("Started a new chat"));
    }

    #[test]
    fn test_scroll_keys_on_home() {
        let mut app = create_test_app();
        app.handle_key(key(KeyCode::Char('j')));
        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.feed_scroll, 2);
        app.handle_key(key(KeyCode::Char('k')));
        assert_eq!(app.feed_scroll, 1);
        app.handle_key(key(KeyCode::PageUp));
        assert_eq!(app.feed_scroll, 0);
    }

    #[test]
    fn test_transcript_scroll_in_chat() {
        let mut app = create_test_app_at_tab(Tab::Chat);
        app.handle_key(key(KeyCode::PageUp));
        assert_eq!(app.transcript_scroll, 10);
        app.handle_key(key(KeyCode::PageDown));
        assert_eq!(app.transcript_scroll, 0);
    }
}

#[cfg(test)]
mod snapshot_tests {
    use super::*;
    use crate::test_utils::*;
    use huddle_engine::{NotificationFilter, Session};
    use insta::assert_snapshot;

    fn open_drawer(app: &mut App) {
        app.handle_action(Action::ToggleDrawer);
        app.tick(app.config.drawer_animation());
    }

    #[test]
    fn test_home_feed_snapshot() {
        let app = create_test_app();
        let result = render_app_to_string(&app);
        assert_snapshot!("home_feed", result);
    }

    #[test]
    fn test_chat_conversation_snapshot() {
        let app = create_test_app_at_tab(Tab::Chat);
        let result = render_app_to_string(&app);
        assert_snapshot!("chat_conversation", result);
    }

    #[test]
    fn test_chat_awaiting_reply_snapshot() {
        let mut app = create_test_app_at_tab(Tab::Chat);
        app.session = Session::new();
        app.session.submit("Can you review my layout code?");

        let result = render_app_to_string(&app);
        insta::with_settings!({filters => vec![(r"\d{2}:\d{2} [AP]M", "[time]")]}, {
            assert_snapshot!("chat_awaiting_reply", result);
        });
    }

    #[test]
    fn test_chat_drawer_open_snapshot() {
        let mut app = create_test_app_at_tab(Tab::Chat);
        open_drawer(&mut app);
        let result = render_app_to_string(&app);
        assert_snapshot!("chat_drawer_open", result);
    }

    #[test]
    fn test_chat_drawer_half_open_snapshot() {
        let mut app = create_test_app_at_tab(Tab::Chat);
        app.handle_action(Action::ToggleDrawer);
        app.tick(app.config.drawer_animation() / 2);
        let result = render_app_to_string(&app);
        assert_snapshot!("chat_drawer_half_open", result);
    }

    #[test]
    fn test_chat_drawer_no_results_snapshot() {
        let mut app = create_test_app_at_tab(Tab::Chat);
        open_drawer(&mut app);
        type_text(&mut app, "zzz");
        let result = render_app_to_string(&app);
        assert_snapshot!("chat_drawer_no_results", result);
    }

    #[test]
    fn test_notifications_all_snapshot() {
        let app = create_test_app_at_tab(Tab::Notifications);
        let result = render_app_to_string(&app);
        assert_snapshot!("notifications_all", result);
    }

    #[test]
    fn test_notifications_unread_snapshot() {
        let mut app = create_test_app_at_tab(Tab::Notifications);
        app.notification_filter = NotificationFilter::Unread;
        let result = render_app_to_string(&app);
        assert_snapshot!("notifications_unread", result);
    }

    #[test]
    fn test_notifications_all_read_snapshot() {
        let mut app = create_test_app_at_tab(Tab::Notifications);
        app.handle_action(Action::MarkAllRead);
        app.notification_filter = NotificationFilter::Unread;
        let result = render_app_to_string(&app);
        assert_snapshot!("notifications_all_read", result);
    }
}
