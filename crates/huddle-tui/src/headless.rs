//! Headless mode for the huddle TUI.
//!
//! Runs the full app against a `TestBackend` instead of a real terminal so
//! E2E tests and automation can drive it. Input is sent through a channel
//! and the rendered screen plus key state is published after every frame.

use crate::app::{App, Tab};
use crate::event::Action;
use crate::screens::render_app;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use huddle_engine::{CannedReplyProvider, Config, DrawerState, Fixtures};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Default terminal dimensions for headless mode.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// Input delivered to a headless TUI.
#[derive(Debug, Clone, Copy)]
pub enum HeadlessInput {
    /// An already-decoded action.
    Action(Action),
    /// A raw key press, routed exactly as a terminal key would be.
    Key(KeyEvent),
}

/// State captured from the headless TUI after each render.
#[derive(Debug, Clone, Default)]
pub struct HeadlessState {
    pub tab: Tab,
    /// Text contents of the terminal buffer.
    pub screen_contents: String,
    pub should_quit: bool,
    pub show_help: bool,
    pub drawer: DrawerState,
    /// Messages in the live conversation.
    pub message_count: usize,
    /// Whether an assistant reply is pending.
    pub typing: bool,
}

/// Handle to control a headless TUI instance.
pub struct HeadlessHandle {
    input_tx: mpsc::UnboundedSender<HeadlessInput>,
    state_rx: watch::Receiver<HeadlessState>,
}

impl HeadlessHandle {
    /// Send an action. Returns `true` if the TUI is still running.
    pub fn send_action(&self, action: Action) -> bool {
        self.input_tx.send(HeadlessInput::Action(action)).is_ok()
    }

    /// Send a key press.
    pub fn send_key(&self, key: KeyEvent) -> bool {
        self.input_tx.send(HeadlessInput::Key(key)).is_ok()
    }

    /// Type `text` one key at a time.
    pub fn type_text(&self, text: &str) -> bool {
        text.chars()
            .all(|c| self.send_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
    }

    /// Get the current state of the TUI.
    pub fn state(&self) -> HeadlessState {
        self.state_rx.borrow().clone()
    }

    /// Wait until a condition is met on the state.
    ///
    /// Returns the state when the condition is met, or `None` if timed out.
    pub async fn wait_for<F>(&mut self, condition: F, timeout: Duration) -> Option<HeadlessState>
    where
        F: Fn(&HeadlessState) -> bool,
    {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            let state = self.state();
            if condition(&state) {
                return Some(state);
            }

            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                return None;
            }

            match tokio::time::timeout(remaining, self.state_rx.changed()).await {
                Ok(Ok(())) => {}
                // Timed out, or the TUI exited without meeting the condition.
                Ok(Err(_)) | Err(_) => return None,
            }
        }
    }

    /// Wait for specific text to appear on screen.
    pub async fn wait_for_text(&mut self, text: &str, timeout: Duration) -> Option<HeadlessState> {
        let text = text.to_string();
        self.wait_for(|s| s.screen_contents.contains(&text), timeout)
            .await
    }

    /// Wait for a specific tab to be displayed.
    pub async fn wait_for_tab(&mut self, tab: Tab, timeout: Duration) -> Option<HeadlessState> {
        self.wait_for(|s| s.tab == tab, timeout).await
    }

    /// Check if the TUI has quit.
    pub fn has_quit(&self) -> bool {
        self.state().should_quit
    }
}

/// Configuration for headless mode.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    pub width: u16,
    pub height: u16,
    /// Tick rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_rate_ms: 50,
        }
    }
}

/// Run the TUI in headless mode.
///
/// Returns a handle to control the TUI and a join handle for the background task.
///
/// # Example
///
/// ```ignore
/// let (mut handle, task) =
///     run_tui_headless(Config::default(), Fixtures::sample(), HeadlessConfig::default());
///
/// handle.send_action(Action::Tab(1));
/// handle.type_text("Hello");
/// handle.send_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
/// handle.wait_for(|s| !s.typing, Duration::from_secs(5)).await;
///
/// handle.send_action(Action::Quit);
/// task.await.unwrap();
/// ```
pub fn run_tui_headless(
    config: Config,
    fixtures: Fixtures,
    headless: HeadlessConfig,
) -> (HeadlessHandle, JoinHandle<Result<(), String>>) {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(HeadlessState::default());

    let task = tokio::spawn(async move {
        run_headless_loop(config, fixtures, headless, input_rx, state_tx)
            .await
            .map_err(|e| e.to_string())
    });

    (HeadlessHandle { input_tx, state_rx }, task)
}

async fn run_headless_loop(
    config: Config,
    fixtures: Fixtures,
    headless: HeadlessConfig,
    mut input_rx: mpsc::UnboundedReceiver<HeadlessInput>,
    state_tx: watch::Sender<HeadlessState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let backend = TestBackend::new(headless.width, headless.height);
    let mut terminal = Terminal::new(backend)?;

    let provider = Arc::new(CannedReplyProvider::new(config.placeholder_reply.clone()));
    let mut app = App::new(config, fixtures, provider);

    let tick_duration = Duration::from_millis(headless.tick_rate_ms);

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            render_app(&app, area, frame.buffer_mut());
        })?;

        let screen_contents = buffer_to_string(terminal.backend().buffer());

        let _ = state_tx.send(HeadlessState {
            tab: app.tab,
            screen_contents,
            should_quit: app.should_quit,
            show_help: app.show_help,
            drawer: app.drawer.state(),
            message_count: app.session.len(),
            typing: app.session.is_typing(),
        });

        if app.should_quit {
            break;
        }

        tokio::select! {
            input = input_rx.recv() => match input {
                Some(HeadlessInput::Action(action)) => app.handle_action(action),
                Some(HeadlessInput::Key(key)) => app.handle_key(key),
                // Every handle is gone; nobody can stop us otherwise.
                None => break,
            },
            () = tokio::time::sleep(tick_duration) => app.tick(tick_duration),
        }

        // Same as the terminal loop: replies never wait for the next tick.
        app.drain_replies();
    }

    Ok(())
}

/// Convert a terminal buffer to plain text, trimming trailing spaces per row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}
