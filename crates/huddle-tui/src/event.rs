//! Event handling for the huddle TUI.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events that can occur in the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// A tick event for animations and reply delivery.
    Tick,
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Event handler that polls the terminal on a background thread.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tx_clone = tx.clone();

        // crossterm polling blocks, so it gets its own thread
        std::thread::spawn(move || loop {
            let event = if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                    Ok(CrosstermEvent::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                    Ok(CrosstermEvent::Resize(w, h)) => Some(Event::Resize(w, h)),
                    _ => None,
                }
            } else {
                Some(Event::Tick)
            };

            if let Some(e) = event {
                if tx_clone.send(e).is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event, waiting until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    Back,
    Select,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    NextTab,
    PrevTab,
    Tab(usize),
    /// Open or close the chat drawer.
    ToggleDrawer,
    /// Start a fresh chat session.
    NewChat,
    /// Prefill the chat input with suggested prompt N.
    Prompt(usize),
    /// Send the chat input.
    Send,
    MarkAllRead,
    None,
}

/// Map keys that mean the same thing on every screen.
///
/// Text entry keys are not handled here; the chat input and drawer search
/// consume them before falling back to this.
pub fn global_action(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c' | 'q') if ctrl => Some(Action::Quit),
        KeyCode::Char('o') if ctrl => Some(Action::ToggleDrawer),
        KeyCode::Char('n') if ctrl => Some(Action::NewChat),
        KeyCode::Tab => Some(Action::NextTab),
        KeyCode::BackTab => Some(Action::PrevTab),
        KeyCode::F(n @ 1..=9) => Some(Action::Prompt(usize::from(n) - 1)),
        KeyCode::F(10) => Some(Action::Help),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Esc => Some(Action::Back),
        _ => None,
    }
}

/// Convert a key event to an action on screens without text entry.
pub fn key_to_action(key: KeyEvent) -> Action {
    if let Some(action) = global_action(key) {
        return action;
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Char('a') => Action::MarkAllRead,
        KeyCode::Enter => Action::Select,
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::Left | KeyCode::Char('h') => Action::Left,
        KeyCode::Right | KeyCode::Char('l') => Action::Right,
        KeyCode::Char('1') => Action::Tab(0),
        KeyCode::Char('2') => Action::Tab(1),
        KeyCode::Char('3') => Action::Tab(2),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_ctrl_shortcuts() {
        assert_eq!(key_to_action(ctrl('c')), Action::Quit);
        assert_eq!(key_to_action(ctrl('o')), Action::ToggleDrawer);
        assert_eq!(key_to_action(ctrl('n')), Action::NewChat);
    }

    #[test]
    fn test_function_keys_select_prompts() {
        assert_eq!(key_to_action(key(KeyCode::F(1))), Action::Prompt(0));
        assert_eq!(key_to_action(key(KeyCode::F(4))), Action::Prompt(3));
        assert_eq!(global_action(key(KeyCode::F(10))), Some(Action::Help));
        assert_eq!(global_action(key(KeyCode::F(12))), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(key_to_action(key(KeyCode::Char('j'))), Action::Down);
        assert_eq!(key_to_action(key(KeyCode::Up)), Action::Up);
        assert_eq!(key_to_action(key(KeyCode::Tab)), Action::NextTab);
        assert_eq!(key_to_action(key(KeyCode::BackTab)), Action::PrevTab);
        assert_eq!(key_to_action(key(KeyCode::Char('3'))), Action::Tab(2));
    }

    #[test]
    fn test_text_keys_are_not_global() {
        assert_eq!(global_action(key(KeyCode::Char('q'))), None);
        assert_eq!(global_action(key(KeyCode::Enter)), None);
        assert_eq!(key_to_action(key(KeyCode::Char('z'))), Action::None);
    }
}
