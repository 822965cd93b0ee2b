//! Application state and update logic for the huddle TUI.

use crate::event::{global_action, key_to_action, Action};
use crate::ui::widgets::TextInputState;
use crate::ui::{drawer_rect, shell_layout};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use huddle_engine::{
    filter_chats, filter_notifications, mark_all_read, unread_count, ChatSummary, Config, Drawer,
    Fixtures, Notification, NotificationFilter, ReplyProvider, ReplyReady, ReplyScheduler,
    Session,
};
use ratatui::layout::Rect;
use std::cell::Cell;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Ticks a status-bar notice stays visible.
const TOAST_TICKS: usize = 60;

/// Lines moved per page scroll.
const PAGE_LINES: usize = 10;

/// The tab being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Chat,
    Notifications,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Chat, Tab::Notifications];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Chat => "Chat",
            Tab::Notifications => "Notifications",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Chat => 1,
            Tab::Notifications => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Largest scroll offset each scrollable view allowed when it was last drawn.
///
/// Written by the renderers, which are the only place the wrapped line count
/// and viewport height are known. `None` until the view has been drawn.
#[derive(Debug, Default)]
pub struct ScrollBounds {
    pub feed: Cell<Option<usize>>,
    pub transcript: Cell<Option<usize>>,
    pub notifications: Cell<Option<usize>>,
}

impl ScrollBounds {
    /// Clamp `offset` to the last recorded bound.
    fn clamp(bound: &Cell<Option<usize>>, offset: usize) -> usize {
        bound.get().map_or(offset, |max| offset.min(max))
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// Current tab.
    pub tab: Tab,

    pub config: Config,

    /// Sample content; notifications are mutated by "mark all read".
    pub fixtures: Fixtures,

    /// Tick counter for animations.
    pub tick: usize,

    /// Short-lived notice shown in the status bar.
    pub toast: Option<String>,

    toast_ttl: usize,

    // === Home ===
    pub feed_scroll: usize,

    // === Chat ===
    /// The live conversation.
    pub session: Session,

    /// Editor for the chat input. Mirrored into the session's input buffer.
    pub input_state: TextInputState,

    /// Lines scrolled up from the newest message (0 follows the conversation).
    pub transcript_scroll: usize,

    pub drawer: Drawer,

    /// Search box inside the drawer.
    pub drawer_search: TextInputState,

    /// Highlighted row among the filtered chats.
    pub drawer_selected: usize,

    scheduler: ReplyScheduler,

    replies: mpsc::UnboundedReceiver<ReplyReady>,

    // === Notifications ===
    pub notification_filter: NotificationFilter,

    pub notifications_scroll: usize,

    pub scroll_bounds: ScrollBounds,
}

impl App {
    /// Create a new app instance.
    pub fn new(config: Config, fixtures: Fixtures, provider: Arc<dyn ReplyProvider>) -> Self {
        let (scheduler, replies) = ReplyScheduler::new(provider, config.reply_delay());
        let session = Session::with_history(&fixtures.seed_messages);
        let drawer = Drawer::new(config.drawer_animation(), config.overlay_opacity);

        info!(
            provider = scheduler.provider_name(),
            seeded = session.len(),
            "app started"
        );

        Self {
            should_quit: false,
            show_help: false,
            tab: Tab::default(),
            config,
            fixtures,
            tick: 0,
            toast: None,
            toast_ttl: 0,
            feed_scroll: 0,
            session,
            input_state: TextInputState::new(),
            transcript_scroll: 0,
            drawer,
            drawer_search: TextInputState::new(),
            drawer_selected: 0,
            scheduler,
            replies,
            notification_filter: NotificationFilter::default(),
            notifications_scroll: 0,
            scroll_bounds: ScrollBounds::default(),
        }
    }

    /// Show a notice in the status bar for a while.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.toast = Some(message.into());
        self.toast_ttl = TOAST_TICKS;
    }

    /// Advance animations and apply replies that have arrived.
    pub fn tick(&mut self, elapsed: Duration) {
        self.tick = self.tick.wrapping_add(1);
        self.drawer.advance(elapsed);

        if self.toast_ttl > 0 {
            self.toast_ttl -= 1;
            if self.toast_ttl == 0 {
                self.toast = None;
            }
        }

        self.drain_replies();
    }

    /// Apply every reply that is ready without waiting. Returns how many were appended.
    pub fn drain_replies(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(ready) = self.replies.try_recv() {
            if ready.apply(&mut self.session).is_some() {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next reply and apply it. Returns `false` if it belonged to a replaced session.
    pub async fn wait_for_reply(&mut self) -> bool {
        match self.replies.recv().await {
            Some(ready) => ready.apply(&mut self.session).is_some(),
            None => false,
        }
    }

    /// Whether the suggested prompts should be offered.
    pub fn show_suggestions(&self) -> bool {
        !self.fixtures.suggested_prompts.is_empty()
            && self.session.len() <= self.config.suggestion_limit
    }

    /// Chats matching the drawer search.
    pub fn visible_chats(&self) -> Vec<&ChatSummary> {
        filter_chats(&self.fixtures.chats, self.drawer_search.content())
    }

    /// Notifications matching the active filter.
    pub fn visible_notifications(&self) -> Vec<&Notification> {
        filter_notifications(&self.fixtures.notifications, self.notification_filter)
    }

    pub fn unread_notifications(&self) -> usize {
        unread_count(&self.fixtures.notifications)
    }

    /// Handle a key press, routing text to whichever input has focus.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        if self.tab == Tab::Chat {
            if self.drawer.is_open() && !self.drawer.is_closing() {
                self.handle_drawer_key(key);
            } else {
                self.handle_chat_key(key);
            }
            return;
        }

        self.handle_action(key_to_action(key));
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        if let Some(action) = global_action(key) {
            self.handle_action(action);
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }

        match key.code {
            KeyCode::Enter => self.handle_action(Action::Send),
            KeyCode::Char(c) => {
                self.input_state.insert(c);
                self.sync_input();
            }
            KeyCode::Backspace => {
                self.input_state.backspace();
                self.sync_input();
            }
            KeyCode::Delete => {
                self.input_state.delete();
                self.sync_input();
            }
            KeyCode::Left => self.input_state.move_left(),
            KeyCode::Right => self.input_state.move_right(),
            KeyCode::Home => self.input_state.move_home(),
            KeyCode::End => self.input_state.move_end(),
            KeyCode::Up => {
                if self.input_state.is_empty() || self.input_state.browsing_history() {
                    self.input_state.history_prev();
                    self.sync_input();
                } else {
                    self.handle_action(Action::Up);
                }
            }
            KeyCode::Down => {
                if self.input_state.browsing_history() {
                    self.input_state.history_next();
                    self.sync_input();
                } else {
                    self.handle_action(Action::Down);
                }
            }
            _ => {}
        }
    }

    fn handle_drawer_key(&mut self, key: KeyEvent) {
        if let Some(action) = global_action(key) {
            if matches!(
                action,
                Action::Quit
                    | Action::Help
                    | Action::ToggleDrawer
                    | Action::NewChat
                    | Action::Back
            ) {
                self.handle_action(action);
            }
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }

        match key.code {
            KeyCode::Enter => self.handle_action(Action::Select),
            KeyCode::Up => self.handle_action(Action::Up),
            KeyCode::Down => self.handle_action(Action::Down),
            KeyCode::Char(c) => {
                self.drawer_search.insert(c);
                self.drawer_selected = 0;
            }
            KeyCode::Backspace => {
                self.drawer_search.backspace();
                self.drawer_selected = 0;
            }
            _ => {}
        }
    }

    /// Handle a left click at (`column`, `row`) on a frame covering `area`.
    ///
    /// Clicking the dimmed overlay beside an open drawer closes it.
    pub fn handle_click(&mut self, column: u16, row: u16, area: Rect) {
        if self.tab != Tab::Chat || !self.drawer.is_interactive() {
            return;
        }
        let (_, content, _) = shell_layout(area);
        let panel = drawer_rect(content, self.drawer.offset());
        let inside = |r: Rect| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        };
        if inside(content) && !inside(panel) {
            self.drawer.tap_overlay();
        }
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
            }
            Action::Help => self.show_help = !self.show_help,
            Action::Back => {
                if self.show_help {
                    self.show_help = false;
                } else if self.tab == Tab::Chat {
                    self.drawer.tap_overlay();
                }
            }
            Action::NextTab => self.switch_tab(self.tab.next()),
            Action::PrevTab => self.switch_tab(self.tab.prev()),
            Action::Tab(index) => {
                if let Some(tab) = Tab::from_index(index) {
                    self.switch_tab(tab);
                }
            }
            Action::Up => self.scroll_up(1),
            Action::Down => self.scroll_down(1),
            Action::PageUp => self.scroll_up(PAGE_LINES),
            Action::PageDown => self.scroll_down(PAGE_LINES),
            Action::Left => {
                if self.tab == Tab::Notifications {
                    self.set_filter(self.notification_filter.prev());
                }
            }
            Action::Right => {
                if self.tab == Tab::Notifications {
                    self.set_filter(self.notification_filter.next());
                }
            }
            Action::Select => {
                if self.tab == Tab::Chat && self.drawer.is_open() {
                    self.select_chat();
                }
            }
            Action::ToggleDrawer => {
                if self.tab == Tab::Chat {
                    self.drawer.toggle();
                }
            }
            Action::NewChat => {
                if self.tab == Tab::Chat {
                    self.new_chat();
                }
            }
            Action::Prompt(index) => {
                if self.tab == Tab::Chat && !self.drawer.is_open() {
                    self.select_prompt(index);
                }
            }
            Action::Send => {
                if self.tab == Tab::Chat {
                    self.send_message();
                }
            }
            Action::MarkAllRead => {
                if self.tab == Tab::Notifications {
                    let changed = mark_all_read(&mut self.fixtures.notifications);
                    if changed > 0 {
                        self.notify(format!("Marked {changed} as read"));
                    }
                }
            }
            Action::None => {}
        }
    }

    /// Submit the chat input. Whitespace-only input is left untouched.
    pub fn send_message(&mut self) {
        self.sync_input();
        if let Some(ticket) = self.session.submit_input() {
            self.input_state.commit();
            self.transcript_scroll = 0;
            self.scheduler.schedule(ticket);
        }
    }

    /// Prefill the chat input with suggested prompt `index`.
    pub fn select_prompt(&mut self, index: usize) {
        let Some(prompt) = self.fixtures.suggested_prompts.get(index) else {
            return;
        };
        self.session.select_suggested_prompt(prompt);
        self.input_state.set_content(self.session.input());
    }

    /// Replace the session with an empty one. Replies still in flight are dropped on arrival.
    pub fn new_chat(&mut self) {
        let pending = self.session.pending_replies();
        self.session = Session::new();
        self.input_state.clear();
        self.transcript_scroll = 0;
        self.drawer.close();
        debug!(dropped_pending = pending, "new chat started");
        self.notify("Started a new chat");
    }

    fn select_chat(&mut self) {
        let title = self
            .visible_chats()
            .get(self.drawer_selected)
            .map(|chat| chat.title.clone());
        if let Some(title) = title {
            self.drawer.close();
            self.notify(format!("Selected \"{title}\""));
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            debug!(from = self.tab.title(), to = tab.title(), "tab switched");
            self.tab = tab;
        }
    }

    fn set_filter(&mut self, filter: NotificationFilter) {
        self.notification_filter = filter;
        self.notifications_scroll = 0;
    }

    fn sync_input(&mut self) {
        self.session.set_input(self.input_state.content());
    }

    // Stored offsets are clamped to the last drawn bound before moving.
    fn scroll_up(&mut self, lines: usize) {
        let bounds = &self.scroll_bounds;
        match self.tab {
            Tab::Home => {
                self.feed_scroll =
                    ScrollBounds::clamp(&bounds.feed, self.feed_scroll).saturating_sub(lines);
            }
            Tab::Chat if self.drawer.is_open() => {
                self.drawer_selected = self.drawer_selected.saturating_sub(lines);
            }
            // The transcript counts up from the newest message.
            Tab::Chat => {
                self.transcript_scroll =
                    ScrollBounds::clamp(&bounds.transcript, self.transcript_scroll + lines);
            }
            Tab::Notifications => {
                self.notifications_scroll =
                    ScrollBounds::clamp(&bounds.notifications, self.notifications_scroll)
                        .saturating_sub(lines);
            }
        }
    }

    fn scroll_down(&mut self, lines: usize) {
        let bounds = &self.scroll_bounds;
        match self.tab {
            Tab::Home => {
                self.feed_scroll = ScrollBounds::clamp(&bounds.feed, self.feed_scroll + lines);
            }
            Tab::Chat if self.drawer.is_open() => {
                let last = self.visible_chats().len().saturating_sub(1);
                self.drawer_selected = (self.drawer_selected + lines).min(last);
            }
            Tab::Chat => {
                self.transcript_scroll =
                    ScrollBounds::clamp(&bounds.transcript, self.transcript_scroll)
                        .saturating_sub(lines);
            }
            Tab::Notifications => {
                self.notifications_scroll =
                    ScrollBounds::clamp(&bounds.notifications, self.notifications_scroll + lines);
            }
        }
    }
}
