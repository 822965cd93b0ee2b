//! Chat screen: assistant conversation plus the chats drawer.
//!
//! Layout (top to bottom): assistant header, transcript, suggested prompts
//! (only while the conversation is short), and the message input. When the
//! drawer is open the content behind it is dimmed in proportion to the
//! overlay opacity and the panel slides in from the left.

use crate::app::App;
use crate::screens::Screen;
use crate::text::{bubble_width, truncate_to_width, visual_width, wrap_text};
use crate::ui::drawer_rect;
use crate::ui::theme::{spinner, Palette, Styles, Symbols};
use crate::ui::widgets::KeyHint;
use huddle_engine::Message;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Placeholder shown in the empty message input.
pub const INPUT_PLACEHOLDER: &str = "Ask me anything...";

/// Prompts beyond this many have no function key.
const MAX_PROMPT_KEYS: usize = 9;

/// The Chat screen.
pub struct ChatScreen;

impl Screen for ChatScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let prompt_rows = if app.show_suggestions() {
            u16::try_from(app.fixtures.suggested_prompts.len().min(MAX_PROMPT_KEYS) + 1)
                .unwrap_or(0)
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(prompt_rows),
                Constraint::Length(3),
            ])
            .split(area);

        render_header(app, chunks[0], buf);
        render_transcript(app, chunks[1], buf);
        if prompt_rows > 0 {
            render_suggestions(app, chunks[2], buf);
        }
        render_input(app, chunks[3], buf);

        if app.drawer.offset() > 0.0 {
            dim_overlay(area, app.drawer.overlay_opacity(), buf);
            render_drawer(app, area, buf);
        }
    }

    fn hints(&self, app: &App) -> Vec<KeyHint> {
        if app.drawer.is_open() {
            vec![
                KeyHint::new("Type", "Search"),
                KeyHint::new("Up/Down", "Select"),
                KeyHint::new("Enter", "Open"),
                KeyHint::new("Esc", "Close"),
            ]
        } else {
            vec![
                KeyHint::new("Enter", "Send"),
                KeyHint::new("F1", "Prompt"),
                KeyHint::new("Ctrl+O", "Chats"),
                KeyHint::new("Ctrl+N", "New"),
            ]
        }
    }

    fn status_text(&self, app: &App) -> String {
        if app.session.is_typing() {
            format!("{} is typing", app.config.assistant_name)
        } else {
            format!("{} messages", app.session.len())
        }
    }
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Styles::border())
        .style(Styles::default());
    let inner = block.inner(area);
    block.render(area, buf);

    let status = if app.session.is_typing() {
        Span::styled(format!("  {} typing", spinner(app.tick)), Styles::active())
    } else {
        Span::styled(format!("  {}", Symbols::UNREAD), Style::default().fg(Palette::FOLLOW))
    };

    Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!(" {}", app.config.assistant_name), Styles::highlight()),
            status,
        ]),
        Line::styled(format!(" {}", app.config.assistant_tagline), Styles::dim()),
    ])
    .render(inner, buf);
}

fn render_transcript(app: &App, area: Rect, buf: &mut Buffer) {
    let width = usize::from(area.width);

    if app.session.is_empty() {
        app.scroll_bounds.transcript.set(Some(0));
        let lines = vec![
            Line::default(),
            Line::styled(
                format!("Start a conversation with {}", app.config.assistant_name),
                Styles::title(),
            )
            .centered(),
            Line::styled("Type a message or pick a suggestion below", Styles::dim()).centered(),
        ];
        Paragraph::new(lines).render(area, buf);
        return;
    }

    let mut lines = Vec::new();
    for message in app.session.messages() {
        message_lines(message, width, &mut lines);
    }
    if app.session.is_typing() {
        let dots = Symbols::TYPING[(app.tick / 5) % Symbols::TYPING.len()];
        lines.push(Line::from(Span::styled(
            format!(" {} is typing{dots} ", app.config.assistant_name),
            Styles::assistant_bubble(),
        )));
    }

    let height = usize::from(area.height);
    let max_scroll = lines.len().saturating_sub(height);
    app.scroll_bounds.transcript.set(Some(max_scroll));
    let start = max_scroll.saturating_sub(app.transcript_scroll);
    let visible: Vec<Line> = lines.into_iter().skip(start).take(height).collect();

    Paragraph::new(visible)
        .style(Styles::default())
        .render(area, buf);
}

/// A message bubble (padded, at most 80% of `width`), its time label, and a gap.
/// User messages sit on the right, assistant messages on the left.
fn message_lines(message: &Message, width: usize, out: &mut Vec<Line<'static>>) {
    let right = message.is_user();
    let style = if right {
        Styles::user_bubble()
    } else {
        Styles::assistant_bubble()
    };

    let wrapped = wrap_text(message.body(), bubble_width(width).saturating_sub(2).max(1));
    let inner = wrapped.iter().map(|l| visual_width(l)).max().unwrap_or(0);

    for text in wrapped {
        let fill = " ".repeat(inner.saturating_sub(visual_width(&text)));
        out.push(aligned(format!(" {text}{fill} "), style, right, width));
    }
    out.push(aligned(message.time_label(), Styles::dim(), right, width));
    out.push(Line::default());
}

fn aligned(text: String, style: Style, right: bool, width: usize) -> Line<'static> {
    if right {
        let pad = width.saturating_sub(visual_width(&text));
        Line::from(vec![Span::raw(" ".repeat(pad)), Span::styled(text, style)])
    } else {
        Line::from(Span::styled(text, style))
    }
}

fn render_suggestions(app: &App, area: Rect, buf: &mut Buffer) {
    let mut lines = vec![Line::styled(" Try asking:", Styles::dim())];
    for (i, prompt) in app
        .fixtures
        .suggested_prompts
        .iter()
        .take(MAX_PROMPT_KEYS)
        .enumerate()
    {
        lines.push(Line::from(vec![
            Span::styled(format!(" F{} ", i + 1), Styles::key_hint()),
            Span::styled(format!(" {prompt}"), Styles::default()),
        ]));
    }
    Paragraph::new(lines)
        .style(Styles::default())
        .render(area, buf);
}

fn render_input(app: &App, area: Rect, buf: &mut Buffer) {
    let focused = !app.drawer.is_open();
    let can_send = !app.input_state.content().trim().is_empty();

    let block = Block::default()
        .title(" Message ")
        .title_style(Styles::title())
        .title_bottom(
            Line::styled(
                " Enter to send ",
                if can_send {
                    Styles::highlight()
                } else {
                    Styles::faint()
                },
            )
            .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(if focused {
            Styles::border_active()
        } else {
            Styles::border()
        })
        .style(Styles::default());

    app.input_state
        .widget()
        .block(block)
        .focused(focused)
        .placeholder(INPUT_PLACEHOLDER)
        .render(area, buf);
}

/// Fade the content behind the drawer. Opacity 0.0 leaves it untouched.
fn dim_overlay(area: Rect, opacity: f32, buf: &mut Buffer) {
    let color = if opacity >= 0.25 {
        Palette::FAINT
    } else if opacity > 0.0 {
        Palette::DIM
    } else {
        return;
    };

    for y in area.y..area.y.saturating_add(area.height) {
        for x in area.x..area.x.saturating_add(area.width) {
            buf[(x, y)].set_fg(color);
        }
    }
}

/// Draw the drawer panel at full width off-screen, then copy the visible slice
/// so the panel slides in rather than being clipped.
fn render_drawer(app: &App, area: Rect, buf: &mut Buffer) {
    let full = drawer_rect(area, 1.0);
    let visible = drawer_rect(area, app.drawer.offset());
    if visible.width == 0 || full.width == 0 {
        return;
    }

    let mut panel = Buffer::empty(Rect::new(0, 0, full.width, full.height));
    render_drawer_panel(app, panel.area, &mut panel);

    let skip = full.width - visible.width;
    for y in 0..visible.height {
        for x in 0..visible.width {
            buf[(visible.x + x, visible.y + y)] = panel[(skip + x, y)].clone();
        }
    }
}

fn render_drawer_panel(app: &App, area: Rect, buf: &mut Buffer) {
    Clear.render(area, buf);

    let block = Block::default()
        .title(" Chats ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .style(Styles::default());
    let inner = block.inner(area);
    block.render(area, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    app.drawer_search
        .widget()
        .prompt("/ ")
        .focused(app.drawer.is_open() && !app.drawer.is_closing())
        .placeholder("Search chats...")
        .render(chunks[0], buf);

    Paragraph::new(Line::styled(
        "─".repeat(usize::from(chunks[1].width)),
        Styles::border(),
    ))
    .render(chunks[1], buf);

    render_chat_list(app, chunks[2], buf);

    Paragraph::new(Line::from(vec![
        Span::styled(" Ctrl+N ", Styles::key_hint()),
        Span::styled(" New Chat", Styles::active()),
    ]))
    .render(chunks[3], buf);
}

fn render_chat_list(app: &App, area: Rect, buf: &mut Buffer) {
    let chats = app.visible_chats();
    let width = usize::from(area.width);

    if chats.is_empty() {
        let query = app.drawer_search.content().trim();
        let text = if query.is_empty() {
            "No chats yet".to_string()
        } else {
            format!("No chats found for \"{query}\"")
        };
        Paragraph::new(vec![Line::default(), Line::styled(text, Styles::dim()).centered()])
            .render(area, buf);
        return;
    }

    let mut lines = Vec::new();
    for (i, chat) in chats.iter().enumerate() {
        let selected = i == app.drawer_selected;
        let marker = if selected { "> " } else { "  " };
        let badge = if chat.unread > 0 {
            format!(" {} ", chat.unread)
        } else {
            String::new()
        };

        let title_width = width.saturating_sub(2 + visual_width(&badge) + 1);
        let mut title = vec![
            Span::styled(
                marker,
                if selected {
                    Styles::highlight()
                } else {
                    Styles::default()
                },
            ),
            Span::styled(
                truncate_to_width(&chat.title, title_width),
                if selected {
                    Styles::highlight()
                } else {
                    Styles::strong()
                },
            ),
        ];
        if !badge.is_empty() {
            title.push(Span::raw(" "));
            title.push(Span::styled(badge, Styles::badge()));
        }
        lines.push(Line::from(title));

        let detail = format!("{} · {}", chat.last_message, chat.time);
        lines.push(Line::styled(
            format!("  {}", truncate_to_width(&detail, width.saturating_sub(2))),
            Styles::dim(),
        ));
        lines.push(Line::default());
    }

    // Keep the selection in view.
    let height = usize::from(area.height);
    let selected_bottom = app.drawer_selected * 3 + 2;
    let start = (selected_bottom + 1).saturating_sub(height);
    let visible: Vec<Line> = lines.into_iter().skip(start).take(height).collect();

    Paragraph::new(visible)
        .style(Styles::default())
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Tab;
    use crate::event::Action;
    use crate::test_utils::{create_test_app_at_tab, render_app_to_string, type_text};
    use crate::ui::shell_layout;
    use huddle_engine::Session;

    fn chat_app() -> App {
        create_test_app_at_tab(Tab::Chat)
    }

    #[test]
    fn test_header_and_seeded_transcript() {
        let app = chat_app();
        let text = render_app_to_string(&app);
        assert!(text.contains("AI Assistant"));
        assert!(text.contains("Always here to help"));
        assert!(text.contains("Try asking:"));
        assert!(text.contains("F1"));
        assert!(text.contains("Explain React Native hooks"));
        assert!(text.contains(INPUT_PLACEHOLDER));
        assert!(text.contains("4 messages"));
    }

    #[test]
    fn test_user_bubble_is_right_aligned() {
        let mut app = chat_app();
        app.session = Session::new();
        app.session.submit("ping");

        let text = render_app_to_string(&app);
        // The header reads "typing", which also contains "ping".
        let line = text.lines().find(|l| l.ends_with(" ping")).unwrap();
        // Bubble " ping " ends at column 80; its trailing pad is trimmed.
        assert_eq!(line.len(), 79);
        assert_eq!(line.trim_start(), "ping");
    }

    #[test]
    fn test_typing_indicator_shown_while_pending() {
        let mut app = chat_app();
        app.session = Session::new();
        app.session.submit("hello");

        let text = render_app_to_string(&app);
        assert!(text.contains("AI Assistant is typing"));
    }

    #[test]
    fn test_empty_session_prompt() {
        let mut app = chat_app();
        app.session = Session::new();
        let text = render_app_to_string(&app);
        assert!(text.contains("Start a conversation with AI Assistant"));
    }

    #[test]
    fn test_suggestions_hidden_for_long_conversation() {
        let mut app = chat_app();
        app.session.submit("one more");
        let text = render_app_to_string(&app);
        assert!(!text.contains("Try asking:"));
    }

    #[test]
    fn test_drawer_lists_chats() {
        let mut app = chat_app();
        app.handle_action(Action::ToggleDrawer);
        app.tick(app.config.drawer_animation());

        let text = render_app_to_string(&app);
        assert!(text.contains("Chats"));
        assert!(text.contains("> Bankroll Management Tips"));
        assert!(text.contains("New Chat"));
    }

    #[test]
    fn test_drawer_empty_search() {
        let mut app = chat_app();
        app.handle_action(Action::ToggleDrawer);
        app.tick(app.config.drawer_animation());
        type_text(&mut app, "zzz");

        let text = render_app_to_string(&app);
        assert!(text.contains("No chats found for \"zzz\""));
    }

    #[test]
    fn test_half_open_drawer_shows_right_edge_of_panel() {
        let mut app = chat_app();
        app.handle_action(Action::ToggleDrawer);
        app.tick(app.config.drawer_animation() / 2);
        assert!(app.drawer.is_animating());

        let (_, content, _) = shell_layout(Rect::new(0, 0, 80, 24));
        let full = drawer_rect(content, 1.0);
        let visible = drawer_rect(content, app.drawer.offset());
        assert_eq!((full.width, visible.width), (48, 24));

        let text = render_app_to_string(&app);
        let top: Vec<char> = text
            .lines()
            .nth(usize::from(content.y))
            .unwrap()
            .chars()
            .collect();
        let right = usize::from(visible.width) - 1;
        assert_eq!(top[right], '┐');
        // The left border and the title slid off-screen.
        assert_ne!(top[0], '┌');
        assert!(!top[..=right].iter().collect::<String>().contains("Chats"));
        // The footer lies entirely in the hidden half.
        assert!(!text.contains("New Chat"));
    }

    #[test]
    fn test_drawer_hidden_when_closed() {
        let app = chat_app();
        let text = render_app_to_string(&app);
        assert!(!text.contains("Search chats"));
    }
}
