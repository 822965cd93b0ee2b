//! Notifications screen: filter row and notification cards.

use crate::app::App;
use crate::screens::Screen;
use crate::text::{visual_width, wrap_text};
use crate::ui::theme::{notification_color, Palette, Styles, Symbols};
use crate::ui::widgets::KeyHint;
use huddle_engine::{unread_summary, Notification, NotificationFilter};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// The Notifications screen.
pub struct NotificationsScreen;

impl Screen for NotificationsScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(area);

        render_header(app, chunks[0], buf);
        render_filters(app, chunks[1], buf);
        render_list(app, chunks[2], buf);
    }

    fn hints(&self, _app: &App) -> Vec<KeyHint> {
        vec![
            KeyHint::new("h/l", "Filter"),
            KeyHint::new("a", "Mark all read"),
            KeyHint::new("j/k", "Scroll"),
            KeyHint::new("?", "Help"),
        ]
    }

    fn status_text(&self, app: &App) -> String {
        format!("{} shown", app.visible_notifications().len())
    }
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Styles::border())
        .style(Styles::default());
    let inner = block.inner(area);
    block.render(area, buf);

    Paragraph::new(vec![
        Line::styled(" Notifications", Styles::title()),
        Line::styled(
            format!(" {}", unread_summary(app.unread_notifications())),
            Styles::dim(),
        ),
    ])
    .render(inner, buf);
}

fn render_filters(app: &App, area: Rect, buf: &mut Buffer) {
    let mut spans = vec![Span::raw(" ")];
    for filter in NotificationFilter::ALL {
        let style = if filter == app.notification_filter {
            Styles::badge()
        } else {
            Styles::dim()
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(spans))
        .style(Styles::default())
        .render(area, buf);
}

fn render_list(app: &App, area: Rect, buf: &mut Buffer) {
    let notifications = app.visible_notifications();

    if notifications.is_empty() {
        app.scroll_bounds.notifications.set(Some(0));
        let detail = if app.notification_filter == NotificationFilter::All {
            "You're all caught up!"
        } else {
            "Nothing matches this filter"
        };
        Paragraph::new(vec![
            Line::default(),
            Line::styled("No notifications", Styles::title()).centered(),
            Line::styled(detail, Styles::dim()).centered(),
        ])
        .render(area, buf);
        return;
    }

    let width = usize::from(area.width);
    let lines: Vec<Line> = notifications
        .iter()
        .flat_map(|n| notification_lines(n, width))
        .collect();

    let height = usize::from(area.height);
    let max_scroll = lines.len().saturating_sub(height);
    app.scroll_bounds.notifications.set(Some(max_scroll));
    let start = app.notifications_scroll.min(max_scroll);
    let visible: Vec<Line> = lines.into_iter().skip(start).take(height).collect();

    Paragraph::new(visible)
        .style(Styles::default())
        .render(area, buf);
}

fn notification_lines(notification: &Notification, width: usize) -> Vec<Line<'static>> {
    let glyph = format!(" {} ", notification.kind.glyph());
    let unread = if notification.read {
        String::new()
    } else {
        format!(" {}", Symbols::UNREAD)
    };
    let used = visual_width(&glyph)
        + visual_width(&notification.title)
        + visual_width(&unread)
        + visual_width(&notification.time)
        + 1;
    let gap = " ".repeat(width.saturating_sub(used).max(1));

    let mut lines = vec![Line::from(vec![
        Span::styled(
            glyph,
            Style::default().fg(notification_color(notification.kind)),
        ),
        Span::styled(
            notification.title.clone(),
            if notification.read {
                Styles::default()
            } else {
                Styles::strong()
            },
        ),
        Span::styled(unread, Style::default().fg(Palette::ACCENT)),
        Span::raw(gap),
        Span::styled(notification.time.clone(), Styles::dim()),
    ])];

    for text in wrap_text(&notification.message, width.saturating_sub(4)) {
        lines.push(Line::styled(format!("   {text}"), Styles::dim()));
    }
    lines.push(Line::default());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Tab;
    use crate::event::Action;
    use crate::test_utils::{create_test_app_at_tab, render_app_to_string};

    #[test]
    fn test_renders_summary_and_cards() {
        let app = create_test_app_at_tab(Tab::Notifications);
        let text = render_app_to_string(&app);
        assert!(text.contains("2 unread notifications"));
        assert!(text.contains("New Like ●"));
        assert!(text.contains("2 minutes ago"));
        assert!(text.contains("Unread"));
    }

    #[test]
    fn test_filter_narrows_list() {
        let mut app = create_test_app_at_tab(Tab::Notifications);
        app.notification_filter = NotificationFilter::Follows;
        let text = render_app_to_string(&app);
        assert!(text.contains("New Follower"));
        assert!(!text.contains("New Like"));
        assert!(text.contains("1 shown"));
    }

    #[test]
    fn test_all_read_empty_unread_filter() {
        let mut app = create_test_app_at_tab(Tab::Notifications);
        app.handle_action(Action::MarkAllRead);
        app.notification_filter = NotificationFilter::Unread;
        let text = render_app_to_string(&app);
        assert!(text.contains("You're all caught up"));
        assert!(text.contains("No notifications"));
        assert!(text.contains("Nothing matches this filter"));
    }
}
