//! Home screen: the social feed.

use crate::app::App;
use crate::screens::Screen;
use crate::text::wrap_text;
use crate::ui::theme::{Palette, Styles};
use crate::ui::widgets::KeyHint;
use huddle_engine::Post;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// The Home screen (feed of posts).
pub struct HomeScreen;

impl Screen for HomeScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Feed ")
            .title_style(Styles::title())
            .borders(Borders::ALL)
            .border_style(Styles::border())
            .style(Styles::default());
        let inner = block.inner(area);
        block.render(area, buf);

        if app.fixtures.posts.is_empty() {
            app.scroll_bounds.feed.set(Some(0));
            Paragraph::new(vec![
                Line::default(),
                Line::styled("  Nothing here yet", Styles::dim()),
            ])
            .render(inner, buf);
            return;
        }

        let width = usize::from(inner.width);
        let lines: Vec<Line> = app
            .fixtures
            .posts
            .iter()
            .flat_map(|post| post_lines(post, width))
            .collect();

        let height = usize::from(inner.height);
        let max_scroll = lines.len().saturating_sub(height);
        app.scroll_bounds.feed.set(Some(max_scroll));
        let start = app.feed_scroll.min(max_scroll);
        let visible: Vec<Line> = lines.into_iter().skip(start).take(height).collect();

        Paragraph::new(visible)
            .style(Styles::default())
            .render(inner, buf);
    }

    fn hints(&self, _app: &App) -> Vec<KeyHint> {
        vec![
            KeyHint::new("Tab", "Switch"),
            KeyHint::new("j/k", "Scroll"),
            KeyHint::new("?", "Help"),
            KeyHint::new("q", "Quit"),
        ]
    }

    fn status_text(&self, app: &App) -> String {
        format!("{} posts", app.fixtures.posts.len())
    }
}

/// A post card: byline, wrapped body, engagement counts, separator.
fn post_lines(post: &Post, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(format!(" {}", post.username), Styles::strong()),
        Span::styled(format!(" {} · {}", post.handle, post.time), Styles::dim()),
    ])];

    for text in wrap_text(&post.content, width.saturating_sub(2)) {
        lines.push(Line::styled(format!(" {text}"), Styles::default()));
    }

    lines.push(Line::from(vec![
        Span::styled(" ♥ ", Style::default().fg(Palette::LIKE)),
        Span::styled(post.likes.to_string(), Styles::dim()),
        Span::styled("   ✎ ", Style::default().fg(Palette::COMMENT)),
        Span::styled(post.comments.to_string(), Styles::dim()),
        Span::styled("   ↻ ", Style::default().fg(Palette::FOLLOW)),
        Span::styled(post.reposts.to_string(), Styles::dim()),
    ]));
    lines.push(Line::styled("─".repeat(width), Styles::border()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Tab;
    use crate::test_utils::{
        create_test_app_at_tab, render_app_to_string, render_app_to_string_sized,
    };

    #[test]
    fn test_feed_renders_posts() {
        let app = create_test_app_at_tab(Tab::Home);
        let text = render_app_to_string(&app);
        assert!(text.contains("Feed"));
        assert!(text.contains("john_doe @johndoe · 2h"));
        assert!(text.contains("♥ 24"));
        assert!(text.contains("4 posts"));
    }

    #[test]
    fn test_feed_scroll_moves_window() {
        let mut app = create_test_app_at_tab(Tab::Home);
        app.feed_scroll = 100;
        let text = render_app_to_string_sized(&app, 80, 14);
        assert!(!text.contains("john_doe"));
        assert!(text.contains("design_lover"));
    }

    #[test]
    fn test_empty_feed() {
        let mut app = create_test_app_at_tab(Tab::Home);
        app.fixtures.posts.clear();
        let text = render_app_to_string(&app);
        assert!(text.contains("Nothing here yet"));
    }
}
