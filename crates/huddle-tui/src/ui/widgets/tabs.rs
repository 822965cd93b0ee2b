//! Tab bar widget.

use crate::ui::theme::{Palette, Styles};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

/// A horizontal tab bar with optional unread badges.
#[derive(Debug, Clone)]
pub struct TabBar<'a> {
    titles: Vec<&'a str>,
    badges: Vec<usize>,
    selected: usize,
}

impl<'a> TabBar<'a> {
    /// Create a new tab bar.
    pub fn new(titles: Vec<&'a str>) -> Self {
        Self {
            titles,
            badges: Vec::new(),
            selected: 0,
        }
    }

    /// Set the selected tab index.
    #[must_use]
    pub fn select(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }

    /// Badge counts per tab (0 hides the badge).
    #[must_use]
    pub fn badges(mut self, badges: Vec<usize>) -> Self {
        self.badges = badges;
        self
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        for x in area.x..area.x.saturating_add(area.width) {
            buf[(x, area.y)].set_char(' ').set_bg(Palette::BG);
        }

        let mut spans = vec![Span::styled(" ", Styles::default())];
        for (i, title) in self.titles.iter().enumerate() {
            let is_selected = i == self.selected;

            if i > 0 {
                spans.push(Span::styled(" | ", Styles::dim()));
            }

            spans.push(Span::styled(
                format!("[{}] ", i + 1),
                if is_selected {
                    Styles::highlight()
                } else {
                    Styles::dim()
                },
            ));
            spans.push(Span::styled(
                *title,
                if is_selected {
                    Styles::highlight()
                } else {
                    Styles::default()
                },
            ));

            if let Some(&count) = self.badges.get(i) {
                if count > 0 {
                    spans.push(Span::styled(" ", Styles::default()));
                    spans.push(Span::styled(format!(" {count} "), Styles::badge()));
                }
            }
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
