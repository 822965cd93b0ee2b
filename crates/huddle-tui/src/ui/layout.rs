//! Layout helpers for the huddle TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Create a centered rect with fixed dimensions.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Split the screen into tab bar, content, and status bar.
pub fn shell_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Rect of the drawer panel: anchored left, `offset` of its full width visible.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn drawer_rect(area: Rect, offset: f32) -> Rect {
    let full = (area.width * 3 / 5).clamp(20.min(area.width), 48.min(area.width));
    let visible = (f32::from(full) * offset.clamp(0.0, 1.0)).round() as u16;
    Rect::new(area.x, area.y, visible, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fixed() {
        let area = Rect::new(0, 0, 80, 24);
        let r = centered_fixed(40, 10, area);
        assert_eq!(r, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_fixed_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 5);
        let r = centered_fixed(40, 10, area);
        assert_eq!((r.width, r.height), (10, 5));
    }

    #[test]
    fn test_shell_layout() {
        let (tabs, content, status) = shell_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(tabs.height, 1);
        assert_eq!(status.y, 23);
        assert_eq!(content.height, 22);
    }

    #[test]
    fn test_drawer_rect_follows_offset() {
        let area = Rect::new(0, 1, 80, 20);
        assert_eq!(drawer_rect(area, 0.0).width, 0);
        assert_eq!(drawer_rect(area, 1.0).width, 48);
        assert_eq!(drawer_rect(area, 0.5).width, 24);
        assert_eq!(drawer_rect(area, 1.0).y, 1);
    }
}
