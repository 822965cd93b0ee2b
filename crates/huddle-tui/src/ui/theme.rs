//! Theme and styling definitions for the huddle TUI.

use ratatui::style::{Color, Modifier, Style};

/// Color palette for the TUI.
pub struct Palette;

impl Palette {
    // Base colors
    pub const BG: Color = Color::Rgb(24, 24, 27);
    pub const FG: Color = Color::Rgb(228, 228, 231);
    pub const DIM: Color = Color::Rgb(156, 163, 175);
    pub const FAINT: Color = Color::Rgb(82, 82, 91);

    // Brand orange (#F86900)
    pub const ACCENT: Color = Color::Rgb(248, 105, 0);

    // Chat bubbles
    pub const USER_BUBBLE: Color = Color::Rgb(248, 105, 0);
    pub const ASSISTANT_BUBBLE: Color = Color::Rgb(39, 39, 42);

    // Status bar colors (high contrast)
    pub const STATUS_BG: Color = Color::Rgb(39, 39, 42);
    pub const STATUS_KEY_BG: Color = Color::Rgb(124, 52, 0);

    // Notification kinds
    pub const LIKE: Color = Color::Rgb(239, 68, 68);
    pub const COMMENT: Color = Color::Rgb(59, 130, 246);
    pub const FOLLOW: Color = Color::Rgb(16, 185, 129);
    pub const MENTION: Color = Color::Rgb(139, 92, 246);

    // Border colors
    pub const BORDER: Color = Color::Rgb(63, 63, 70);
    pub const BORDER_ACTIVE: Color = Color::Rgb(248, 105, 0);
}

/// Indicator symbols.
pub struct Symbols;

impl Symbols {
    pub const UNREAD: &'static str = "●";
    pub const SPINNER: [&'static str; 4] = ["|", "/", "-", "\\"];
    pub const TYPING: [&'static str; 3] = [".  ", ".. ", "..."];
}

/// Common styles used throughout the TUI.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::BG)
    }

    /// Dimmed text for secondary information.
    pub fn dim() -> Style {
        Style::default().fg(Palette::DIM).bg(Palette::BG)
    }

    /// Content behind the drawer overlay.
    pub fn faint() -> Style {
        Style::default().fg(Palette::FAINT).bg(Palette::BG)
    }

    /// Highlighted/selected item.
    pub fn highlight() -> Style {
        Style::default()
            .fg(Palette::ACCENT)
            .bg(Palette::BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Active/focused element.
    pub fn active() -> Style {
        Style::default().fg(Palette::ACCENT).bg(Palette::BG)
    }

    /// Title style.
    pub fn title() -> Style {
        Style::default()
            .fg(Palette::FG)
            .add_modifier(Modifier::BOLD)
    }

    /// Bold body text.
    pub fn strong() -> Style {
        Styles::default().add_modifier(Modifier::BOLD)
    }

    /// Bubble for messages the user sent.
    pub fn user_bubble() -> Style {
        Style::default().fg(Color::White).bg(Palette::USER_BUBBLE)
    }

    /// Bubble for assistant messages.
    pub fn assistant_bubble() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::ASSISTANT_BUBBLE)
    }

    /// Unread badge / marker.
    pub fn badge() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint style (for status bar) - bright on dark for visibility.
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Palette::FG)
            .bg(Palette::STATUS_KEY_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint label style - readable on status bar background.
    pub fn key_label() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::STATUS_BG)
    }

    /// Status bar background style.
    pub fn status_bar() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::STATUS_BG)
    }

    /// Border style for inactive elements.
    pub fn border() -> Style {
        Style::default().fg(Palette::BORDER)
    }

    /// Border style for active/focused elements.
    pub fn border_active() -> Style {
        Style::default().fg(Palette::BORDER_ACTIVE)
    }
}

/// Color for a notification kind marker.
pub fn notification_color(kind: huddle_engine::NotificationKind) -> Color {
    use huddle_engine::NotificationKind;
    match kind {
        NotificationKind::Like => Palette::LIKE,
        NotificationKind::Comment => Palette::COMMENT,
        NotificationKind::Follow => Palette::FOLLOW,
        NotificationKind::System => Palette::ACCENT,
        NotificationKind::Mention => Palette::MENTION,
    }
}

/// Spinner frame for the given tick.
pub fn spinner(tick: usize) -> &'static str {
    Symbols::SPINNER[tick % Symbols::SPINNER.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use huddle_engine::NotificationKind;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner(0), "|");
        assert_eq!(spinner(4), "|");
        assert_eq!(spinner(5), "/");
    }

    #[test]
    fn test_notification_colors_distinct() {
        assert_ne!(
            notification_color(NotificationKind::Like),
            notification_color(NotificationKind::Comment)
        );
        assert_eq!(notification_color(NotificationKind::System), Palette::ACCENT);
    }
}
