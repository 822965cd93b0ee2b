//! Text wrapping for message bubbles and cards.

/// Wrap plain text to `width` columns. Explicit newlines are kept.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}

/// Maximum bubble width: 80% of the available columns.
pub fn bubble_width(available: usize) -> usize {
    (available * 4 / 5).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("the quick brown fox", 10);
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_keeps_newlines() {
        let lines = wrap_text("one\n\ntwo", 20);
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn test_bubble_width() {
        assert_eq!(bubble_width(50), 40);
        assert_eq!(bubble_width(0), 1);
    }
}
