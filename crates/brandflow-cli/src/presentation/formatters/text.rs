pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Columns a chip label occupies; labels stay within single-width characters
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("Price", 10), "Price");
        assert_eq!(truncate("Marketplace Status", 10), "Marketp...");
    }

    #[test]
    fn test_display_width_counts_characters() {
        assert_eq!(display_width("Price ≥ $5"), 10);
    }
}
