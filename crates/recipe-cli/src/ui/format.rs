//! String formatting utilities for UI rendering.

use chrono::{DateTime, Utc};

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Pad a string to a fixed width (right-aligned).
pub fn pad_left(s: &str, width: usize) -> String {
    let char_count = s.chars().count();
    if char_count >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - char_count), s)
    }
}

/// Format a datetime for display.
pub fn format_datetime(dt: &DateTime<Utc>, pretty: bool) -> String {
    if pretty {
        dt.format("%Y-%m-%d %H:%M UTC").to_string()
    } else {
        dt.to_rfc3339()
    }
}

/// Sanitize a string for single-line output (replace newlines with spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

/// Scale `count` against `max` to a bar of at most `width` cells.
///
/// Non-zero counts always get at least one cell.
pub fn bar_length(count: usize, max: usize, width: usize) -> usize {
    if count == 0 || max == 0 || width == 0 {
        return 0;
    }
    ((count * width) / max).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_very_short_max() {
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_pad_left() {
        assert_eq!(pad_left("42", 5), "   42");
        assert_eq!(pad_left("hello", 3), "hello");
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_datetime(&dt, true), "2024-01-02 03:04 UTC");
        assert_eq!(format_datetime(&dt, false), "2024-01-02T03:04:05+00:00");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("hello\nworld"), "hello world");
        assert_eq!(single_line("no newlines"), "no newlines");
    }

    #[test]
    fn test_bar_length() {
        assert_eq!(bar_length(4, 4, 40), 40);
        assert_eq!(bar_length(2, 4, 40), 20);
        assert_eq!(bar_length(1, 100, 40), 1);
        assert_eq!(bar_length(0, 4, 40), 0);
    }
}
