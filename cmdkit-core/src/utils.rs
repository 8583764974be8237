// cmdkit-core/src/utils.rs
//! General utility functions.

/// Shortens text for log output: keeps at most `max_lines` lines and
/// `max_chars` characters, marking any cut with an ellipsis.
/// Returns `<no output>` for blank text.
pub fn preview(text: &str, max_lines: usize, max_chars: usize) -> String {
    if text.trim().is_empty() {
        return "<no output>".to_string();
    }
    let mut lines = text.lines();
    let head = lines.by_ref().take(max_lines).collect::<Vec<_>>().join("\n");
    let cut_lines = lines.next().is_some();

    if head.chars().count() > max_chars {
        let kept: String = head.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else if cut_lines {
        format!("{}\n...", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text() {
        assert_eq!(preview("hello\n", 3, 100), "hello");
    }

    #[test]
    fn test_preview_blank() {
        assert_eq!(preview("", 3, 100), "<no output>");
        assert_eq!(preview(" \n\t", 3, 100), "<no output>");
    }

    #[test]
    fn test_preview_line_limit() {
        assert_eq!(preview("a\nb\nc\nd", 2, 100), "a\nb\n...");
    }

    #[test]
    fn test_preview_char_limit() {
        assert_eq!(preview("hello world", 3, 8), "hello...");
        assert_eq!(preview("你好世界你好", 1, 5), "你好...");
    }
}
