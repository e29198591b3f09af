//! Text measurement helpers

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` display cells, ending in `…` when cut
pub fn truncate_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(truncate_ellipsis("Info", 10), "Info");
        assert_eq!(truncate_ellipsis("Info", 4), "Info");
    }

    #[test]
    fn test_long_text_gets_ellipsis() {
        assert_eq!(truncate_ellipsis("Introduction", 6), "Intro…");
        assert_eq!(truncate_ellipsis("Introduction", 0), "");
    }

    #[test]
    fn test_wide_chars_respect_cell_width() {
        // Each CJK char is two cells wide
        assert_eq!(truncate_ellipsis("日本語ページ", 5), "日本…");
    }
}
