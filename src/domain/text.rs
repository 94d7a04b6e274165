use unicode_width::UnicodeWidthStr;

/// Shorten a single line to at most `width` columns, ending with `…` when cut.
pub fn ellipsize(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthStr::width(c.encode_utf8(&mut [0; 4]));
        if used + w > width - 1 {
            break;
        }
        used += w;
        result.push(c);
    }
    result.push('…');
    result
}

/// Terminal columns taken by `s`, saturating at `u16::MAX`
pub fn column_width(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

/// Horizontal bar for a percentage, e.g. `█████░░░░░` for 50% over 10 cells.
pub fn level_bar(level: u8, width: usize) -> String {
    let level = usize::from(level.min(100));
    let filled = (level * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
