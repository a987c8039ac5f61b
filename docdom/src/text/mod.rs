use std::sync::LazyLock;

use regex::Regex;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to at most `max_width` cells, ending in `…` when shortened.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let Some(budget) = max_width.checked_sub(1) else {
        return String::new();
    };

    let mut used = 0;
    let mut out: String = s
        .chars()
        .take_while(|&c| {
            used += char_width(c);
            used <= budget
        })
        .collect();
    out.push('…');
    out
}

/// Pad with spaces up to `width` display cells.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - current);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width - current));
    out
}

/// Runs of characters outside `[A-Za-z0-9]`, the ASCII reading of `[\W_]+`.
static SLUG_SEPARATOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new("[^A-Za-z0-9]+").ok());

/// Replace every run of characters outside `[A-Za-z0-9]` (underscores
/// included) with a single `_`.
pub fn slugify(s: &str) -> String {
    match SLUG_SEPARATOR.as_ref() {
        Some(separator) => separator.replace_all(s, "_").into_owned(),
        None => s.to_string(),
    }
}
