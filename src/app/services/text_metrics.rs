use std::path::Path;

use chrono::{Local, NaiveDateTime};

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Caret line and column for a byte position, both 1-indexed.
///
/// The column counts characters since the start of the line, not bytes.
/// Positions past the end of the text (or inside a multi-byte character)
/// are clamped to the nearest valid boundary.
pub fn caret_position(text: &str, byte_pos: usize) -> (usize, usize) {
    let mut pos = byte_pos.min(text.len());
    while pos > 0 && !text.is_char_boundary(pos) {
        pos -= 1;
    }
    let before = &text[..pos];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// Character count of the whole buffer, newlines included.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Whitespace-delimited word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// The fixed status-bar string for a buffer and caret position.
pub fn status_line(text: &str, byte_pos: usize) -> String {
    let (line, column) = caret_position(text, byte_pos);
    format!(
        "Line {}, Column {} | {} characters | {} words",
        line,
        column,
        char_count(text),
        word_count(text)
    )
}

/// Format a timestamp the way the Time/Date command inserts it:
/// `HH:MM AM/PM DD/MM/YYYY`.
pub fn format_timestamp(when: &NaiveDateTime) -> String {
    when.format("%I:%M %p %d/%m/%Y").to_string()
}

/// The current local time in the Time/Date insertion format.
pub fn local_timestamp() -> String {
    format_timestamp(&Local::now().naive_local())
}
