use super::span::SourceSpan;

/// Extracts the text for a span, or `""` if the span does not fall on valid
/// char boundaries of `s`.
pub fn slice(s: &str, sp: SourceSpan) -> &str {
    s.get(sp.start..sp.end).unwrap_or("")
}

/// Narrows `sp` to the text inside it with surrounding whitespace removed.
///
/// An all-whitespace span collapses to an empty span at its end.
pub fn trimmed(s: &str, sp: SourceSpan) -> SourceSpan {
    let text = slice(s, sp);
    let lead = text.len() - text.trim_start().len();
    let body = text.trim();
    if body.is_empty() {
        return SourceSpan::new(sp.end, sp.end);
    }
    SourceSpan::new(sp.start + lead, sp.start + lead + body.len())
}

/// Extracts text for a span, truncating to at most `max` bytes with a "..."
/// suffix if needed.
///
/// Used for human-readable outlines and log messages.
pub fn preview(s: &str, sp: SourceSpan, max: usize) -> String {
    let text = slice(s, sp);
    if text.len() <= max {
        return text.to_string();
    }
    let mut cut = max;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &text[..cut])
}
