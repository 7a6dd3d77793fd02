use super::span::SourceSpan;

/// A reference to a single line of the input with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of this line (includes the newline if present).
    pub span: SourceSpan,
    /// The raw line text, newline included.
    pub text: &'a str,
}

impl<'a> LineRef<'a> {
    /// The line without its `\n` / `\r\n` terminator.
    pub fn content(&self) -> &'a str {
        self.text.trim_end_matches(['\r', '\n'])
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Newline characters are kept on each line so that consecutive spans tile
/// the input exactly. `base` is added to every span, for callers that scan a
/// sub-region of a larger turn.
pub fn lines_with_spans(s: &str, base: usize) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = base;
    s.split_inclusive('\n').map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: SourceSpan::new(start, offset),
            text: line,
        }
    })
}
