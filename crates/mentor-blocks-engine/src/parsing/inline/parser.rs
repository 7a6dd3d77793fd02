use super::{
    cursor::Cursor,
    kinds::Emphasis,
    types::{Span, SpanKind},
};

/// Tokenizes one line of mentor prose into styled [`Span`]s.
///
/// At every position the forms in [`Emphasis::PRECEDENCE`] are tried in
/// order. A form matches when its closing delimiter appears later on the same
/// line with at least one character in between; the first such closer wins.
/// Matched content is emitted verbatim, so delimiters inside it are never
/// reinterpreted. A delimiter with no partner is ordinary text.
///
/// Concatenating the returned span texts gives back `line` minus the
/// delimiters of the matched forms. Adjacent plain runs are merged, and an
/// empty line yields no spans.
pub fn tokenize(line: &str) -> Vec<Span> {
    let mut cur = Cursor::new(line);
    let mut out = SpanSink::default();
    let mut text_start = cur.pos();

    while !cur.eof() {
        let at = cur.pos();
        if let Some(span) = try_parse_emphasis(&mut cur) {
            out.plain(&line[text_start..at]);
            out.push(span);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    out.plain(&line[text_start..]);
    out.finish()
}

/// Tokenizes multi-line text, one span list per line.
///
/// Lines are split on `\n` and a trailing `\r` is dropped. The caller places
/// its own line-break marker between the returned lines.
pub fn tokenize_text(text: &str) -> Vec<Vec<Span>> {
    if text.is_empty() {
        return vec![];
    }
    text.split('\n')
        .map(|line| tokenize(line.strip_suffix('\r').unwrap_or(line)))
        .collect()
}

/// Attempts each emphasis form at the current position.
///
/// On success the cursor sits just past the closing delimiter. On failure the
/// cursor is left untouched.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<Span> {
    if !cur.peek().is_some_and(Emphasis::is_opener_byte) {
        return None;
    }

    let limit = cur.line_end();
    for form in Emphasis::PRECEDENCE {
        if !cur.starts_with(form.open.as_bytes()) {
            continue;
        }
        let inner_start = cur.pos() + form.open.len();
        // Closer search starts one byte in: content is never empty.
        let Some(inner_end) = cur.find(form.close.as_bytes(), inner_start + 1, limit) else {
            continue;
        };
        let text = &cur.s[inner_start..inner_end];
        cur.bump_n(inner_end + form.close.len() - cur.pos());
        return Some(Span::new(form.kind, text));
    }
    None
}

/// Collects spans, merging consecutive plain text.
#[derive(Default)]
struct SpanSink {
    spans: Vec<Span>,
}

impl SpanSink {
    fn plain(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(last) = self.spans.last_mut()
            && last.kind == SpanKind::Plain
        {
            last.text.push_str(text);
            return;
        }
        self.spans.push(Span::plain(text));
    }

    fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    fn finish(self) -> Vec<Span> {
        self.spans
    }
}
