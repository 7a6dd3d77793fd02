use serde::Serialize;

/// The emphasis style carried by a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

/// One contiguous run of text carrying a single inline emphasis style.
///
/// `text` never includes the delimiters that selected the style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
}

impl Span {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Plain, text)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Bold, text)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Italic, text)
    }

    pub fn bold_italic(text: impl Into<String>) -> Self {
        Self::new(SpanKind::BoldItalic, text)
    }
}

/// Concatenates the text of `spans`, dropping their styles.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}
