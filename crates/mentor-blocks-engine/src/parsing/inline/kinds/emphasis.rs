use crate::parsing::inline::types::SpanKind;

/// An emphasis form: the delimiter pair that selects a [`SpanKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emphasis {
    pub open: &'static str,
    pub close: &'static str,
    pub kind: SpanKind,
}

impl Emphasis {
    /// `*_text_*`
    pub const BOLD_ITALIC: Emphasis = Emphasis {
        open: "*_",
        close: "_*",
        kind: SpanKind::BoldItalic,
    };

    /// `*text*`
    pub const BOLD: Emphasis = Emphasis {
        open: "*",
        close: "*",
        kind: SpanKind::Bold,
    };

    /// `_text_`
    pub const ITALIC: Emphasis = Emphasis {
        open: "_",
        close: "_",
        kind: SpanKind::Italic,
    };

    /// Forms tried at each position, highest precedence first.
    ///
    /// Longer openers sharing a prefix with shorter ones must come first so
    /// that `*_x_*` never degrades into a bold span around `_x_`.
    pub const PRECEDENCE: [Emphasis; 3] = [Self::BOLD_ITALIC, Self::BOLD, Self::ITALIC];

    /// True if `b` can start any emphasis form.
    pub fn is_opener_byte(b: u8) -> bool {
        b == b'*' || b == b'_'
    }
}
