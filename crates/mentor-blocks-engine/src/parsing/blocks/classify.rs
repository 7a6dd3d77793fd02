use log::{debug, trace};

use crate::parsing::source::{LineRef, SourceSpan};

use super::kinds::{ControlTag, TagMatch};

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line, newline included.
    pub line: SourceSpan,
    /// The control tag opening this line, if it is a recognized one.
    pub tag: Option<ControlTag>,
}

impl LineClass {
    /// Span of the tag markup, from line start through `]`.
    pub fn tag_span(&self) -> Option<SourceSpan> {
        self.tag
            .as_ref()
            .map(|t| SourceSpan::new(self.line.start, self.line.start + t.len))
    }
}

/// Classifies individual lines for the tag pass.
pub struct TagLineClassifier;

impl TagLineClassifier {
    pub fn classify(&self, lr: &LineRef<'_>) -> LineClass {
        let tag = match ControlTag::match_line(lr.content()) {
            TagMatch::Tag(tag) => {
                trace!("control tag {} at byte {}", tag.kind, lr.span.start);
                Some(tag)
            }
            TagMatch::Unknown(name) => {
                debug!(
                    "unrecognized tag [{name}] at byte {}, keeping as text",
                    lr.span.start
                );
                None
            }
            TagMatch::None => None,
        };
        LineClass { line: lr.span, tag }
    }
}
