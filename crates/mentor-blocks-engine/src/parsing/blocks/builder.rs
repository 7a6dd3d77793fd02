use crate::parsing::source::SourceSpan;

use super::{
    classify::LineClass,
    kinds::ControlTag,
    types::{BlockType, RawBlock},
};

#[derive(Debug, Clone)]
enum ScanState {
    /// Before the first control tag: untyped text.
    ScanningText { start: usize },
    /// Inside the region opened by a control tag.
    InBlock {
        tag: ControlTag,
        tag_span: SourceSpan,
        start: usize,
    },
}

/// Splits a line stream into top-level regions at control tags.
///
/// Each region runs from the end of its tag to the start of the next tag
/// line. Regions are emitted even when empty; dropping empty content is left
/// to the resolve pass, which sees the trimmed text.
pub struct SegmentBuilder {
    state: ScanState,
    out: Vec<RawBlock>,
}

impl SegmentBuilder {
    pub fn new() -> Self {
        Self {
            state: ScanState::ScanningText { start: 0 },
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        let (Some(tag), Some(tag_span)) = (c.tag.clone(), c.tag_span()) else {
            return;
        };
        self.flush(c.line.start);
        self.state = ScanState::InBlock {
            tag,
            tag_span,
            start: tag_span.end,
        };
    }

    pub fn finish(mut self, end: usize) -> Vec<RawBlock> {
        // EOF flush
        self.flush(end);
        self.out
    }

    fn flush(&mut self, end: usize) {
        let raw = match &self.state {
            ScanState::ScanningText { start } => RawBlock {
                kind: BlockType::Text,
                title: None,
                tag: None,
                content: SourceSpan::new(*start, end),
            },
            ScanState::InBlock {
                tag,
                tag_span,
                start,
            } => RawBlock {
                kind: tag.kind,
                title: tag.title.clone(),
                tag: Some(*tag_span),
                content: SourceSpan::new(*start, end.max(*start)),
            },
        };
        self.out.push(raw);
    }
}

impl Default for SegmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
