use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::BlockType;

/// A recognized `[TAG]` or `[TAG title="..."]` control marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlTag {
    pub kind: BlockType,
    pub title: Option<String>,
    /// Bytes from the start of the line through the closing `]`.
    pub len: usize,
}

/// Outcome of looking for a control tag at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagMatch {
    Tag(ControlTag),
    /// Bracket markup shaped like a tag whose name is not in the vocabulary.
    Unknown(String),
    None,
}

impl ControlTag {
    pub const OPEN: char = '[';

    fn pattern() -> &'static Regex {
        static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
        TAG_REGEX.get_or_init(|| {
            Regex::new(
                r#"^[ \t]*\[([A-Z][A-Z_]*)(?:[ \t]+title="([^"\r\n]*)")?[ \t]*\](?:[ \t\r\n]|$)"#,
            )
            .expect("Invalid control tag regex")
        })
    }

    /// Matches a control tag anchored at the start of `line`.
    ///
    /// Leading spaces or tabs are allowed. The closing `]` must be followed by
    /// whitespace or the end of the line, so a word like `[MCQ]s` is prose.
    /// Anything after the `]` is left for the block's content.
    pub fn match_line(line: &str) -> TagMatch {
        if !line.trim_start().starts_with(Self::OPEN) {
            return TagMatch::None;
        }
        let Some(caps) = Self::pattern().captures(line) else {
            return TagMatch::None;
        };
        let (Some(full), Some(name)) = (caps.get(0), caps.get(1)) else {
            return TagMatch::None;
        };
        match BlockType::from_tag(name.as_str()) {
            Some(kind) => TagMatch::Tag(ControlTag {
                kind,
                title: caps.get(2).map(|t| t.as_str().to_string()),
                len: full.as_str().trim_end_matches([' ', '\t', '\r', '\n']).len(),
            }),
            None => TagMatch::Unknown(name.as_str().to_string()),
        }
    }
}
