use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::parsing::{source::SourceSpan, tables::TablePayload};

/// The closed set of block types a mentor turn is parsed into.
///
/// `Text` and `MarkdownTable` are synthesized by the parser; every other
/// variant is selected by a `[TAG]` control marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    Text,
    Mentor,
    Concept,
    Mcq,
    FeedbackCorrect,
    FeedbackWrong,
    Clarification,
    RecheckMcq,
    FinalAnswer,
    Takeaways,
    ConceptTable,
    MarkdownTable,
}

impl BlockType {
    /// Types that may appear as control tags, in vocabulary order.
    pub const AUTHORED: [BlockType; 10] = [
        BlockType::Mentor,
        BlockType::Concept,
        BlockType::Mcq,
        BlockType::FeedbackCorrect,
        BlockType::FeedbackWrong,
        BlockType::Clarification,
        BlockType::RecheckMcq,
        BlockType::FinalAnswer,
        BlockType::Takeaways,
        BlockType::ConceptTable,
    ];

    /// The canonical tag name, e.g. `FEEDBACK_CORRECT`.
    pub fn as_tag(self) -> &'static str {
        match self {
            BlockType::Text => "TEXT",
            BlockType::Mentor => "MENTOR",
            BlockType::Concept => "CONCEPT",
            BlockType::Mcq => "MCQ",
            BlockType::FeedbackCorrect => "FEEDBACK_CORRECT",
            BlockType::FeedbackWrong => "FEEDBACK_WRONG",
            BlockType::Clarification => "CLARIFICATION",
            BlockType::RecheckMcq => "RECHECK_MCQ",
            BlockType::FinalAnswer => "FINAL_ANSWER",
            BlockType::Takeaways => "TAKEAWAYS",
            BlockType::ConceptTable => "CONCEPT_TABLE",
            BlockType::MarkdownTable => "MARKDOWN_TABLE",
        }
    }

    /// True if the type can be selected by a control tag.
    pub fn is_authored(self) -> bool {
        !matches!(self, BlockType::Text | BlockType::MarkdownTable)
    }

    /// Looks up an authorable tag name. Matching is exact and case-sensitive.
    pub fn from_tag(name: &str) -> Option<BlockType> {
        Self::AUTHORED.into_iter().find(|t| t.as_tag() == name)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown block tag: {0}")]
pub struct UnknownBlockType(pub String);

impl FromStr for BlockType {
    type Err = UnknownBlockType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownBlockType(s.to_string()))
    }
}

/// Raw prose, not yet tokenized into inline spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextPayload {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Text(TextPayload),
    Table(TablePayload),
}

/// One typed unit of a parsed mentor turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub kind: BlockType,
    /// The `title="..."` attribute of the control tag, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub payload: Payload,
    /// Byte range of the input this block was built from.
    pub source: SourceSpan,
}

impl Block {
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Text(p) => Some(&p.text),
            Payload::Table(_) => None,
        }
    }

    pub fn table(&self) -> Option<&TablePayload> {
        match &self.payload {
            Payload::Table(t) => Some(t),
            Payload::Text(_) => None,
        }
    }
}

/// A top-level region found by the tag pass, before table detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    pub kind: BlockType,
    pub title: Option<String>,
    /// Span of the control tag markup; `None` for text before the first tag.
    pub tag: Option<SourceSpan>,
    /// Untrimmed content span, from the end of the tag to the next tag.
    pub content: SourceSpan,
}

/// How `CONCEPT_TABLE` content is turned into a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConceptTableMode {
    /// Every line split on `|`, no separator row required.
    #[default]
    Lenient,
    /// Same rules as tables detected in prose.
    Strict,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub concept_tables: ConceptTableMode,
}
