use serde::Serialize;

use crate::parsing::source::SourceSpan;

/// A parsed pipe table: one header row plus data rows, cells trimmed.
///
/// Rows keep whatever width they had in the source. For well-formed tables
/// every row is as wide as `headers`; callers rendering untrusted tables
/// should index defensively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TablePayload {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// What the detector believes a region of text to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionKind {
    Prose,
    TableCandidate,
}

/// A detector region. Consecutive regions tile the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub kind: RegionKind,
    pub span: SourceSpan,
}

/// A region after table candidates have been confirmed or rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// Prose, including table candidates the cell parser rejected.
    Prose(SourceSpan),
    /// A confirmed table and the source lines it was parsed from.
    Table {
        table: TablePayload,
        span: SourceSpan,
    },
}

impl Section {
    pub fn span(&self) -> SourceSpan {
        match self {
            Section::Prose(span) => *span,
            Section::Table { span, .. } => *span,
        }
    }
}
