use log::debug;

use crate::parsing::{
    source::{SourceSpan, preview, slice, trimmed},
    tables::{Section, parse_concept_table, parse_table, split_tables_at},
};

use super::types::{
    Block, BlockType, ConceptTableMode, ParseOptions, Payload, RawBlock, TextPayload,
};

/// Expands raw regions into renderable blocks.
///
/// `CONCEPT_TABLE` content is parsed as a table directly. Every other region
/// is run through the table detector: prose sections keep the region's type,
/// confirmed tables become `MARKDOWN_TABLE` blocks. A tag's title goes on the
/// first block produced from its region. Whitespace-only sections produce
/// nothing.
pub fn resolve(input: &str, raw: &[RawBlock], options: &ParseOptions) -> Vec<Block> {
    let mut out = Vec::new();
    for rb in raw {
        match rb.kind {
            BlockType::ConceptTable => resolve_concept_table(input, rb, options, &mut out),
            _ => resolve_sections(input, rb, &mut out),
        }
    }
    out
}

fn resolve_concept_table(
    input: &str,
    rb: &RawBlock,
    options: &ParseOptions,
    out: &mut Vec<Block>,
) {
    let body = trimmed(input, rb.content);
    if body.is_empty() {
        return;
    }
    let text = slice(input, body);
    let table = match options.concept_tables {
        ConceptTableMode::Lenient => parse_concept_table(text),
        ConceptTableMode::Strict => parse_table(text),
    };
    let payload = match table {
        Some(table) => Payload::Table(table),
        None => {
            debug!(
                "concept table is not tabular, keeping as text: {:?}",
                preview(input, body, 60)
            );
            text_payload(input, body)
        }
    };
    out.push(Block {
        kind: BlockType::ConceptTable,
        title: rb.title.clone(),
        payload,
        source: body,
    });
}

fn resolve_sections(input: &str, rb: &RawBlock, out: &mut Vec<Block>) {
    let mut title = rb.title.clone();
    for section in split_tables_at(slice(input, rb.content), rb.content.start) {
        let (kind, payload, source) = match section {
            Section::Prose(span) => {
                let body = trimmed(input, span);
                if body.is_empty() {
                    continue;
                }
                (rb.kind, text_payload(input, body), body)
            }
            Section::Table { table, span } => (
                BlockType::MarkdownTable,
                Payload::Table(table),
                trimmed(input, span),
            ),
        };
        out.push(Block {
            kind,
            title: title.take(),
            payload,
            source,
        });
    }
}

fn text_payload(input: &str, span: SourceSpan) -> Payload {
    Payload::Text(TextPayload {
        text: slice(input, span).to_string(),
    })
}
