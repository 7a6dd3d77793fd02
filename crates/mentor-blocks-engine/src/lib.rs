pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{
    blocks::{
        Block, BlockType, ConceptTableMode, ParseOptions, Payload, RawBlock, TextPayload,
        UnknownBlockType,
    },
    inline::{Span, SpanKind, plain_text, tokenize, tokenize_text},
    parse_turn, parse_turn_bytes, parse_turn_bytes_with, parse_turn_with, segment,
    source::SourceSpan,
    tables::{
        Region, RegionKind, Section, TablePayload, detect_regions, parse_concept_table,
        parse_table, split_tables,
    },
};
