pub mod blocks;
pub mod inline;
pub mod snapshot;
pub mod source;
pub mod tables;

use blocks::{Block, ParseOptions, RawBlock, SegmentBuilder, TagLineClassifier};
use source::lines_with_spans;

/// Parses a mentor turn into blocks with default options.
///
/// Never fails: empty or whitespace-only input gives an empty list, and
/// anything the parser does not recognize is kept as text.
pub fn parse_turn(input: &str) -> Vec<Block> {
    parse_turn_with(input, &ParseOptions::default())
}

pub fn parse_turn_with(input: &str, options: &ParseOptions) -> Vec<Block> {
    let raw = segment(input);
    blocks::resolve(input, &raw, options)
}

/// Parses raw bytes, replacing invalid UTF-8 with U+FFFD first.
///
/// Block spans refer to the decoded text, not to `bytes`.
pub fn parse_turn_bytes(bytes: &[u8]) -> Vec<Block> {
    parse_turn_bytes_with(bytes, &ParseOptions::default())
}

pub fn parse_turn_bytes_with(bytes: &[u8], options: &ParseOptions) -> Vec<Block> {
    parse_turn_with(&String::from_utf8_lossy(bytes), options)
}

/// Runs only the tag pass, returning untrimmed top-level regions.
pub fn segment(input: &str) -> Vec<RawBlock> {
    let classifier = TagLineClassifier;
    let mut builder = SegmentBuilder::new();

    for lr in lines_with_spans(input, 0) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    builder.finish(input.len())
}

#[cfg(test)]
mod tests;
