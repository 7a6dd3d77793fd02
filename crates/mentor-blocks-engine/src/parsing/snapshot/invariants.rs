use crate::parsing::{
    blocks::{Block, Payload, RawBlock},
    source::slice,
};

/// Validates parser output invariants against the input it came from.
///
/// Asserts that:
/// - Every block span is within bounds and on char boundaries
/// - Blocks are in source order and do not overlap
/// - A text block's text is exactly its source slice
/// - Text between blocks is whitespace or control tag markup
/// - Only authored block types are ever opened by a tag
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(input: &str, raw: &[RawBlock], blocks: &[Block]) {
    for rb in raw.iter().filter(|rb| rb.tag.is_some()) {
        assert!(rb.kind.is_authored(), "tag opened a synthesized type: {rb:?}");
    }

    let n = input.len();
    let mut prev_end = 0usize;
    for b in blocks {
        assert!(
            b.source.start <= b.source.end && b.source.end <= n,
            "block span out of bounds: {:?} (input len: {})",
            b.source,
            n
        );
        assert!(
            input.is_char_boundary(b.source.start) && input.is_char_boundary(b.source.end),
            "block span splits a char: {:?}",
            b.source
        );
        assert!(
            b.source.start >= prev_end,
            "blocks overlap or are out of order at {:?}",
            b.source
        );
        assert!(!b.source.is_empty(), "empty block emitted: {b:?}");
        if let Payload::Text(p) = &b.payload {
            assert_eq!(
                p.text,
                slice(input, b.source),
                "text block differs from its source"
            );
        }
        prev_end = b.source.end;
    }

    // Everything not covered by a block is whitespace or tag markup.
    let mut covered = vec![false; n];
    for span in blocks
        .iter()
        .map(|b| b.source)
        .chain(raw.iter().filter_map(|r| r.tag))
    {
        for c in &mut covered[span.start..span.end] {
            *c = true;
        }
    }
    for (i, ch) in input.char_indices() {
        if !covered[i] {
            assert!(
                ch.is_whitespace(),
                "uncovered non-whitespace {ch:?} at byte {i} in {input:?}"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{parse_turn, segment};

    #[test]
    fn holds_for_a_mixed_turn() {
        let input = "hello\n[MCQ]\n*Q*?\n[CONCEPT_TABLE]\nA|B\n1|2\n";
        check(input, &segment(input), &parse_turn(input));
    }

    #[test]
    #[should_panic(expected = "uncovered non-whitespace")]
    fn detects_dropped_text() {
        let input = "hello";
        check(input, &segment(input), &[]);
    }
}
