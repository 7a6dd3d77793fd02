//! End-to-end tests for the parsing pipeline.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::{Block, BlockType, ConceptTableMode, ParseOptions, Payload, TextPayload},
    inline::{Span, plain_text, tokenize},
    parse_turn, parse_turn_bytes, parse_turn_bytes_with, segment, snapshot,
    source::SourceSpan,
};

fn checked(input: &str) -> Vec<Block> {
    let blocks = parse_turn(input);
    snapshot::invariants(input, &segment(input), &blocks);
    blocks
}

fn text_block(kind: BlockType, text: &str, source: SourceSpan) -> Block {
    Block {
        kind,
        title: None,
        payload: Payload::Text(TextPayload {
            text: text.to_string(),
        }),
        source,
    }
}

#[test]
fn mcq_then_feedback() {
    let input = "[MCQ]\nWhat is *the* diagnosis?\n[FEEDBACK_CORRECT]\nWell done!";
    assert_eq!(
        checked(input),
        vec![
            text_block(BlockType::Mcq, "What is *the* diagnosis?", SourceSpan::new(6, 30)),
            text_block(BlockType::FeedbackCorrect, "Well done!", SourceSpan::new(50, 60)),
        ]
    );
}

#[test]
fn concept_with_embedded_table() {
    let input = "[CONCEPT]\nIntro line\n| A | B |\n|---|---|\n| 1 | 2 |\nOutro line";
    let blocks = checked(input);
    assert_eq!(blocks.len(), 3);

    assert_eq!(blocks[0].kind, BlockType::Concept);
    assert_eq!(blocks[0].text(), Some("Intro line"));

    assert_eq!(blocks[1].kind, BlockType::MarkdownTable);
    let table = blocks[1].table().unwrap();
    assert_eq!(table.headers, vec!["A", "B"]);
    assert_eq!(table.rows, vec![vec!["1", "2"]]);

    assert_eq!(blocks[2].kind, BlockType::Concept);
    assert_eq!(blocks[2].text(), Some("Outro line"));
}

#[test]
fn bold_italic_key_point() {
    assert_eq!(tokenize("*_Key Point_*"), vec![Span::bold_italic("Key Point")]);
}

#[test]
fn unmatched_star_reconstructs() {
    let spans = tokenize("unmatched *star");
    assert_eq!(plain_text(&spans), "unmatched *star");
    assert_eq!(spans, vec![Span::plain("unmatched *star")]);
}

#[test]
fn unknown_tag_is_text() {
    let input = "[SIC] quoted text";
    assert_eq!(
        checked(input),
        vec![text_block(BlockType::Text, input, SourceSpan::new(0, 17))]
    );
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\n\r\n\t")]
#[case("[MCQ]")]
#[case("[MCQ]\n[CONCEPT]\n\n[TAKEAWAYS]   \n")]
fn empty_content_produces_no_blocks(#[case] input: &str) {
    assert!(checked(input).is_empty(), "{input:?}");
}

#[test]
fn text_before_first_tag() {
    let blocks = checked("Hi there.\n[MENTOR]\nLet's begin.");
    let kinds: Vec<_> = blocks.iter().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![BlockType::Text, BlockType::Mentor]);
    assert_eq!(blocks[0].text(), Some("Hi there."));
}

#[test]
fn mid_line_tag_is_literal() {
    let input = "See the note [MCQ] here.";
    let blocks = checked(input);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockType::Text);
    assert_eq!(blocks[0].text(), Some(input));
}

#[test]
fn tag_glued_to_a_word_is_literal() {
    let input = "[MCQ]s are tricky.\n[MCQ]\nWhich one?";
    let blocks = checked(input);
    let kinds: Vec<_> = blocks.iter().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![BlockType::Text, BlockType::Mcq]);
    assert_eq!(blocks[0].text(), Some("[MCQ]s are tricky."));
    assert_eq!(blocks[1].text(), Some("Which one?"));
}

#[test]
fn titles_are_attached() {
    let blocks = checked("[TAKEAWAYS title=\"Remember\"]\n- one\n- two");
    assert_eq!(blocks[0].title.as_deref(), Some("Remember"));
    assert_eq!(blocks[0].text(), Some("- one\n- two"));
}

#[test]
fn text_on_the_tag_line_is_content() {
    let blocks = checked("[FINAL_ANSWER] B. Aortic stenosis");
    assert_eq!(blocks[0].kind, BlockType::FinalAnswer);
    assert_eq!(blocks[0].text(), Some("B. Aortic stenosis"));
}

#[test]
fn concept_table_block() {
    let blocks = checked("[CONCEPT_TABLE]\nDrug | Class\nAtenolol | Beta blocker\n");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockType::ConceptTable);
    let table = blocks[0].table().unwrap();
    assert_eq!(table.headers, vec!["Drug", "Class"]);
    assert_eq!(table.rows, vec![vec!["Atenolol", "Beta blocker"]]);
}

#[test]
fn malformed_table_stays_prose() {
    let input = "[CLARIFICATION]\n| A | B |\n|---|---|\n";
    let blocks = checked(input);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockType::Clarification);
    assert_eq!(blocks[0].text(), Some("| A | B |\n|---|---|"));
}

#[test]
fn ragged_table_keeps_rows() {
    let blocks = checked("| A | B |\n|---|---|\n| 1 |\n| 2 | 3 |");
    let table = blocks[0].table().unwrap();
    assert_eq!(table.rows, vec![vec!["1"], vec!["2", "3"]]);
}

#[test]
fn crlf_turn() {
    let blocks = checked("[MCQ]\r\nPick one\r\n[FEEDBACK_WRONG]\r\nNope\r\n");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].text(), Some("Pick one"));
    assert_eq!(blocks[1].text(), Some("Nope"));
}

#[test]
fn invalid_utf8_is_accepted() {
    let blocks = parse_turn_bytes(b"[MCQ]\nok \xff\xfe done");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].text(), Some("ok \u{FFFD}\u{FFFD} done"));
}

#[test]
fn byte_input_honours_options() {
    let bytes = b"[CONCEPT_TABLE]\nDrug | Class \xff\nAtenolol | Beta blocker";
    let strict = ParseOptions {
        concept_tables: ConceptTableMode::Strict,
    };

    let lenient = parse_turn_bytes_with(bytes, &ParseOptions::default());
    let table = lenient[0].table().unwrap();
    assert_eq!(table.headers, vec!["Drug", "Class \u{FFFD}"]);

    let strict = parse_turn_bytes_with(bytes, &strict);
    assert_eq!(strict[0].kind, BlockType::ConceptTable);
    assert_eq!(
        strict[0].text(),
        Some("Drug | Class \u{FFFD}\nAtenolol | Beta blocker")
    );
}

#[test]
fn blocks_serialize_for_the_renderer() {
    let blocks = parse_turn("[CONCEPT title=\"X\"]\nhi\n| A |\n|---|\n| 1 |");
    let json = serde_json::to_value(&blocks).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {
                "type": "CONCEPT",
                "title": "X",
                "payload": { "text": "hi" },
                "source": { "start": 20, "end": 22 }
            },
            {
                "type": "MARKDOWN_TABLE",
                "payload": { "headers": ["A"], "rows": [["1"]] },
                "source": { "start": 23, "end": 40 }
            }
        ])
    );
}
