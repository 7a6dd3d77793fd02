use mentor_blocks_engine::parsing::{parse_turn, segment, snapshot};
use mentor_blocks_engine::{BlockType, SpanKind, tokenize_text};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/turns/{name}.txt",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn outline_of(name: &str) -> String {
    let input = fixture(name);
    let blocks = parse_turn(&input);
    snapshot::invariants(&input, &segment(&input), &blocks);
    snapshot::outline(&blocks)
}

#[test]
fn fixture_full_turn() {
    insta::assert_snapshot!(outline_of("full_turn"), @r#"
    TEXT "Let's work through this case together."
    CONCEPT title="Cardiac output" "Cardiac output is *stroke volume* times _heart rate_."
    MARKDOWN_TABLE [Variable | Unit]
      [SV | mL]
      [HR | bpm]
    CONCEPT "Keep this relation in mind."
    MCQ "Which change *raises* cardiac output?\nA. Lower heart rate\nB. Higher stroke volume"
    FEEDBACK_CORRECT "Exactly right."
    TAKEAWAYS title="Remember" "*_CO = SV x HR_*"
    "#);
}

#[test]
fn fixture_concept_table() {
    insta::assert_snapshot!(outline_of("concept_table"), @r#"
    CONCEPT_TABLE title="Beta blockers" [Drug | Selectivity]
      [Atenolol | beta-1]
      [Propranolol | non-selective]
    CLARIFICATION "Selectivity is lost at high doses."
    "#);
}

#[test]
fn fixture_malformed() {
    insta::assert_snapshot!(outline_of("malformed"), @r#"
    RECHECK_MCQ "Options [sic] below:\n| A | B |\n|---|---|\n[UNKNOWN_TAG]"
    FINAL_ANSWER title="Answer" "B"
    "#);
}

/// Renderers tokenize each text block line by line.
#[test]
fn renderer_pipeline() {
    let input = fixture("full_turn");
    let blocks = parse_turn(&input);

    let mcq = blocks.iter().find(|b| b.kind == BlockType::Mcq).unwrap();
    let lines = tokenize_text(mcq.text().unwrap());
    assert_eq!(lines.len(), 3);
    let kinds: Vec<_> = lines[0].iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![SpanKind::Plain, SpanKind::Bold, SpanKind::Plain]);
    assert_eq!(lines[0][1].text, "raises");

    let takeaway = blocks.iter().find(|b| b.kind == BlockType::Takeaways).unwrap();
    let spans = &tokenize_text(takeaway.text().unwrap())[0];
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].kind, SpanKind::BoldItalic);
    assert_eq!(spans[0].text, "CO = SV x HR");
}

/// Source spans let tooling point back at the original text.
#[test]
fn source_spans_slice_back_to_blocks() {
    let input = fixture("full_turn");
    for block in parse_turn(&input) {
        let src = &input[block.source.start..block.source.end];
        match block.text() {
            Some(text) => assert_eq!(src, text),
            None => assert!(src.starts_with('|') && src.ends_with('|')),
        }
    }
}
