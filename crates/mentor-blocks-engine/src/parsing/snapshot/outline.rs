use crate::parsing::blocks::{Block, Payload};

/// Renders blocks as a stable, line-oriented outline for snapshot tests and
/// the CLI's `outline` format.
///
/// ```text
/// CONCEPT "Intro line"
/// MARKDOWN_TABLE [A | B]
///   [1 | 2]
/// ```
pub fn outline(blocks: &[Block]) -> String {
    let mut out = String::new();
    for b in blocks {
        out.push_str(b.kind.as_tag());
        if let Some(title) = &b.title {
            out.push_str(&format!(" title={title:?}"));
        }
        match &b.payload {
            Payload::Text(p) => {
                out.push_str(&format!(" {:?}\n", p.text));
            }
            Payload::Table(t) => {
                out.push_str(&format!(" [{}]\n", t.headers.join(" | ")));
                for row in &t.rows {
                    out.push_str(&format!("  [{}]\n", row.join(" | ")));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_turn;

    #[test]
    fn outline_of_empty_is_empty() {
        assert_eq!(outline(&[]), "");
    }

    #[test]
    fn outline_shows_titles_text_and_rows() {
        let blocks = parse_turn("[CONCEPT title=\"T\"]\nhi\n| A |\n|---|\n| 1 |");
        assert_eq!(
            outline(&blocks),
            "CONCEPT title=\"T\" \"hi\"\nMARKDOWN_TABLE [A]\n  [1]\n"
        );
    }
}
