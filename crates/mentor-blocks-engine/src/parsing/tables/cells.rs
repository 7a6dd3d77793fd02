use log::debug;

use super::{syntax::PipeTable, types::TablePayload};

/// Parses a captured pipe table into a header and data rows.
///
/// Surrounding blank lines are ignored. The first line is the header and the
/// very next line must be a separator row (a pipe plus a run of at least
/// three dashes); the separator is consumed. Blank lines between data rows
/// are skipped. Returns `None` when the text does not have that shape, never
/// an error.
///
/// Rows whose width differs from the header are kept as they are.
pub fn parse_table(text: &str) -> Option<TablePayload> {
    let lines: Vec<&str> = text.trim().lines().collect();
    if lines.len() < PipeTable::MIN_LINES {
        return None;
    }
    if !PipeTable::is_separator(lines[1]) {
        return None;
    }

    let headers = PipeTable::split_cells(lines[0]);
    let rows = lines[2..]
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| PipeTable::split_cells(line))
        .collect();
    Some(TablePayload { headers, rows })
}

/// Parses the body of a `CONCEPT_TABLE` block.
///
/// Concept tables are tabular by convention, so no separator row is
/// required: every non-blank line is split on `|`, separator-looking rows are
/// skipped, and the first remaining row is the header. A line without any
/// pipe means the content is not a table after all and `None` is returned so
/// the caller can keep the text.
pub fn parse_concept_table(text: &str) -> Option<TablePayload> {
    let mut rows = Vec::new();
    for line in non_blank_lines(text) {
        if !PipeTable::has_pipe(line) {
            debug!("concept table line without a pipe: {line:?}");
            return None;
        }
        let cells = PipeTable::split_cells(line);
        if PipeTable::is_separator_cells(&cells) {
            continue;
        }
        rows.push(cells);
    }
    if rows.is_empty() {
        return None;
    }
    let headers = rows.remove(0);
    Some(TablePayload { headers, rows })
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|l| !l.trim().is_empty())
}
