use log::debug;

use crate::parsing::source::{SourceSpan, lines_with_spans, preview, slice};

use super::{
    cells::parse_table,
    syntax::PipeTable,
    types::{Region, RegionKind, Section},
};

#[derive(Debug, Clone, Copy)]
enum DetectState {
    Prose,
    InTableCandidate { start: usize, end: usize },
}

/// Splits `text` into prose and table-candidate regions in source order.
///
/// A candidate starts on a line with a pipe that is immediately followed by a
/// separator line, and runs through every following line that has a pipe.
/// Regions tile `text` exactly, newlines included, and spans are relative to
/// `text`.
pub fn detect_regions(text: &str) -> Vec<Region> {
    detect_regions_at(text, 0)
}

/// [`detect_regions`] for a slice that starts `base` bytes into a larger turn.
pub fn detect_regions_at(text: &str, base: usize) -> Vec<Region> {
    let mut out = RegionSink::default();
    let mut state = DetectState::Prose;
    let mut lines = lines_with_spans(text, base).peekable();

    while let Some(line) = lines.next() {
        if let DetectState::InTableCandidate { start, end } = state {
            if PipeTable::has_pipe(line.content()) {
                state = DetectState::InTableCandidate {
                    start,
                    end: line.span.end,
                };
                continue;
            }
            out.push(RegionKind::TableCandidate, SourceSpan::new(start, end));
            state = DetectState::Prose;
        }

        let opens_table = PipeTable::has_pipe(line.content())
            && lines
                .peek()
                .is_some_and(|next| PipeTable::is_separator(next.content()));
        if opens_table {
            state = DetectState::InTableCandidate {
                start: line.span.start,
                end: line.span.end,
            };
        } else {
            out.push(RegionKind::Prose, line.span);
        }
    }

    if let DetectState::InTableCandidate { start, end } = state {
        out.push(RegionKind::TableCandidate, SourceSpan::new(start, end));
    }
    out.finish()
}

/// Detects tables in `text` and confirms each candidate with
/// [`parse_table`]. Rejected candidates are folded back into the surrounding
/// prose, so no text is lost.
pub fn split_tables(text: &str) -> Vec<Section> {
    split_tables_at(text, 0)
}

/// [`split_tables`] for a slice that starts `base` bytes into a larger turn.
/// Returned spans are absolute.
pub fn split_tables_at(text: &str, base: usize) -> Vec<Section> {
    let mut out: Vec<Section> = Vec::new();
    for region in detect_regions_at(text, base) {
        let local = SourceSpan::new(region.span.start - base, region.span.end - base);
        let section = match region.kind {
            RegionKind::Prose => Section::Prose(region.span),
            RegionKind::TableCandidate => match parse_table(slice(text, local)) {
                Some(table) => Section::Table {
                    table,
                    span: region.span,
                },
                None => {
                    debug!(
                        "table candidate rejected, keeping as prose: {:?}",
                        preview(text, local, 60)
                    );
                    Section::Prose(region.span)
                }
            },
        };

        if let (Some(Section::Prose(prev)), Section::Prose(next)) = (out.last_mut(), &section) {
            prev.end = next.end;
            continue;
        }
        out.push(section);
    }
    out
}

/// Collects regions, merging consecutive regions of the same kind.
#[derive(Default)]
struct RegionSink {
    regions: Vec<Region>,
}

impl RegionSink {
    fn push(&mut self, kind: RegionKind, span: SourceSpan) {
        if kind == RegionKind::Prose
            && let Some(last) = self.regions.last_mut()
            && last.kind == RegionKind::Prose
        {
            last.span.end = span.end;
            return;
        }
        self.regions.push(Region { kind, span });
    }

    fn finish(self) -> Vec<Region> {
        self.regions
    }
}
