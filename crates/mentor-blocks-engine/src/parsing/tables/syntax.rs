/// Pipe-table syntax as the mentor generator emits it.
///
/// All table delimiter knowledge lives here; the detector and cell parsers
/// never hardcode `|` or `---`.
pub struct PipeTable;

impl PipeTable {
    /// Column separator and fence character.
    pub const PIPE: char = '|';
    /// Minimum dash run marking a separator row.
    pub const DASH_RUN: &'static str = "---";
    /// Header, separator and at least one data row.
    pub const MIN_LINES: usize = 3;

    pub fn has_pipe(line: &str) -> bool {
        line.contains(Self::PIPE)
    }

    /// A line that can follow a header: it has a pipe and a run of dashes.
    ///
    /// This is a heuristic, not a markdown grammar: `| x --- y |` qualifies.
    pub fn is_separator(line: &str) -> bool {
        Self::has_pipe(line) && line.contains(Self::DASH_RUN)
    }

    /// Splits a row into trimmed cells, dropping the empty edge cells that
    /// fencing pipes produce.
    pub fn split_cells(line: &str) -> Vec<String> {
        let t = line.trim();
        let mut cells: Vec<&str> = t.split(Self::PIPE).map(str::trim).collect();
        if t.starts_with(Self::PIPE) && !cells.is_empty() {
            cells.remove(0);
        }
        if t.ends_with(Self::PIPE) && !cells.is_empty() {
            cells.pop();
        }
        cells.into_iter().map(str::to_string).collect()
    }

    /// True for rows like `|---|:---:|` whose cells are only alignment
    /// dashes and colons.
    pub fn is_separator_cells(cells: &[String]) -> bool {
        !cells.is_empty()
            && cells.iter().all(|c| {
                c.contains('-') && c.chars().all(|ch| ch == '-' || ch == ':')
            })
    }
}
