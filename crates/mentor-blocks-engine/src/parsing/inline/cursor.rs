/// A cursor for character-by-character inline scanning with position tracking.
///
/// Positions are byte offsets into the line. The cursor only ever advances by
/// whole characters or by ASCII delimiters, so every position it reports is a
/// valid char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The line being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat)
    }

    /// Advances past the current character, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.s[self.i..].chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes. Callers only skip ASCII delimiters.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
    }

    /// Byte offset of the end of the current line (next `\n`, or end of input).
    pub fn line_end(&self) -> usize {
        self.s.as_bytes()[self.i..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.s.len(), |p| self.i + p)
    }

    /// Finds the first occurrence of `pat` starting at or after `from` that
    /// ends at or before `limit`.
    pub fn find(&self, pat: &[u8], from: usize, limit: usize) -> Option<usize> {
        let bytes = self.s.as_bytes();
        let limit = limit.min(bytes.len());
        if pat.is_empty() || from >= limit || limit - from < pat.len() {
            return None;
        }
        bytes[from..limit]
            .windows(pat.len())
            .position(|w| w == pat)
            .map(|p| from + p)
    }
}
