use std::fmt::{self, Display};

/// A 1-based `(line, column)` location for presentation in an editor.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The sequence separating two lines of source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LineTerminator {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineTerminator {
    pub fn as_str(self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }

    /// Number of characters a single line boundary occupies.
    pub fn width(self) -> usize {
        match self {
            LineTerminator::Lf => 1,
            LineTerminator::CrLf => 2,
        }
    }

    /// Returns the terminator used by `source`. A source is taken to use `\r\n` if its
    /// first line break is preceded by `\r`.
    pub fn detect(source: &str) -> Self {
        match source.find('\n') {
            Some(idx) if source[..idx].ends_with('\r') => LineTerminator::CrLf,
            _ => LineTerminator::Lf,
        }
    }

    /// Splits `source` into lines on this terminator. A trailing terminator yields a final
    /// empty line, so the line lengths plus one terminator per boundary always add up to
    /// the length of `source`.
    pub fn lines(self, source: &str) -> std::str::Split<'_, &'static str> {
        source.split(self.as_str())
    }
}

impl Default for LineTerminator {
    fn default() -> Self {
        LineTerminator::Lf
    }
}
