use thiserror::Error;

use crate::position::{LineTerminator, Position};

/// Failure to map a flat offset onto a source.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum TranslateError {
    #[error("offset {offset} is outside of a source of {len} characters")]
    OutOfBounds { offset: usize, len: usize },
    #[error("position {0} does not name a character of the source")]
    NoSuchPosition(Position),
    #[error("span end {end} precedes its start {start}")]
    Inverted { start: usize, end: usize },
}

/// Line table for a single source text.
///
/// All offsets and lengths are counted in characters. Every line boundary is assumed to
/// occupy exactly `terminator.width()` characters.
#[derive(Clone, Debug)]
pub struct SourceMap {
    line_starts: Vec<usize>,
    line_lens: Vec<usize>,
    len: usize,
    terminator: LineTerminator,
}

impl SourceMap {
    pub fn new(source: &str, terminator: LineTerminator) -> Self {
        let mut line_starts = Vec::new();
        let mut line_lens = Vec::new();
        let mut start = 0;

        for line in terminator.lines(source) {
            let len = line.chars().count();
            line_starts.push(start);
            line_lens.push(len);
            start += len + terminator.width();
        }

        SourceMap {
            line_starts,
            line_lens,
            len: source.chars().count(),
            terminator,
        }
    }

    /// Length of the source in characters.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Length of the 1-based `line`, excluding its terminator.
    pub fn line_len(&self, line: usize) -> Option<usize> {
        self.line_lens.get(line.checked_sub(1)?).copied()
    }

    /// Returns the 1-based position of the character at `offset`.
    ///
    /// An offset pointing into a line terminator maps to a column past the end of the
    /// line's content, as if the terminator were part of that line.
    ///
    /// # Errors
    ///
    /// `TranslateError::OutOfBounds` if `offset` is not in `0..self.len()`.
    pub fn translate(&self, offset: usize) -> Result<Position, TranslateError> {
        if offset >= self.len {
            return Err(TranslateError::OutOfBounds {
                offset,
                len: self.len,
            });
        }

        // First line starts at 0, so the partition point is always at least 1.
        let idx = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let remaining = offset - self.line_starts[idx];

        Ok(Position::new(idx + 1, remaining + 1))
    }

    /// Inverse of `translate`. Returns `None` if `position` does not name a character of
    /// the source.
    pub fn offset_of(&self, position: Position) -> Option<usize> {
        let idx = position.line.checked_sub(1)?;
        let column = position.column.checked_sub(1)?;
        let start = *self.line_starts.get(idx)?;

        let last_line = idx + 1 == self.line_starts.len();
        let width = if last_line {
            self.line_lens[idx]
        } else {
            self.line_lens[idx] + self.terminator.width()
        };

        if column < width {
            Some(start + column)
        } else {
            None
        }
    }
}

/// Builds a one-off `SourceMap` for `source` and translates `offset` with it.
pub fn translate(
    source: &str,
    offset: usize,
    terminator: LineTerminator,
) -> Result<Position, TranslateError> {
    SourceMap::new(source, terminator).translate(offset)
}
