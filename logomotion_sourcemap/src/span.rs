/// A contiguous range of characters, either in flat offsets over a whole source or in
/// columns within a single line.
///
/// `base + len` is the exclusive end, so `end() - base == len` always holds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Span {
    pub base: usize,
    pub len: usize,
}

impl Span {
    pub fn new(base: usize, len: usize) -> Self {
        Span { base, len }
    }

    /// Returns a `Span` covering `start..end`.
    ///
    /// # Panics
    ///
    /// If `end < start`.
    pub fn from_bounds(start: usize, end: usize) -> Self {
        assert!(start <= end, "span start should not exceed its end");
        Span::new(start, end - start)
    }

    /// One past the last covered position.
    pub fn end(self) -> usize {
        self.base + self.len
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Returns the characters of `source` covered by this span, treating `base` as a
    /// character offset. Returns `None` if the span is out of bounds for `source`.
    pub fn read(self, source: &str) -> Option<String> {
        let mut read = 0;
        let out: String = source
            .chars()
            .skip(self.base)
            .take(self.len)
            .inspect(|_| read += 1)
            .collect();

        if read == self.len {
            Some(out)
        } else {
            None
        }
    }
}
