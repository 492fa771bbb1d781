use std::fmt::{self, Debug, Display};

use logomotion_sourcemap::Span;

/// Where a diagnostic points.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Anchor {
    /// Character offsets into the whole source.
    Flat(Span),
    /// 1-based columns within the 1-based `line`.
    Line { line: usize, columns: Span },
}

#[derive(Clone)]
pub struct Error {
    msg: String,
    anchor: Option<Anchor>,
}

impl Error {
    pub fn message<'this>(&'this self) -> impl Display + 'this {
        &self.msg
    }

    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    /// Flattens this error into a `RawSpan`. Returns `None` for errors without an anchor.
    pub fn to_raw_span(&self) -> Option<RawSpan> {
        let (line, span) = match self.anchor? {
            Anchor::Flat(span) => (None, span),
            Anchor::Line { line, columns } => (Some(line), columns),
        };

        Some(RawSpan {
            message: self.msg.clone(),
            start: span.base,
            end: span.end(),
            line,
        })
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error {{\n    {}", &self.msg)?;
        match self.anchor {
            Some(Anchor::Flat(span)) => writeln!(f, "        at raw position: {:?}", span)?,
            Some(Anchor::Line { line, columns }) => {
                writeln!(f, "        at line {}, columns {:?}", line, columns)?
            }
            None => {}
        }
        write!(f, "}}")?;

        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct ErrorBuilder {
    error: Error,
}

impl ErrorBuilder {
    pub fn new<S: Display>(msg: S) -> Self {
        ErrorBuilder {
            error: Error {
                msg: msg.to_string(),
                anchor: None,
            },
        }
    }

    pub fn done(self) -> Error {
        self.error
    }

    /// Anchors the error at flat character offsets.
    pub fn span(&mut self, span: Span) -> &mut Self {
        self.error.anchor = Some(Anchor::Flat(span));
        self
    }

    /// Anchors the error at columns `start..end` of `line`.
    ///
    /// # Panics
    ///
    /// If `end < start`.
    pub fn line_span(&mut self, line: usize, start: usize, end: usize) -> &mut Self {
        self.error.anchor = Some(Anchor::Line {
            line,
            columns: Span::from_bounds(start, end),
        });
        self
    }
}

/// A finished diagnostic in its plainest form.
///
/// `end` is exclusive. If `line` is `None`, `start` and `end` are flat character offsets
/// into the whole source. Otherwise they are 1-based columns within that line.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RawSpan {
    pub message: String,
    pub start: usize,
    pub end: usize,
    pub line: Option<usize>,
}

impl RawSpan {
    /// # Panics
    ///
    /// If `end < start`.
    pub fn span(&self) -> Span {
        Span::from_bounds(self.start, self.end)
    }

    pub fn is_flat(&self) -> bool {
        self.line.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Use pretty_assertions for `assert_eq` diffs.
    use pretty_assertions::assert_eq;

    #[test]
    fn flat_raw_span() {
        let mut builder = ErrorBuilder::new("errorroror");
        builder.span(Span::new(4, 3));

        assert_eq!(
            Some(RawSpan {
                message: "errorroror".to_owned(),
                start: 4,
                end: 7,
                line: None,
            }),
            builder.done().to_raw_span()
        );
    }

    #[test]
    fn line_raw_span() {
        let mut builder = ErrorBuilder::new("errorror");
        builder.line_span(2, 1, 4);

        let raw = builder.done().to_raw_span().unwrap();
        assert_eq!(Some(2), raw.line);
        assert_eq!(Span::new(1, 3), raw.span());
        assert_eq!("errorror", raw.message);
        assert!(!raw.is_flat());
    }

    #[test]
    fn unanchored_errors_have_no_raw_span() {
        let error = ErrorBuilder::new("nowhere").done();
        assert_eq!("nowhere", error.message().to_string());
        assert!(error.anchor().is_none());
        assert!(error.to_raw_span().is_none());
    }
}
