use serde::Serialize;

use logomotion_err::RawSpan;
use logomotion_sourcemap::{Position, SourceMap, TranslateError};

/// Anything that can be reported as a span of source.
pub trait Diagnostic {
    type Message: Clone;

    fn message(&self) -> &Self::Message;

    /// Inclusive start. A flat offset, or a 1-based column if `line` is `Some`.
    fn start(&self) -> usize;

    /// Exclusive end, in the same units as `start`.
    fn end(&self) -> usize;

    /// 1-based line of a line-relative diagnostic. Flat diagnostics return `None`.
    fn line(&self) -> Option<usize> {
        None
    }
}

impl Diagnostic for RawSpan {
    type Message = String;

    fn message(&self) -> &String {
        &self.message
    }

    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }

    fn line(&self) -> Option<usize> {
        self.line
    }
}

/// A diagnostic in editor coordinates. Columns are 1-based, `end_column` is exclusive.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct PrettyRecord<M> {
    pub line: usize,
    #[serde(rename = "start")]
    pub start_column: usize,
    #[serde(rename = "end")]
    pub end_column: usize,
    pub message: M,
}

impl PrettyRecord<String> {
    /// Reports a line-relative span as-is. Returns `None` for flat spans.
    pub fn from_line_span(span: &RawSpan) -> Option<Self> {
        Some(PrettyRecord {
            line: span.line?,
            start_column: span.start,
            end_column: span.end,
            message: span.message.clone(),
        })
    }
}

/// A diagnostic in flat character offsets. `end_offset` is exclusive.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct RawRecord<M> {
    #[serde(rename = "start")]
    pub start_offset: usize,
    #[serde(rename = "end")]
    pub end_offset: usize,
    pub message: M,
}

/// Two aligned views of the same diagnostics. `pretty[i]` and `raw[i]` always describe
/// the same diagnostic.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct Report<M> {
    pub pretty: Vec<PrettyRecord<M>>,
    pub raw: Vec<RawRecord<M>>,
}

impl<M> Report<M> {
    pub fn new() -> Self {
        Report {
            pretty: Vec::new(),
            raw: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Report {
            pretty: Vec::with_capacity(capacity),
            raw: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.pretty.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pretty.is_empty()
    }
}

impl<M> Default for Report<M> {
    fn default() -> Self {
        Report::new()
    }
}

/// Builds the pretty and raw views of `diagnostics` over the source described by `map`.
///
/// Flat diagnostics are translated from their start offset; the end column is the start
/// column plus the original length. Line-relative diagnostics keep their line and columns
/// unchanged, and their flat offsets are derived from the line table.
///
/// # Errors
///
/// If a diagnostic ends before it starts, or points outside of the source.
pub fn normalize<D: Diagnostic>(
    diagnostics: &[D],
    map: &SourceMap,
) -> Result<Report<D::Message>, TranslateError> {
    let mut report = Report::with_capacity(diagnostics.len());

    for diagnostic in diagnostics {
        let start = diagnostic.start();
        let end = diagnostic.end();
        if end < start {
            return Err(TranslateError::Inverted { start, end });
        }
        let length = end - start;

        let (position, offset) = match diagnostic.line() {
            None => (map.translate(start)?, start),
            Some(line) => {
                let position = Position::new(line, start);
                let offset = map
                    .offset_of(position)
                    .ok_or(TranslateError::NoSuchPosition(position))?;
                (position, offset)
            }
        };

        report.pretty.push(PrettyRecord {
            line: position.line,
            start_column: position.column,
            end_column: position.column + length,
            message: diagnostic.message().clone(),
        });
        report.raw.push(RawRecord {
            start_offset: offset,
            end_offset: offset + length,
            message: diagnostic.message().clone(),
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Use pretty_assertions for `assert_eq` diffs.
    use pretty_assertions::assert_eq;

    use logomotion_sourcemap::LineTerminator;

    fn flat(message: &str, start: usize, end: usize) -> RawSpan {
        RawSpan {
            message: message.to_owned(),
            start,
            end,
            line: None,
        }
    }

    #[test]
    fn flat_spans_are_translated() {
        let source = "fd 100\nrt 90";
        let map = SourceMap::new(source, LineTerminator::Lf);
        let spans = vec![flat("a", 7, 9), flat("b", 3, 6)];

        let report = normalize(&spans, &map).unwrap();
        assert_eq!(
            vec![
                PrettyRecord {
                    line: 2,
                    start_column: 1,
                    end_column: 3,
                    message: "a".to_owned(),
                },
                PrettyRecord {
                    line: 1,
                    start_column: 4,
                    end_column: 7,
                    message: "b".to_owned(),
                },
            ],
            report.pretty
        );
        assert_eq!(
            vec![
                RawRecord {
                    start_offset: 7,
                    end_offset: 9,
                    message: "a".to_owned(),
                },
                RawRecord {
                    start_offset: 3,
                    end_offset: 6,
                    message: "b".to_owned(),
                },
            ],
            report.raw
        );
    }

    #[test]
    fn line_spans_pass_through() {
        let source = "fd 1\nab Cd";
        let map = SourceMap::new(source, LineTerminator::Lf);
        let span = RawSpan {
            message: "errorror".to_owned(),
            start: 4,
            end: 6,
            line: Some(2),
        };

        let report = normalize(&[span.clone()], &map).unwrap();
        assert_eq!(PrettyRecord::from_line_span(&span), Some(report.pretty[0].clone()));
        assert_eq!(8, report.raw[0].start_offset);
        assert_eq!(10, report.raw[0].end_offset);
    }

    #[test]
    fn start_outside_source_is_an_error() {
        let map = SourceMap::new("ab", LineTerminator::Lf);
        assert_eq!(
            Err(TranslateError::OutOfBounds { offset: 2, len: 2 }),
            normalize(&[flat("x", 2, 3)], &map)
        );
    }

    #[test]
    fn inverted_span_is_an_error() {
        let map = SourceMap::new("abc", LineTerminator::Lf);
        assert_eq!(
            Err(TranslateError::Inverted { start: 2, end: 1 }),
            normalize(&[flat("x", 2, 1)], &map)
        );
    }

    #[test]
    fn views_stay_aligned() {
        let source = "one two\nthree\n\nfour";
        let map = SourceMap::new(source, LineTerminator::Lf);
        let spans = vec![flat("1", 0, 3), flat("2", 8, 13), flat("3", 15, 19)];

        let report = normalize(&spans, &map).unwrap();
        assert_eq!(spans.len(), report.pretty.len());
        assert_eq!(spans.len(), report.raw.len());
        for ((span, pretty), raw) in spans.iter().zip(&report.pretty).zip(&report.raw) {
            assert_eq!(span.message, pretty.message);
            assert_eq!(span.message, raw.message);
            assert_eq!(pretty.end_column - pretty.start_column, raw.end_offset - raw.start_offset);
        }
    }

    #[test]
    fn empty_input_empty_report() {
        let map = SourceMap::new("", LineTerminator::Lf);
        let report = normalize::<RawSpan>(&[], &map).unwrap();
        assert!(report.is_empty());
        assert_eq!(Report::default(), report);
    }

    #[test]
    fn serializes_with_short_keys() {
        let record = PrettyRecord {
            line: 3,
            start_column: 2,
            end_column: 5,
            message: "errorror",
        };
        assert_eq!(
            r#"{"line":3,"start":2,"end":5,"message":"errorror"}"#,
            serde_json::to_string(&record).unwrap()
        );
    }
}
