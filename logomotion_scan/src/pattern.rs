use tracing::debug;

use logomotion_config::Config;
use logomotion_err::ErrorCtx;

use crate::Detect;

/// Per-line scanner state.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
enum ScanState {
    /// Not inside a flagged token.
    Idle,
    /// Inside a flagged token beginning at the 1-based column `start`.
    Flagging { start: usize },
}

/// Detector that flags tokens starting with a character which is its own uppercase form,
/// other than digits and whitespace. Lowercase and numeric values are the convention.
///
/// Columns are 1-based and restart on every line. The end column is exclusive.
#[derive(Debug)]
pub struct PatternDetector<'a> {
    config: &'a Config,
}

impl<'a> PatternDetector<'a> {
    pub fn new(config: &'a Config) -> Self {
        PatternDetector { config }
    }

    fn scan_line(&self, line_number: usize, line: &str, errors: &ErrorCtx) {
        let len = line.chars().count();
        let mut state = ScanState::Idle;

        let emit = |start: usize, end: usize| {
            errors
                .error(&self.config.pattern_message)
                .line_span(line_number, start, end);
        };

        for (idx, c) in line.chars().enumerate() {
            state = match state {
                ScanState::Idle if opens_span(c) => ScanState::Flagging { start: idx + 1 },
                ScanState::Idle => ScanState::Idle,
                // The space itself is the exclusive end.
                ScanState::Flagging { start } if c == ' ' => {
                    emit(start, idx + 1);
                    ScanState::Idle
                }
                ScanState::Flagging { start } if idx + 1 == len => {
                    emit(start, idx + 2);
                    ScanState::Idle
                }
                flagging => flagging,
            };
        }

        // Only reachable when the span opened on the last character.
        if let ScanState::Flagging { start } = state {
            emit(start, len + 1);
        }
    }
}

impl<'a> Detect for PatternDetector<'a> {
    fn detect(&mut self, source: &str, errors: &ErrorCtx) {
        let before = errors.len();
        let mut lines = 0;

        for (idx, line) in self.config.line_terminator.lines(source).enumerate() {
            self.scan_line(idx + 1, line, errors);
            lines += 1;
        }

        debug!(lines, flagged = errors.len() - before, "pattern scan finished");
    }
}

fn opens_span(c: char) -> bool {
    !c.is_ascii_digit() && !c.is_whitespace() && is_own_uppercase(c)
}

fn is_own_uppercase(c: char) -> bool {
    let mut upper = c.to_uppercase();
    upper.next() == Some(c) && upper.next().is_none()
}
