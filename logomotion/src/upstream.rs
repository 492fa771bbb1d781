use serde::Serialize;
use tracing::debug;

use logomotion_sourcemap::{LineTerminator, SourceMap, TranslateError};

use crate::report::{normalize, Diagnostic, Report};

/// Bilingual diagnostic message.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct Message {
    pub fin: String,
    pub eng: String,
}

/// Error record produced by the upstream compiler pipeline. `start` and `end` are flat
/// character offsets into the compiled source, `end` exclusive.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CompilerError {
    pub message: Message,
    pub start: usize,
    pub end: usize,
}

impl CompilerError {
    pub fn new<F, E>(fin: F, eng: E, start: usize, end: usize) -> Self
    where
        F: Into<String>,
        E: Into<String>,
    {
        CompilerError {
            message: Message {
                fin: fin.into(),
                eng: eng.into(),
            },
            start,
            end,
        }
    }
}

impl Diagnostic for CompilerError {
    type Message = Message;

    fn message(&self) -> &Message {
        &self.message
    }

    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }
}

/// External compiler: tokenizes, parses, type-checks and generates code for a source,
/// returning the errors it found. An empty result means compilation succeeded.
pub trait Pipeline {
    fn compile(&mut self, code: &str) -> Vec<CompilerError>;
}

impl<F> Pipeline for F
where
    F: FnMut(&str) -> Vec<CompilerError>,
{
    fn compile(&mut self, code: &str) -> Vec<CompilerError> {
        self(code)
    }
}

/// Runs `pipeline` on `code` and reports its errors in both editor and flat coordinates.
pub fn run_pipeline<P: Pipeline + ?Sized>(
    pipeline: &mut P,
    code: &str,
    terminator: LineTerminator,
) -> Result<Report<Message>, TranslateError> {
    let errors = pipeline.compile(code);
    debug!(errors = errors.len(), "upstream pipeline finished");

    if errors.is_empty() {
        return Ok(Report::new());
    }

    normalize(&errors, &SourceMap::new(code, terminator))
}
