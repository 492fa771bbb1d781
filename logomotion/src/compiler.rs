use thiserror::Error;
use tracing::{debug, info};

use logomotion_config::Config;
use logomotion_scan::{detect_pattern, detect_stochastic, Draw};
use logomotion_sourcemap::{SourceMap, TranslateError};

use crate::persist::{Identity, PersistError, Sink};
use crate::report::{normalize, PrettyRecord, Report};

#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Translate(#[from] TranslateError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Stand-in for the real compiler, used to drive the editor without it.
#[derive(Debug)]
pub struct MockCompiler<D, S> {
    config: Config,
    draw: D,
    sink: S,
}

impl<D: Draw, S: Sink> MockCompiler<D, S> {
    pub fn new(config: Config, draw: D, sink: S) -> Self {
        MockCompiler { config, draw, sink }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Flags a random subset of the tokens of `code`, stores an artifact for it under
    /// `identity`, and reports the flagged tokens.
    pub fn compile(
        &mut self,
        code: &str,
        output_file: &str,
        identity: &Identity,
    ) -> Result<Report<String>, CompileError> {
        let spans = detect_stochastic(code, &mut self.draw, &self.config);
        let stored = self.sink.store(identity, output_file, code)?;

        let map = SourceMap::new(code, self.config.line_terminator);
        let report = normalize(&spans, &map)?;

        info!(
            %identity,
            output_file,
            stored = ?stored,
            errors = report.len(),
            "mock compilation finished"
        );
        Ok(report)
    }

    /// Flags tokens starting with an uppercase character. Nothing is stored.
    pub fn compile_lines(&self, code: &str) -> Vec<PrettyRecord<String>> {
        let records: Vec<_> = detect_pattern(code, &self.config)
            .iter()
            .filter_map(PrettyRecord::from_line_span)
            .collect();

        debug!(errors = records.len(), "line check finished");
        records
    }
}
