//! Diagnostic spans for the logomotion editor.
//!
//! Detectors scan a block of source text and flag regions of it. Those regions are
//! reported twice: once in `(line, column)` form for display in the editor, and once in
//! flat character offsets for programmatic re-use. This crate ties together the detectors
//! in `logomotion_scan`, the offset translation in `logomotion_sourcemap`, and the
//! collaborators around them: artifact persistence and the upstream compiler pipeline.
//!
//! ```
//! use logomotion::{normalize, Config, SourceMap};
//! use logomotion::scan::detect_pattern;
//!
//! let config = Config::new();
//! let source = "fd 100\nRt 90";
//!
//! let spans = detect_pattern(source, &config);
//! let map = SourceMap::new(source, config.line_terminator);
//! let report = normalize(&spans, &map).unwrap();
//!
//! assert_eq!(2, report.pretty[0].line);
//! assert_eq!(7, report.raw[0].start_offset);
//! ```

pub mod compiler;
pub mod persist;
pub mod report;
pub mod upstream;

pub use logomotion_err as err;
pub use logomotion_scan as scan;

#[doc(inline)]
pub use compiler::{CompileError, MockCompiler};
#[doc(inline)]
pub use logomotion_config::{Config, OffsetMode};
#[doc(inline)]
pub use logomotion_sourcemap::{translate, LineTerminator, Position, SourceMap, TranslateError};
#[doc(inline)]
pub use persist::{DirSink, Identity, NullSink, PersistError, Sink};
#[doc(inline)]
pub use report::{normalize, Diagnostic, PrettyRecord, RawRecord, Report};
#[doc(inline)]
pub use upstream::{run_pipeline, CompilerError, Message, Pipeline};
