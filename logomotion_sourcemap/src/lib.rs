//! Source-mapping for `logomotion`.
//!
//! This crate is mostly intended to be an internal dependency of the `logomotion`
//! diagnostics workspace. End users are expected to use `logomotion`, the user-facing
//! API, instead of depending on this crate directly.
//!
//! Detectors report problems either as flat character offsets into the whole source or
//! as `(line, column)` pairs. `logomotion_sourcemap` contains the facility for converting
//! flat offsets to editor positions and back.

mod map;
mod position;
mod span;

#[doc(inline)]
pub use map::{translate, SourceMap, TranslateError};
#[doc(inline)]
pub use position::{LineTerminator, Position};
#[doc(inline)]
pub use span::Span;
