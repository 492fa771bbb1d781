//! Span detectors for `logomotion`.
//!
//! This crate is mostly intended to be an internal dependency of the `logomotion`
//! diagnostics workspace. End users are expected to use `logomotion`, the user-facing
//! API, instead of depending on this crate directly.
//!
//! Two detectors are provided. `StochasticDetector` flags a random subset of
//! whitespace-delimited tokens and reports flat offsets; it is a stand-in for a real
//! compiler. `PatternDetector` flags tokens starting with an uppercase character and
//! reports line-relative columns.

use logomotion_config::Config;
use logomotion_err::{ErrorCtx, RawSpan};

pub mod draw;
pub mod pattern;
pub mod stochastic;
pub mod token;

#[doc(inline)]
pub use draw::{Draw, FixedDraws, RngDraw};
#[doc(inline)]
pub use pattern::PatternDetector;
#[doc(inline)]
pub use stochastic::StochasticDetector;

/// A single detection strategy.
pub trait Detect {
    /// Scans `source` and emits a diagnostic into `errors` for every flagged region.
    fn detect(&mut self, source: &str, errors: &ErrorCtx);
}

/// Runs `detector` over `source` in a fresh `ErrorCtx` and returns the emitted spans.
pub fn run<D: Detect + ?Sized>(detector: &mut D, source: &str) -> Vec<RawSpan> {
    let errors = ErrorCtx::new();
    detector.detect(source, &errors);
    errors.into_spans()
}

/// Flags a random subset of the tokens in `source`. The returned spans are flat.
pub fn detect_stochastic<D: Draw>(source: &str, draw: D, config: &Config) -> Vec<RawSpan> {
    run(&mut StochasticDetector::new(draw, config), source)
}

/// Flags tokens starting with an uppercase character. The returned spans are
/// line-relative.
pub fn detect_pattern(source: &str, config: &Config) -> Vec<RawSpan> {
    run(&mut PatternDetector::new(config), source)
}
