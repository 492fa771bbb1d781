//! Diagnostics for `logomotion`.
//!
//! This crate is mostly intended to be an internal dependency of the `logomotion`
//! diagnostics workspace. End users are expected to use `logomotion`, the user-facing
//! API, instead of depending on this crate directly.
//!
//! This crate defines the types detectors use to emit diagnostics, and `RawSpan`, the
//! plain form those diagnostics are handed on in.

use std::fmt::{self, Display};

use typed_arena::Arena;

mod error;

#[doc(inline)]
pub use error::{Anchor, Error, ErrorBuilder, RawSpan};

/// A context for emitting errors during a single detection pass.
#[derive(Default)]
pub struct ErrorCtx {
    errors: Arena<ErrorBuilder>,
}

impl fmt::Debug for ErrorCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ErrorCtx { .. }")
    }
}

// This is safe because `Arena::alloc` always allocates new memory. No aliases to the
// same memory locations are ever created.
#[allow(clippy::mut_from_ref)]
impl ErrorCtx {
    /// Create a new empty `ErrorCtx`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no errors have been emitted.
    pub fn is_empty(&self) -> bool {
        self.errors.len() == 0
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Add a new error.
    pub fn error<S: Display>(&self, msg: S) -> &mut ErrorBuilder {
        self.errors.alloc(ErrorBuilder::new(msg))
    }

    /// Returns all builders in emission order.
    pub fn into_vec(self) -> Vec<ErrorBuilder> {
        self.errors.into_vec()
    }

    /// Returns all anchored errors as `RawSpan`s, in emission order. Errors that were
    /// never given a location are skipped.
    pub fn into_spans(self) -> Vec<RawSpan> {
        self.into_vec()
            .into_iter()
            .filter_map(|builder| builder.done().to_raw_span())
            .collect()
    }
}
