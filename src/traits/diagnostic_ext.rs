//! Method-call sugar over the [`format`](crate::format) functions.
//!
//! # Examples
//!
//! ```
//! use cause_tree::prelude::*;
//!
//! let err = ErrorNode::new("Exception", "foo")
//!     .with_cause(ErrorNode::new("ArgumentException", "bar"));
//!
//! assert_eq!(err.to_root_cause_string(), "bar");
//! assert_eq!(err.to_simple_string(), "[Exception] foo\n   CAUSED BY: [ROOT] [ArgumentException] bar");
//! ```

use crate::format::{self, Report};
use crate::traits::Diagnostic;
use crate::types::alloc_type::String;

/// Formatting methods available on every [`Diagnostic`].
pub trait DiagnosticExt: Diagnostic {
    /// See [`format::format_detailed`].
    fn to_detailed_string(&self) -> String;

    /// See [`format::format_detailed_cleansed`].
    fn to_cleansed_detailed_string(&self, secret: &str) -> String;

    /// See [`format::format_simple`].
    fn to_simple_string(&self) -> String;

    /// See [`format::format_root_causes`].
    fn to_root_cause_string(&self) -> String;

    /// Starts a configurable [`Report`].
    fn report(&self) -> Report<'_>;
}

impl<T: Diagnostic> DiagnosticExt for T {
    #[inline]
    fn to_detailed_string(&self) -> String {
        format::format_detailed(self)
    }

    #[inline]
    fn to_cleansed_detailed_string(&self, secret: &str) -> String {
        format::format_detailed_cleansed(self, secret)
    }

    #[inline]
    fn to_simple_string(&self) -> String {
        format::format_simple(self)
    }

    #[inline]
    fn to_root_cause_string(&self) -> String {
        format::format_root_causes(self)
    }

    #[inline]
    fn report(&self) -> Report<'_> {
        Report::new(self)
    }
}
