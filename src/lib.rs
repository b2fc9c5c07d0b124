//! Renders an error and its whole cause tree (single causes, aggregates and
//! loader-style containers) into deterministic diagnostic text, optionally
//! masking a secret.
//!
//! Errors are read through the [`Diagnostic`] trait. [`ErrorTree`] walks the
//! cause tree depth-first and drives an [`ErrorVisitor`]; the visitors in
//! [`visitors`] turn those callbacks into text.
//!
//! # Examples
//!
//! ## Cause chain
//!
//! ```
//! use cause_tree::{format_detailed, ErrorNode};
//!
//! let err = ErrorNode::new("Exception", "foo").with_cause(ErrorNode::new("ArgumentException", "bar"));
//!
//! assert_eq!(format_detailed(&err), "[Exception] foo\n\n   CAUSED BY: [ROOT] [ArgumentException] bar");
//! ```
//!
//! ## Aggregate
//!
//! ```
//! use cause_tree::{format_detailed, format_root_causes, ErrorNode};
//!
//! let err = ErrorNode::aggregate(
//!     "AggregateException",
//!     "foo",
//!     [ErrorNode::new("Exception", "bar1"), ErrorNode::new("Exception", "bar2")],
//! );
//!
//! assert_eq!(
//!     format_detailed(&err),
//!     "[AggregateException] foo\n\n   CAUSE #1: [ROOT] [Exception] bar1\n\n   CAUSE #2: [ROOT] [Exception] bar2"
//! );
//! assert_eq!(format_root_causes(&err), "bar1 bar2");
//! ```
//!
//! ## Redaction
//!
//! ```
//! use cause_tree::{format_detailed_cleansed, ErrorNode};
//!
//! let err = ErrorNode::new("Exception", "foo secret bar");
//! assert_eq!(format_detailed_cleansed(&err, "secret"), "[ROOT] [Exception] foo xxxxxx bar");
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Formatting entry points and rendering configuration
pub mod format;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capability, visitor and extension traits
pub mod traits;
/// Depth-first traversal driver
pub mod tree;
/// Owned error values and supporting types
pub mod types;
/// Renderers driven by the traversal
pub mod visitors;

pub use format::{
    format_detailed, format_detailed_cleansed, format_root_causes, format_simple, FormatConfig,
    Report,
};
pub use traits::{Causes, Diagnostic, DiagnosticExt, ErrorVisitor};
pub use tree::ErrorTree;
pub use types::{CauseVec, ErrorNode, NodeShape, ShapeError};
