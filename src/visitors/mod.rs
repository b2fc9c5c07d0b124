//! Renderers driven by [`ErrorTree`](crate::tree::ErrorTree).
//!
//! - [`DetailedVisitor`]: kinds, messages, traces and cause markers, with optional redaction
//! - [`RootCauseVisitor`]: leaf messages only
//! - [`Redactor`]: the masking pass used by [`DetailedVisitor`]

pub mod detailed;
pub mod redact;
pub mod root_cause;

pub use detailed::DetailedVisitor;
pub use redact::{Redactor, DEFAULT_MASK};
pub use root_cause::RootCauseVisitor;
