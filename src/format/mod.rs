//! Formatting entry points.
//!
//! Each function builds a fresh [`ErrorTree`] and visitor, walks the error
//! once and returns the rendered text. None of them fail or mutate their
//! input.
//!
//! | Function | Traces | Redaction | Output |
//! |----------|--------|-----------|--------|
//! | [`format_detailed`] | yes | no | full report |
//! | [`format_detailed_cleansed`] | yes | yes | full report |
//! | [`format_simple`] | no | no | full report |
//! | [`format_root_causes`] | - | - | root-cause messages |
//!
//! For other combinations use [`Report`] or
//! [`DetailedVisitor::with_config`].

use crate::traits::Diagnostic;
use crate::tree::ErrorTree;
use crate::types::alloc_type::String;
use crate::visitors::{DetailedVisitor, RootCauseVisitor};

pub mod config;
pub mod report;

pub use config::{FormatConfig, DEFAULT_INDENT};
pub use report::Report;

/// Renders `error` with `config`.
///
/// # Examples
///
/// ```
/// use cause_tree::format::{render, FormatConfig};
/// use cause_tree::ErrorNode;
///
/// let err = ErrorNode::new("Auth", "token abc123 rejected");
/// let config = FormatConfig { mask: '*', ..FormatConfig::cleansed("abc123") };
/// assert_eq!(render(&err, &config), "[ROOT] [Auth] token ****** rejected");
/// ```
pub fn render<D>(error: &D, config: &FormatConfig) -> String
where
    D: Diagnostic + ?Sized,
{
    let mut visitor = DetailedVisitor::with_config(config);
    ErrorTree::new(&error).accept(&mut visitor);
    let output = visitor.into_string();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        kind = %error.kind(),
        stack_traces = config.include_stack_trace,
        redacted = config.redact.is_some(),
        len = output.len(),
        "rendered error report"
    );

    output
}

/// Outputs every message in the cause tree together with its trace.
///
/// # Arguments
///
/// * `error` - Root of the cause tree
///
/// # Examples
///
/// ```
/// use cause_tree::{format_detailed, ErrorNode};
///
/// let err = ErrorNode::new("Query", "insert failed")
///     .with_cause(ErrorNode::new("Constraint", "duplicate key").with_trace("at insert()"));
///
/// assert_eq!(
///     format_detailed(&err),
///     "[Query] insert failed\n\n   CAUSED BY: [ROOT] [Constraint] duplicate key\n   at insert()"
/// );
/// ```
#[inline]
pub fn format_detailed<D>(error: &D) -> String
where
    D: Diagnostic + ?Sized,
{
    render(error, &FormatConfig::detailed())
}

/// Outputs every message and trace, replacing each occurrence of `secret`
/// with as many `x` characters.
///
/// A blank `secret` leaves the text untouched.
///
/// # Arguments
///
/// * `error` - Root of the cause tree
/// * `secret` - Literal substring to mask
///
/// # Examples
///
/// ```
/// use cause_tree::{format_detailed_cleansed, ErrorNode};
///
/// let err = ErrorNode::new("Exception", "foo secret bar");
/// assert_eq!(format_detailed_cleansed(&err, "secret"), "[ROOT] [Exception] foo xxxxxx bar");
/// ```
#[inline]
pub fn format_detailed_cleansed<D>(error: &D, secret: &str) -> String
where
    D: Diagnostic + ?Sized,
{
    render(error, &FormatConfig::cleansed(secret))
}

/// Outputs every message in the cause tree, without traces.
///
/// # Arguments
///
/// * `error` - Root of the cause tree
///
/// # Examples
///
/// ```
/// use cause_tree::{format_simple, ErrorNode};
///
/// let err = ErrorNode::new("Query", "insert failed")
///     .with_cause(ErrorNode::new("Constraint", "duplicate key").with_trace("at insert()"));
///
/// assert_eq!(format_simple(&err), "[Query] insert failed\n   CAUSED BY: [ROOT] [Constraint] duplicate key");
/// ```
#[inline]
pub fn format_simple<D>(error: &D) -> String
where
    D: Diagnostic + ?Sized,
{
    render(error, &FormatConfig::simple())
}

/// Outputs the messages of the innermost errors (the root causes) only,
/// separated by single spaces.
///
/// # Arguments
///
/// * `error` - Root of the cause tree
///
/// # Examples
///
/// ```
/// use cause_tree::{format_root_causes, ErrorNode};
///
/// let err = ErrorNode::aggregate(
///     "Aggregate",
///     "foo",
///     [ErrorNode::new("Exception", "bar1"), ErrorNode::new("Exception", "bar2")],
/// );
/// assert_eq!(format_root_causes(&err), "bar1 bar2");
/// ```
pub fn format_root_causes<D>(error: &D) -> String
where
    D: Diagnostic + ?Sized,
{
    let mut visitor = RootCauseVisitor::new();
    ErrorTree::new(&error).accept(&mut visitor);
    let output = visitor.into_string();

    #[cfg(feature = "tracing")]
    tracing::debug!(kind = %error.kind(), len = output.len(), "rendered root causes");

    output
}
