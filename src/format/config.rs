//! Rendering options for the detailed report.

use crate::types::alloc_type::String;
use crate::visitors::DEFAULT_MASK;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Indentation unit repeated once per depth level.
pub const DEFAULT_INDENT: &str = "   ";

/// Configuration consumed by [`DetailedVisitor`](crate::visitors::DetailedVisitor)
/// and [`Report`](crate::format::Report).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Emit each node's trace lines below its message.
    pub include_stack_trace: bool,
    /// Literal substring to mask in messages and trace lines.
    pub redact: Option<String>,
    /// Indentation unit per depth level.
    pub indent: String,
    /// Character that replaces each character of a redacted secret.
    pub mask: char,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self { include_stack_trace: true, redact: None, indent: DEFAULT_INDENT.into(), mask: DEFAULT_MASK }
    }
}

impl FormatConfig {
    /// Messages and traces, nothing masked.
    #[inline]
    pub fn detailed() -> Self {
        Self::default()
    }

    /// Messages only.
    #[inline]
    pub fn simple() -> Self {
        Self { include_stack_trace: false, ..Default::default() }
    }

    /// Messages and traces with `secret` masked.
    #[inline]
    pub fn cleansed(secret: impl Into<String>) -> Self {
        Self { redact: Some(secret.into()), ..Default::default() }
    }
}
