//! Full hierarchical report: kinds, messages, traces and cause markers.

use core::fmt::Write;

use smallvec::SmallVec;

use crate::format::FormatConfig;
use crate::traits::{Diagnostic, ErrorVisitor};
use crate::types::alloc_type::String;
use crate::visitors::Redactor;

const ROOT_MARKER: &str = "[ROOT] ";
const CAUSED_BY: &str = "CAUSED BY: ";
const CAUSE_PREFIX: &str = "CAUSE #";

/// Renders every node as `[<kind>] <message>`, optionally followed by its
/// trace lines, with nested causes indented one unit per depth level.
///
/// `CAUSE #N` numbering is kept per depth level: a nested aggregate numbers
/// its own siblings from 1 and leaves its parent's count untouched.
///
/// # Examples
///
/// ```
/// use cause_tree::visitors::DetailedVisitor;
/// use cause_tree::{ErrorNode, ErrorTree};
///
/// let err = ErrorNode::new("Io", "read failed").with_trace("at read()\nat main()");
///
/// let mut visitor = DetailedVisitor::new();
/// ErrorTree::new(&err).accept(&mut visitor);
/// assert_eq!(visitor.as_str(), "[ROOT] [Io] read failed\nat read()\nat main()");
/// ```
#[derive(Debug, Clone)]
pub struct DetailedVisitor {
    output: String,
    include_stack_trace: bool,
    indent: String,
    redactor: Redactor,
    /// Sibling counters indexed by the depth of the siblings they number.
    sibling_counters: SmallVec<[usize; 8]>,
}

impl Default for DetailedVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailedVisitor {
    /// Messages and traces, nothing masked.
    #[inline]
    pub fn new() -> Self {
        Self::with_config(&FormatConfig::detailed())
    }

    /// Messages only.
    #[inline]
    pub fn simple() -> Self {
        Self::with_config(&FormatConfig::simple())
    }

    /// Messages and traces with `secret` masked.
    #[inline]
    pub fn cleansed(secret: &str) -> Self {
        Self::with_config(&FormatConfig::cleansed(secret))
    }

    pub fn with_config(config: &FormatConfig) -> Self {
        let redactor = match &config.redact {
            Some(secret) => Redactor::with_mask(secret, config.mask),
            None => Redactor::disabled(),
        };
        Self {
            output: String::new(),
            include_stack_trace: config.include_stack_trace,
            indent: config.indent.clone(),
            redactor,
            sibling_counters: SmallVec::new(),
        }
    }

    /// Report accumulated so far.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.output
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.output
    }

    fn push_padding(&mut self, depth: usize) {
        for _ in 0..depth {
            self.output.push_str(&self.indent);
        }
    }

    fn prepare_for_cause(&mut self, depth: usize) {
        if self.include_stack_trace {
            self.output.push('\n');
        }
        self.output.push('\n');
        self.push_padding(depth);
    }

    fn counter_at(&mut self, depth: usize) -> &mut usize {
        if self.sibling_counters.len() <= depth {
            self.sibling_counters.resize(depth + 1, 0);
        }
        &mut self.sibling_counters[depth]
    }
}

impl<'a> ErrorVisitor<'a> for DetailedVisitor {
    fn visit(&mut self, node: &'a dyn Diagnostic, depth: usize) {
        self.output.push('[');
        self.output.push_str(&node.kind());
        self.output.push_str("] ");
        let message = node.message();
        let message = self.redactor.redact(&message);
        self.output.push_str(&message);

        if !self.include_stack_trace {
            return;
        }
        let Some(trace) = node.trace().filter(|t| !t.is_empty()) else {
            return;
        };
        for line in trace.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            self.output.push('\n');
            self.push_padding(depth);
            let line = self.redactor.redact(line);
            self.output.push_str(&line);
        }
    }

    fn visit_complex(&mut self, _node: &'a dyn Diagnostic, depth: usize) {
        *self.counter_at(depth + 1) = 0;
    }

    fn visit_inner(&mut self, _cause: &'a dyn Diagnostic, depth: usize) {
        self.prepare_for_cause(depth);
        self.output.push_str(CAUSED_BY);
    }

    fn visit_sibling_inner(&mut self, _cause: &'a dyn Diagnostic, depth: usize) {
        self.prepare_for_cause(depth);
        let counter = self.counter_at(depth);
        *counter += 1;
        let index = *counter;

        self.output.push_str(CAUSE_PREFIX);
        let _ = write!(self.output, "{}: ", index);
    }

    fn visit_root_cause(&mut self, _node: &'a dyn Diagnostic, _depth: usize) {
        self.output.push_str(ROOT_MARKER);
    }
}
