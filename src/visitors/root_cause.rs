use crate::traits::{Diagnostic, ErrorVisitor};
use crate::types::alloc_type::String;

/// Collects the messages of root-cause errors (leaves and loaders), space-separated
/// in visiting order.
///
/// # Examples
///
/// ```
/// use cause_tree::visitors::RootCauseVisitor;
/// use cause_tree::{ErrorNode, ErrorTree};
///
/// let err = ErrorNode::new("Http", "request failed")
///     .with_cause(ErrorNode::new("Dns", "no such host"));
///
/// let mut visitor = RootCauseVisitor::new();
/// ErrorTree::new(&err).accept(&mut visitor);
/// assert_eq!(visitor.as_str(), "no such host");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RootCauseVisitor {
    output: String,
}

impl RootCauseVisitor {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.output
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.output
    }
}

impl<'a> ErrorVisitor<'a> for RootCauseVisitor {
    fn visit_root_cause(&mut self, node: &'a dyn Diagnostic, _depth: usize) {
        if !self.output.is_empty() {
            self.output.push(' ');
        }
        self.output.push_str(&node.message());
    }
}
