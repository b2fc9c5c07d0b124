//! Core traits of the renderer.
//!
//! - [`Diagnostic`]: how the renderer reads an error and its causes
//! - [`ErrorVisitor`]: callbacks fired while [`ErrorTree`](crate::tree::ErrorTree) walks a cause tree
//! - [`DiagnosticExt`]: formatting methods on every [`Diagnostic`]
//!
//! # Examples
//!
//! ```
//! use cause_tree::traits::{Diagnostic, ErrorVisitor};
//! use cause_tree::{ErrorNode, ErrorTree};
//!
//! #[derive(Default)]
//! struct MaxDepth(usize);
//!
//! impl<'a> ErrorVisitor<'a> for MaxDepth {
//!     fn visit(&mut self, _node: &'a dyn Diagnostic, depth: usize) {
//!         self.0 = self.0.max(depth);
//!     }
//! }
//!
//! let err = ErrorNode::new("A", "a").with_cause(ErrorNode::new("B", "b"));
//! let mut max = MaxDepth::default();
//! ErrorTree::new(&err).accept(&mut max);
//! assert_eq!(max.0, 1);
//! ```

pub mod diagnostic;
pub mod diagnostic_ext;
pub mod visitor;

pub use diagnostic::{Causes, Diagnostic};
pub use diagnostic_ext::DiagnosticExt;
pub use visitor::ErrorVisitor;
