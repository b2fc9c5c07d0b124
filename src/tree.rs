//! Depth-first traversal over an error cause tree.
//!
//! [`ErrorTree`] knows the shapes a [`Diagnostic`] can take (leaf, single
//! cause, sibling causes, loader) and translates them into the callback
//! sequence documented on [`ErrorVisitor`]. Renderers never walk the tree
//! themselves.
//!
//! # Examples
//!
//! ```
//! use cause_tree::{ErrorNode, ErrorTree};
//!
//! let err = ErrorNode::new("Outer", "a")
//!     .with_cause(ErrorNode::new("Middle", "b").with_cause(ErrorNode::new("Inner", "c")));
//!
//! let depths: Vec<usize> = ErrorTree::new(&err).walk().iter().map(|(depth, _)| *depth).collect();
//! assert_eq!(depths, [0, 1, 2]);
//! ```

use crate::traits::{Causes, Diagnostic, ErrorVisitor};
use crate::types::alloc_type::Vec;

/// Traversal driver over one root error.
///
/// Built per formatting call and used once.
#[derive(Clone, Copy)]
pub struct ErrorTree<'a> {
    root: &'a dyn Diagnostic,
}

impl<'a> ErrorTree<'a> {
    #[inline]
    pub fn new(root: &'a dyn Diagnostic) -> Self {
        Self { root }
    }

    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &'a dyn Diagnostic {
        self.root
    }

    /// Walks the whole tree depth-first, feeding `visitor`.
    pub fn accept<V>(&self, visitor: &mut V)
    where
        V: ErrorVisitor<'a> + ?Sized,
    {
        Self::accept_node(self.root, 0, visitor);
    }

    fn accept_node<V>(node: &'a dyn Diagnostic, depth: usize, visitor: &mut V)
    where
        V: ErrorVisitor<'a> + ?Sized,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(depth, kind = %node.kind(), "visiting error node");

        let causes = node.causes();

        if causes.is_aggregate() {
            visitor.visit_complex(node, depth);
        }

        if causes.is_root_cause() {
            visitor.visit_root_cause(node, depth);
        }

        visitor.visit(node, depth);

        match causes {
            Causes::None => {},
            Causes::Single(cause) => {
                visitor.visit_inner(cause, depth + 1);
                Self::accept_node(cause, depth + 1, visitor);
            },
            Causes::Aggregate(siblings) | Causes::Loader(siblings) => {
                for cause in siblings {
                    visitor.visit_sibling_inner(cause, depth + 1);
                    Self::accept_node(cause, depth + 1, visitor);
                }
            },
        }
    }

    /// Every node in visiting order, paired with its depth.
    pub fn walk(&self) -> Vec<(usize, &'a dyn Diagnostic)> {
        let mut collector = NodeCollector { nodes: Vec::new(), leaves_only: false };
        self.accept(&mut collector);
        collector.nodes
    }

    /// Root-cause nodes (leaves and loaders) in visiting order, paired with
    /// their depth.
    pub fn root_causes(&self) -> Vec<(usize, &'a dyn Diagnostic)> {
        let mut collector = NodeCollector { nodes: Vec::new(), leaves_only: true };
        self.accept(&mut collector);
        collector.nodes
    }
}

impl core::fmt::Debug for ErrorTree<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ErrorTree").field("root", &self.root.kind()).finish_non_exhaustive()
    }
}

struct NodeCollector<'a> {
    nodes: Vec<(usize, &'a dyn Diagnostic)>,
    leaves_only: bool,
}

impl<'a> ErrorVisitor<'a> for NodeCollector<'a> {
    fn visit(&mut self, node: &'a dyn Diagnostic, depth: usize) {
        if !self.leaves_only {
            self.nodes.push((depth, node));
        }
    }

    fn visit_root_cause(&mut self, node: &'a dyn Diagnostic, depth: usize) {
        if self.leaves_only {
            self.nodes.push((depth, node));
        }
    }
}
