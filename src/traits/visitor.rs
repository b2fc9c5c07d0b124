//! Callback protocol between [`ErrorTree`](crate::tree::ErrorTree) and renderers.
//!
//! The tree owns the walk; a visitor only reacts to structural events. For
//! every node the tree calls, in order:
//!
//! 1. [`visit_complex`](ErrorVisitor::visit_complex) if the node is an aggregate or loader,
//! 2. [`visit_root_cause`](ErrorVisitor::visit_root_cause) if the node is a leaf or loader,
//! 3. [`visit`](ErrorVisitor::visit),
//!
//! and before descending into each child it calls either
//! [`visit_inner`](ErrorVisitor::visit_inner) (single cause) or
//! [`visit_sibling_inner`](ErrorVisitor::visit_sibling_inner) (aggregate
//! member) with the child's depth.
//!
//! All callbacks default to no-ops so a visitor implements only what it needs.

use crate::traits::Diagnostic;

/// Receiver of traversal events emitted by [`ErrorTree::accept`](crate::tree::ErrorTree::accept).
///
/// `depth` is 0 for the root and grows by one per cause level.
pub trait ErrorVisitor<'a> {
    /// Called once for every node, after the structural markers for that node.
    fn visit(&mut self, _node: &'a dyn Diagnostic, _depth: usize) {}

    /// Called first for a node that carries an ordered list of sibling causes.
    fn visit_complex(&mut self, _node: &'a dyn Diagnostic, _depth: usize) {}

    /// Called before descending into the single cause of the previous node.
    fn visit_inner(&mut self, _cause: &'a dyn Diagnostic, _depth: usize) {}

    /// Called before descending into each sibling cause of an aggregate node.
    fn visit_sibling_inner(&mut self, _cause: &'a dyn Diagnostic, _depth: usize) {}

    /// Called for a node with no further cause, or a loader, before [`visit`](Self::visit).
    fn visit_root_cause(&mut self, _node: &'a dyn Diagnostic, _depth: usize) {}
}

impl<'a, V: ErrorVisitor<'a> + ?Sized> ErrorVisitor<'a> for &mut V {
    #[inline]
    fn visit(&mut self, node: &'a dyn Diagnostic, depth: usize) {
        (**self).visit(node, depth)
    }

    #[inline]
    fn visit_complex(&mut self, node: &'a dyn Diagnostic, depth: usize) {
        (**self).visit_complex(node, depth)
    }

    #[inline]
    fn visit_inner(&mut self, cause: &'a dyn Diagnostic, depth: usize) {
        (**self).visit_inner(cause, depth)
    }

    #[inline]
    fn visit_sibling_inner(&mut self, cause: &'a dyn Diagnostic, depth: usize) {
        (**self).visit_sibling_inner(cause, depth)
    }

    #[inline]
    fn visit_root_cause(&mut self, node: &'a dyn Diagnostic, depth: usize) {
        (**self).visit_root_cause(node, depth)
    }
}
