//! Owned error value implementing [`Diagnostic`].
//!
//! [`ErrorNode`] is what callers build when they do not already have a type
//! implementing [`Diagnostic`]: a kind, a message, an optional trace and one
//! of four shapes ([`NodeShape`]).

use crate::traits::{Causes, Diagnostic};
use crate::types::alloc_type::{format, Box, Cow, String, ToString, Vec};
use crate::types::ShapeError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind reported for errors reached through `source()`, whose concrete type is erased.
pub const SOURCE_KIND: &str = "Error";

/// Causal shape of an [`ErrorNode`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NodeShape {
    /// No cause: the node is a root cause.
    #[default]
    Leaf,
    /// Exactly one cause.
    Caused(Box<ErrorNode>),
    /// Ordered sibling causes.
    Aggregate(Vec<ErrorNode>),
    /// Container whose whole content is its sub-errors. Rendered like an
    /// aggregate under a synthetic message, and reported as a root cause
    /// itself.
    Loader(Vec<ErrorNode>),
}

/// Owned node of an error cause tree.
///
/// # Examples
///
/// ```
/// use cause_tree::ErrorNode;
///
/// let err = ErrorNode::new("IoError", "failed to open config")
///     .with_cause(ErrorNode::new("NotFound", "config.toml does not exist"));
///
/// assert_eq!(
///     cause_tree::format_detailed(&err),
///     "[IoError] failed to open config\n\n   CAUSED BY: [ROOT] [NotFound] config.toml does not exist"
/// );
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNode {
    pub(crate) kind: String,
    pub(crate) message: String,
    pub(crate) trace: Option<String>,
    pub(crate) shape: NodeShape,
}

impl ErrorNode {
    /// Creates a leaf node.
    #[inline]
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: kind.into(), message: message.into(), trace: None, shape: NodeShape::Leaf }
    }

    /// Creates a node with ordered sibling causes.
    pub fn aggregate<I>(kind: impl Into<String>, message: impl Into<String>, causes: I) -> Self
    where
        I: IntoIterator<Item = ErrorNode>,
    {
        Self {
            kind: kind.into(),
            message: message.into(),
            trace: None,
            shape: NodeShape::Aggregate(causes.into_iter().collect()),
        }
    }

    /// Creates a loader node: its message is fixed and its content lives in
    /// `causes`. Without any sub-error the node is a plain leaf.
    pub fn loader<I>(kind: impl Into<String>, causes: I) -> Self
    where
        I: IntoIterator<Item = ErrorNode>,
    {
        let kind = kind.into();
        let causes: Vec<_> = causes.into_iter().collect();
        let message = loader_message(&kind);
        let shape = if causes.is_empty() { NodeShape::Leaf } else { NodeShape::Loader(causes) };
        Self { kind, message, trace: None, shape }
    }

    /// Assembles a node from loose parts.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::CauseAndCauses`] when both a single cause and a
    /// non-empty sibling list are supplied.
    pub fn from_parts(
        kind: impl Into<String>,
        message: impl Into<String>,
        trace: Option<String>,
        cause: Option<ErrorNode>,
        causes: Option<Vec<ErrorNode>>,
    ) -> Result<Self, ShapeError> {
        let shape = match (cause, causes) {
            (Some(_), Some(list)) if !list.is_empty() => {
                return Err(ShapeError::CauseAndCauses { siblings: list.len() })
            },
            (Some(cause), _) => NodeShape::Caused(Box::new(cause)),
            (None, Some(list)) => NodeShape::Aggregate(list),
            (None, None) => NodeShape::Leaf,
        };
        Ok(Self { kind: kind.into(), message: message.into(), trace, shape })
    }

    /// Snapshots an error and its `source()` chain.
    ///
    /// The root kind is the last path segment of `E`'s type name. Sources are
    /// only reachable as `dyn Error`, so they are reported as [`SOURCE_KIND`].
    pub fn from_error<E>(error: &E) -> Self
    where
        E: core::error::Error + 'static,
    {
        let node = Self::from_dyn_error(error, short_type_name::<E>());
        #[cfg(feature = "tracing")]
        tracing::trace!(kind = %node.kind, depth = node.depth(), "captured error chain");
        node
    }

    /// Snapshots a type-erased error and its `source()` chain, using `kind`
    /// for the top node.
    pub fn from_dyn_error(error: &(dyn core::error::Error + 'static), kind: &str) -> Self {
        let mut chain = Vec::new();
        let mut current = error.source();
        while let Some(source) = current {
            chain.push(Self::new(SOURCE_KIND, source.to_string()));
            current = source.source();
        }

        let mut node = Self::new(kind, error.to_string());
        if let Some(innermost) = chain.pop() {
            let cause = chain.into_iter().rev().fold(innermost, |inner, outer| outer.with_cause(inner));
            node = node.with_cause(cause);
        }
        node
    }

    /// Attaches a multi-line trace.
    #[inline]
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    /// Sets `cause` as the single cause, replacing any previous shape.
    #[inline]
    pub fn with_cause(mut self, cause: ErrorNode) -> Self {
        self.shape = NodeShape::Caused(Box::new(cause));
        self
    }

    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    #[inline]
    pub fn shape(&self) -> &NodeShape {
        &self.shape
    }

    /// Returns `true` when the node has no cause.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        match &self.shape {
            NodeShape::Leaf => true,
            NodeShape::Caused(_) => false,
            NodeShape::Aggregate(list) | NodeShape::Loader(list) => list.is_empty(),
        }
    }

    /// Length of the longest path from this node down to a leaf.
    pub fn depth(&self) -> usize {
        match &self.shape {
            NodeShape::Leaf => 0,
            NodeShape::Caused(cause) => 1 + cause.depth(),
            NodeShape::Aggregate(list) | NodeShape::Loader(list) => {
                list.iter().map(|c| 1 + c.depth()).max().unwrap_or(0)
            },
        }
    }
}

impl Diagnostic for ErrorNode {
    #[inline]
    fn kind(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.kind.as_str())
    }

    #[inline]
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.message.as_str())
    }

    #[inline]
    fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    fn causes(&self) -> Causes<'_> {
        match &self.shape {
            NodeShape::Leaf => Causes::None,
            NodeShape::Caused(cause) => Causes::Single(&**cause),
            NodeShape::Aggregate(list) => Causes::aggregate(list.iter().map(|c| c as &dyn Diagnostic)),
            NodeShape::Loader(list) => Causes::loader(list.iter().map(|c| c as &dyn Diagnostic)),
        }
    }
}

impl core::fmt::Display for ErrorNode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for ErrorNode {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.shape {
            NodeShape::Caused(cause) => Some(&**cause),
            _ => None,
        }
    }
}

/// Placeholder message carried by loader nodes.
pub fn loader_message(kind: &str) -> String {
    format!("Error of type '{}' was thrown.", kind)
}

/// Last path segment of a type name, generics stripped.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = core::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
