//! Capability trait through which the renderer reads an error.
//!
//! The renderer never owns or builds errors. It sees every node of a cause
//! tree as a `&dyn Diagnostic` and asks it four things: what kind it is, what
//! it says, where it was raised (an optional multi-line trace), and what
//! caused it.
//!
//! # Examples
//!
//! ```
//! use cause_tree::traits::{Causes, Diagnostic};
//! use cause_tree::types::alloc_type::Cow;
//!
//! struct Timeout;
//!
//! impl Diagnostic for Timeout {
//!     fn kind(&self) -> Cow<'_, str> {
//!         Cow::Borrowed("Timeout")
//!     }
//!
//!     fn message(&self) -> Cow<'_, str> {
//!         Cow::Borrowed("request timed out after 30s")
//!     }
//!
//!     fn causes(&self) -> Causes<'_> {
//!         Causes::None
//!     }
//! }
//!
//! assert_eq!(cause_tree::format_simple(&Timeout), "[ROOT] [Timeout] request timed out after 30s");
//! ```

use crate::types::alloc_type::Cow;
use crate::types::CauseVec;

/// Read-only view of one node in an error cause tree.
pub trait Diagnostic {
    /// Stable identifier for the concrete kind of error, rendered as `[<kind>]`.
    fn kind(&self) -> Cow<'_, str>;

    /// Human-readable message.
    fn message(&self) -> Cow<'_, str>;

    /// Optional machine-readable trace, one frame per line.
    #[inline]
    fn trace(&self) -> Option<&str> {
        None
    }

    /// What caused this error.
    fn causes(&self) -> Causes<'_>;
}

/// Causal structure below a [`Diagnostic`] node.
///
/// A node has either nothing, one cause, or an ordered list of sibling
/// causes; never a single cause and siblings at once.
#[derive(Default)]
pub enum Causes<'a> {
    /// Leaf node: this error is a root cause.
    #[default]
    None,
    /// Exactly one underlying cause.
    Single(&'a dyn Diagnostic),
    /// Ordered, independent sibling causes.
    ///
    /// A node reporting this variant is structurally an aggregate even when
    /// the list holds one entry or none.
    Aggregate(CauseVec<'a>),
    /// Sub-errors of a loader-style container.
    ///
    /// Walked like [`Aggregate`](Self::Aggregate), but the node itself is
    /// also a root cause since none of its sub-errors is its single cause.
    Loader(CauseVec<'a>),
}

impl<'a> Causes<'a> {
    /// Builds the aggregate variant from any iterator of causes.
    pub fn aggregate<I>(causes: I) -> Self
    where
        I: IntoIterator<Item = &'a dyn Diagnostic>,
    {
        Causes::Aggregate(causes.into_iter().collect())
    }

    /// Builds the loader variant from any iterator of sub-errors.
    pub fn loader<I>(causes: I) -> Self
    where
        I: IntoIterator<Item = &'a dyn Diagnostic>,
    {
        Causes::Loader(causes.into_iter().collect())
    }

    /// Returns `true` when there is no cause at all.
    ///
    /// An empty aggregate or loader is also terminal.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        match self {
            Causes::None => true,
            Causes::Single(_) => false,
            Causes::Aggregate(list) | Causes::Loader(list) => list.is_empty(),
        }
    }

    /// Returns `true` when the node owning these causes counts as a root
    /// cause: it is terminal, or it is a loader.
    #[inline]
    pub fn is_root_cause(&self) -> bool {
        matches!(self, Causes::Loader(_)) || self.is_terminal()
    }

    /// Returns `true` for the aggregate and loader variants, regardless of
    /// their length.
    #[inline]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Causes::Aggregate(_) | Causes::Loader(_))
    }

    /// Number of direct causes.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Causes::None => 0,
            Causes::Single(_) => 1,
            Causes::Aggregate(list) | Causes::Loader(list) => list.len(),
        }
    }

    /// Returns `true` when [`len`](Self::len) is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl core::fmt::Debug for Causes<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Causes::None => f.write_str("None"),
            Causes::Single(cause) => f.debug_tuple("Single").field(&cause.kind()).finish(),
            Causes::Aggregate(list) => f.debug_tuple("Aggregate").field(&kinds(list)).finish(),
            Causes::Loader(list) => f.debug_tuple("Loader").field(&kinds(list)).finish(),
        }
    }
}

fn kinds<'c>(list: &'c CauseVec<'_>) -> crate::types::alloc_type::Vec<Cow<'c, str>> {
    list.iter().map(|c| c.kind()).collect()
}

impl<T: Diagnostic + ?Sized> Diagnostic for &T {
    #[inline]
    fn kind(&self) -> Cow<'_, str> {
        (**self).kind()
    }

    #[inline]
    fn message(&self) -> Cow<'_, str> {
        (**self).message()
    }

    #[inline]
    fn trace(&self) -> Option<&str> {
        (**self).trace()
    }

    #[inline]
    fn causes(&self) -> Causes<'_> {
        (**self).causes()
    }
}

impl<T: Diagnostic + ?Sized> Diagnostic for crate::types::alloc_type::Box<T> {
    #[inline]
    fn kind(&self) -> Cow<'_, str> {
        (**self).kind()
    }

    #[inline]
    fn message(&self) -> Cow<'_, str> {
        (**self).message()
    }

    #[inline]
    fn trace(&self) -> Option<&str> {
        (**self).trace()
    }

    #[inline]
    fn causes(&self) -> Causes<'_> {
        (**self).causes()
    }
}
