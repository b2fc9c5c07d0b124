//! Error values and supporting types.
//!
//! # Examples
//!
//! ```
//! use cause_tree::ErrorNode;
//!
//! let err = ErrorNode::aggregate(
//!     "BatchError",
//!     "2 of 3 jobs failed",
//!     [
//!         ErrorNode::new("Timeout", "job 1 timed out"),
//!         ErrorNode::new("Refused", "job 3 was refused"),
//!     ],
//! );
//!
//! assert_eq!(cause_tree::format_root_causes(&err), "job 1 timed out job 3 was refused");
//! ```
use smallvec::SmallVec;

use crate::traits::Diagnostic;

pub mod alloc_type;
pub mod error_node;
pub mod shape_error;

pub use error_node::*;
pub use shape_error::*;

/// SmallVec-backed list of borrowed sibling causes.
///
/// Aggregates rarely carry more than a handful of members, so up to four
/// are kept inline.
pub type CauseVec<'a> = SmallVec<[&'a dyn Diagnostic; 4]>;
