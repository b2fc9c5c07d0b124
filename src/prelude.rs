//! Convenience re-exports for common usage.
//!
//! ```
//! use cause_tree::prelude::*;
//!
//! let err = ErrorNode::new("Exception", "foo secret bar");
//! assert_eq!(err.to_cleansed_detailed_string("secret"), "[ROOT] [Exception] foo xxxxxx bar");
//! ```

// Types
pub use crate::format::{FormatConfig, Report};
pub use crate::tree::ErrorTree;
pub use crate::types::{ErrorNode, NodeShape};

// Traits
pub use crate::traits::{Causes, Diagnostic, DiagnosticExt, ErrorVisitor};

// Functions
pub use crate::format::{format_detailed, format_detailed_cleansed, format_root_causes, format_simple};
