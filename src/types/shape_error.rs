use core::fmt::{self, Display};

/// Rejected attempt to build an [`ErrorNode`](crate::ErrorNode) with an impossible causal shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// Both a single cause and a non-empty list of sibling causes were given.
    CauseAndCauses { siblings: usize },
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CauseAndCauses { siblings } => write!(
                f,
                "error node cannot have a single cause and {} sibling cause(s) at once",
                siblings
            ),
        }
    }
}

impl core::error::Error for ShapeError {}
