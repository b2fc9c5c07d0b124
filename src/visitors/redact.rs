//! Literal-substring masking for rendered text.

use crate::types::alloc_type::{Cow, String, ToOwned};

/// Character used to mask secrets unless configured otherwise.
pub const DEFAULT_MASK: char = 'x';

/// Replaces every literal occurrence of a secret with a same-length run of a
/// mask character.
///
/// Matching is exact and case-sensitive. A blank candidate disables masking.
///
/// # Examples
///
/// ```
/// use cause_tree::visitors::Redactor;
///
/// let redactor = Redactor::new("hunter2");
/// assert_eq!(redactor.redact("password=hunter2;"), "password=xxxxxxx;");
///
/// assert!(!Redactor::new("  ").is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Redactor {
    candidate: Option<(String, String)>,
}

impl Redactor {
    /// Masks `candidate` with [`DEFAULT_MASK`].
    #[inline]
    pub fn new(candidate: &str) -> Self {
        Self::with_mask(candidate, DEFAULT_MASK)
    }

    /// Masks `candidate` with `mask`, one mask character per candidate character.
    pub fn with_mask(candidate: &str, mask: char) -> Self {
        if candidate.trim().is_empty() {
            return Self::disabled();
        }
        let replacement: String = candidate.chars().map(|_| mask).collect();
        Self { candidate: Some((candidate.to_owned(), replacement)) }
    }

    /// A redactor that passes everything through.
    #[inline]
    pub const fn disabled() -> Self {
        Self { candidate: None }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.candidate.is_some()
    }

    /// Returns `text` with every occurrence of the candidate masked.
    ///
    /// Borrows `text` unchanged when there is nothing to mask.
    pub fn redact<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.candidate {
            Some((candidate, replacement)) if text.contains(candidate.as_str()) => {
                Cow::Owned(text.replace(candidate.as_str(), replacement))
            },
            _ => Cow::Borrowed(text),
        }
    }
}
