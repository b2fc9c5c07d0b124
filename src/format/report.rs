use core::fmt::{self, Display};

use crate::format::{render, FormatConfig};
use crate::traits::Diagnostic;
use crate::types::alloc_type::String;

/// Builder for customizing a detailed report, rendered through [`Display`].
///
/// # Examples
///
/// ```
/// use cause_tree::format::Report;
/// use cause_tree::ErrorNode;
///
/// let err = ErrorNode::new("Db", "login for user=admin failed")
///     .with_cause(ErrorNode::new("Net", "reset by peer").with_trace("at recv()"));
///
/// let text = Report::new(&err).indent("\t").redact("admin").mask('#').to_string();
/// assert_eq!(
///     text,
///     "[Db] login for user=##### failed\n\n\tCAUSED BY: [ROOT] [Net] reset by peer\n\tat recv()"
/// );
/// ```
#[must_use]
pub struct Report<'a> {
    error: &'a dyn Diagnostic,
    config: FormatConfig,
}

impl<'a> Report<'a> {
    /// Starts from [`FormatConfig::detailed`].
    #[inline]
    pub fn new(error: &'a dyn Diagnostic) -> Self {
        Self { error, config: FormatConfig::detailed() }
    }

    pub fn stack_traces(mut self, enabled: bool) -> Self {
        self.config.include_stack_trace = enabled;
        self
    }

    pub fn redact(mut self, secret: impl Into<String>) -> Self {
        self.config.redact = Some(secret.into());
        self
    }

    pub fn indent(mut self, unit: impl Into<String>) -> Self {
        self.config.indent = unit.into();
        self
    }

    pub fn mask(mut self, mask: char) -> Self {
        self.config.mask = mask;
        self
    }

    /// Replaces every option at once.
    pub fn config(mut self, config: FormatConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn as_config(&self) -> &FormatConfig {
        &self.config
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.error, &self.config))
    }
}

impl fmt::Debug for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Report")
            .field("error", &self.error.kind())
            .field("config", &self.config)
            .finish()
    }
}
