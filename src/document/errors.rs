//! Document collaborator errors

use thiserror::Error;

/// A selector string the document could not interpret
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid selector \"{selector}\": {reason}")]
pub struct SelectorError {
    selector: String,
    reason: String,
}

impl SelectorError {
    /// Create a selector error
    pub fn new(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            reason: reason.into(),
        }
    }

    /// Returns the offending selector
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Returns why the selector was rejected
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
