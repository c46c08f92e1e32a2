//! Evaluation error types
//!
//! Error codes:
//! - LINEAGE_TYPE_MISMATCH
//! - LINEAGE_ARITY_MISMATCH
//! - LINEAGE_UNBOUND_REFERENCE
//! - LINEAGE_INVALID_REFERENCE
//! - LINEAGE_INVALID_SELECTOR
//! - LINEAGE_EMPTY_DOMAIN
//! - LINEAGE_DEPTH_EXCEEDED
//! - LINEAGE_QUERY_BEFORE_EVALUATION
//! - LINEAGE_CONDITIONS_FAILED
//! - LINEAGE_INVALID_CONFIG
//!
//! Every error aborts the evaluation of the condition it occurred in. None of
//! them is ever recorded as a `false` verdict.

use std::fmt;

use thiserror::Error;

use crate::document::SelectorError;

/// Result type for evaluation operations
pub type LineageResult<T> = Result<T, LineageError>;

/// A condition that could not be evaluated, with its cause
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionFailure {
    /// Name of the failing condition
    pub condition: String,
    /// What went wrong
    pub error: LineageError,
}

impl fmt::Display for ConditionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\": {}", self.condition, self.error)
    }
}

/// Evaluation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineageError {
    #[error("{operator} expected {expected}, found {found}")]
    TypeMismatch {
        operator: String,
        expected: String,
        found: String,
    },

    #[error("{operator} takes {expected} operand(s), got {found}")]
    ArityMismatch {
        operator: String,
        expected: usize,
        found: usize,
    },

    #[error("Unbound reference: {0}")]
    UnboundReference(String),

    #[error("Invalid reference token: {0}")]
    InvalidReference(String),

    #[error("Invalid selector \"{selector}\": {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Quantifier domain for {variable} is empty")]
    EmptyDomain { variable: String },

    #[error("Expression nesting exceeds depth limit of {limit}")]
    DepthExceeded { limit: usize },

    #[error("Result queried before any evaluation")]
    QueryBeforeEvaluation,

    #[error("{} condition(s) failed: {}", .failures.len(), join_failures(.failures))]
    ConditionsFailed { failures: Vec<ConditionFailure> },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

fn join_failures(failures: &[ConditionFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl LineageError {
    /// Build a type mismatch for an operand of the given operator
    pub fn type_mismatch(
        operator: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        LineageError::TypeMismatch {
            operator: operator.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            LineageError::TypeMismatch { .. } => "LINEAGE_TYPE_MISMATCH",
            LineageError::ArityMismatch { .. } => "LINEAGE_ARITY_MISMATCH",
            LineageError::UnboundReference(_) => "LINEAGE_UNBOUND_REFERENCE",
            LineageError::InvalidReference(_) => "LINEAGE_INVALID_REFERENCE",
            LineageError::InvalidSelector { .. } => "LINEAGE_INVALID_SELECTOR",
            LineageError::EmptyDomain { .. } => "LINEAGE_EMPTY_DOMAIN",
            LineageError::DepthExceeded { .. } => "LINEAGE_DEPTH_EXCEEDED",
            LineageError::QueryBeforeEvaluation => "LINEAGE_QUERY_BEFORE_EVALUATION",
            LineageError::ConditionsFailed { .. } => "LINEAGE_CONDITIONS_FAILED",
            LineageError::InvalidConfig(_) => "LINEAGE_INVALID_CONFIG",
        }
    }

    /// Returns true if the error was raised by the document collaborator
    pub fn is_document_error(&self) -> bool {
        matches!(self, LineageError::InvalidSelector { .. })
    }
}

impl From<SelectorError> for LineageError {
    fn from(err: SelectorError) -> Self {
        LineageError::InvalidSelector {
            selector: err.selector().to_string(),
            reason: err.reason().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            LineageError::type_mismatch("GreaterThan", "number", "text").code(),
            "LINEAGE_TYPE_MISMATCH"
        );
        assert_eq!(
            LineageError::UnboundReference("$x".into()).code(),
            "LINEAGE_UNBOUND_REFERENCE"
        );
        assert_eq!(
            LineageError::QueryBeforeEvaluation.code(),
            "LINEAGE_QUERY_BEFORE_EVALUATION"
        );
    }

    #[test]
    fn test_selector_error_conversion() {
        let err: LineageError = SelectorError::new("#", "empty id").into();
        assert!(err.is_document_error());
        assert_eq!(err.code(), "LINEAGE_INVALID_SELECTOR");
        assert!(err.to_string().contains("\"#\""));
    }

    #[test]
    fn test_conditions_failed_display() {
        let err = LineageError::ConditionsFailed {
            failures: vec![
                ConditionFailure {
                    condition: "first".into(),
                    error: LineageError::UnboundReference("$y".into()),
                },
                ConditionFailure {
                    condition: "second".into(),
                    error: LineageError::DepthExceeded { limit: 4 },
                },
            ],
        };
        let display = err.to_string();
        assert!(display.starts_with("2 condition(s) failed"));
        assert!(display.contains("\"first\": Unbound reference: $y"));
        assert!(display.contains("depth limit of 4"));
    }
}
