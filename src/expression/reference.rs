//! Typed reference tokens
//!
//! `@0` addresses the first root input, `$x` a name bound by a quantifier.
//! Tokens are parsed once, when the expression is built.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::{LineageError, LineageResult};

/// A reference to a value in the evaluation context
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reference {
    /// Root input by position
    Positional(usize),
    /// Quantified variable by name
    Named(String),
}

impl Reference {
    pub fn input(index: usize) -> Self {
        Reference::Positional(index)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Reference::Named(name.into())
    }

    /// Parse `@<index>` or `$<name>`
    pub fn parse(token: &str) -> LineageResult<Self> {
        let invalid = || LineageError::InvalidReference(token.to_string());
        if let Some(index) = token.strip_prefix('@') {
            return index
                .parse::<usize>()
                .map(Reference::Positional)
                .map_err(|_| invalid());
        }
        match token.strip_prefix('$') {
            Some(name) if !name.is_empty() && !name.chars().any(char::is_whitespace) => {
                Ok(Reference::Named(token.to_string()))
            }
            _ => Err(invalid()),
        }
    }
}

impl FromStr for Reference {
    type Err = LineageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Reference::parse(s)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Positional(index) => write!(f, "@{}", index),
            Reference::Named(name) => write!(f, "{}", name),
        }
    }
}
