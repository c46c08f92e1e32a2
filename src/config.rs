//! Evaluation configuration
//!
//! Settles the policies the evaluation semantics leave open:
//! - which witness a quantifier reports when no candidate decides it
//! - what an empty quantifier domain evaluates to
//! - how deeply expressions may nest

use serde::{Deserialize, Serialize};

use crate::errors::{LineageError, LineageResult};

/// Default maximum expression nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Witness reported when every candidate agrees with the default outcome
/// (all pass for a universal, all fail for an existential)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WitnessPolicy {
    /// Witness of the first candidate
    First,
    /// Witness of the last candidate evaluated
    Last,
}

/// Outcome of a quantifier over an empty domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyDomainPolicy {
    /// Universal is true, existential is false, witness is empty
    Vacuous,
    /// Evaluation fails with `EmptyDomain`
    Reject,
}

/// Configuration for expression evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Maximum nesting depth of an expression tree.
    pub max_depth: usize,
    /// Witness selection for undecided quantifiers.
    pub witness_policy: WitnessPolicy,
    /// Behavior on empty quantifier domains.
    pub empty_domain: EmptyDomainPolicy,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            witness_policy: WitnessPolicy::Last,
            empty_domain: EmptyDomainPolicy::Vacuous,
        }
    }
}

impl EvaluationConfig {
    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> LineageResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| LineageError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can evaluate anything at all.
    pub fn validate(&self) -> LineageResult<()> {
        if self.max_depth == 0 {
            return Err(LineageError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_witness_policy(mut self, policy: WitnessPolicy) -> Self {
        self.witness_policy = policy;
        self
    }

    pub fn with_empty_domain(mut self, policy: EmptyDomainPolicy) -> Self {
        self.empty_domain = policy;
        self
    }
}
