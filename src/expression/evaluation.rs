//! Evaluation outcomes
//!
//! Every evaluation yields two separate things:
//! - the result with its derivation path, consumed by enclosing operators
//! - the witness: the leaves that justify the result, passed up unchanged

use crate::designator::{CompoundDesignator, DesignatedObject};
use crate::errors::{LineageError, LineageResult};
use crate::operator::{Member, Output};
use crate::value::Value;

/// A computed value and the path by which it was derived
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedValue {
    pub value: Value,
    pub designator: CompoundDesignator,
}

/// Outcome of evaluating one expression node
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    output: Output,
    designator: CompoundDesignator,
    witness: Vec<DesignatedObject>,
}

impl Evaluation {
    pub fn new(output: Output, designator: CompoundDesignator, witness: Vec<DesignatedObject>) -> Self {
        Self {
            output,
            designator,
            witness,
        }
    }

    /// A leaf term: the leaf is both the result and the whole witness
    pub fn leaf(value: Value, leaf: DesignatedObject) -> Self {
        Self {
            output: Output::Scalar(value),
            designator: leaf.designator().clone(),
            witness: vec![leaf],
        }
    }

    /// A boolean decided by a quantifier
    pub fn decided(result: bool, witness: Vec<DesignatedObject>) -> Self {
        Self {
            output: Output::Scalar(Value::Boolean(result)),
            designator: CompoundDesignator::trivial(),
            witness,
        }
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Path by which the result was derived
    pub fn designator(&self) -> &CompoundDesignator {
        &self.designator
    }

    pub fn witness(&self) -> &[DesignatedObject] {
        &self.witness
    }

    /// The scalar result with its path, if the result is scalar
    pub fn derived(&self) -> Option<DerivedValue> {
        match &self.output {
            Output::Scalar(value) => Some(DerivedValue {
                value: value.clone(),
                designator: self.designator.clone(),
            }),
            Output::Members(_) => None,
        }
    }

    /// Splits into scalar value, path and witness; `consumer` names the
    /// operator that needed a scalar
    pub(crate) fn into_scalar(
        self,
        consumer: &str,
    ) -> LineageResult<(Value, CompoundDesignator, Vec<DesignatedObject>)> {
        match self.output {
            Output::Scalar(value) => Ok((value, self.designator, self.witness)),
            Output::Members(_) => Err(LineageError::type_mismatch(consumer, "a single value", "a sequence")),
        }
    }

    /// Splits into members, path and witness
    pub(crate) fn into_members(
        self,
        consumer: &str,
    ) -> LineageResult<(Vec<Member>, CompoundDesignator, Vec<DesignatedObject>)> {
        match self.output {
            Output::Members(members) => Ok((members, self.designator, self.witness)),
            Output::Scalar(value) => Err(LineageError::type_mismatch(consumer, "a sequence", value.kind())),
        }
    }

    /// Splits into boolean result and witness
    pub(crate) fn into_boolean(self, consumer: &str) -> LineageResult<(bool, Vec<DesignatedObject>)> {
        let (value, _, witness) = self.into_scalar(consumer)?;
        match value {
            Value::Boolean(b) => Ok((b, witness)),
            other => Err(LineageError::type_mismatch(consumer, "boolean", other.kind())),
        }
    }
}
