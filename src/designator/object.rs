//! Values paired with their provenance

use std::fmt;

use serde::Serialize;

use super::compound::CompoundDesignator;
use crate::value::Value;

/// An original leaf value and the path by which it was reached
///
/// `object` is always a value supplied to the evaluation (a literal or an
/// input), never an intermediate result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DesignatedObject {
    object: Value,
    designator: CompoundDesignator,
}

impl DesignatedObject {
    pub fn new(object: impl Into<Value>, designator: CompoundDesignator) -> Self {
        Self {
            object: object.into(),
            designator,
        }
    }

    /// A value designated by the trivial path
    pub fn leaf(object: impl Into<Value>) -> Self {
        Self::new(object, CompoundDesignator::trivial())
    }

    pub fn object(&self) -> &Value {
        &self.object
    }

    pub fn designator(&self) -> &CompoundDesignator {
        &self.designator
    }

    pub fn into_parts(self) -> (Value, CompoundDesignator) {
        (self.object, self.designator)
    }
}

impl fmt::Display for DesignatedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.designator.is_trivial() {
            write!(f, "{}", self.object)
        } else {
            write!(f, "{} [{}]", self.object, self.designator)
        }
    }
}
