//! Operators
//!
//! A closed set of primitive computations. Every operator has:
//! - a fixed arity
//! - `apply`: raw operand values to a raw result
//! - `describe`: the designator step for each argument position
//!
//! New operators are added as new variants.

mod element;
mod scalar;

use serde::Serialize;

use crate::designator::Designator;
use crate::errors::{LineageError, LineageResult};
use crate::value::Value;

/// One element of a sequence produced by a domain operator
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// The member itself
    pub value: Value,
    /// How the member was selected from the operand
    pub step: Designator,
}

/// What an operator produces
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// A single value
    Scalar(Value),
    /// A finite, ordered sequence, usable as a quantifier domain
    Members(Vec<Member>),
}

impl Output {
    pub fn scalar(value: impl Into<Value>) -> Self {
        Output::Scalar(value.into())
    }
}

/// Primitive operators
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    /// `a > b`, numeric
    GreaterThan,
    /// `a >= b`, numeric
    GreaterOrEqual,
    /// `a < b`, numeric
    LessThan,
    /// `a <= b`, numeric
    LessOrEqual,
    /// `a == b`
    IsEqualTo,
    /// `a && b`
    And,
    /// `a || b`
    Or,
    /// `!a || b`
    Implies,
    /// `!a`
    Not,
    /// `a + b`
    Addition,
    /// `a - b`
    Subtraction,
    /// Computed opacity of an element
    Opacity,
    /// Computed value of a style property of an element
    ComputedStyle(String),
    /// Descendants of an element matching a selector
    FindBySelector(String),
}

impl Operator {
    pub fn computed_style(property: impl Into<String>) -> Self {
        Operator::ComputedStyle(property.into().to_ascii_lowercase())
    }

    pub fn find_by_selector(selector: impl Into<String>) -> Self {
        Operator::FindBySelector(selector.into())
    }

    /// Returns the operator name used in designators and errors
    pub fn name(&self) -> &'static str {
        match self {
            Operator::GreaterThan => "GreaterThan",
            Operator::GreaterOrEqual => "GreaterOrEqual",
            Operator::LessThan => "LessThan",
            Operator::LessOrEqual => "LessOrEqual",
            Operator::IsEqualTo => "IsEqualTo",
            Operator::And => "And",
            Operator::Or => "Or",
            Operator::Implies => "Implies",
            Operator::Not => "Not",
            Operator::Addition => "Addition",
            Operator::Subtraction => "Subtraction",
            Operator::Opacity => "Opacity",
            Operator::ComputedStyle(_) => "ComputedStyle",
            Operator::FindBySelector(_) => "FindBySelector",
        }
    }

    /// Returns the number of operands the operator takes
    pub fn arity(&self) -> usize {
        match self {
            Operator::Not
            | Operator::Opacity
            | Operator::ComputedStyle(_)
            | Operator::FindBySelector(_) => 1,
            _ => 2,
        }
    }

    /// Returns true if the operator produces a sequence
    pub fn produces_members(&self) -> bool {
        matches!(self, Operator::FindBySelector(_))
    }

    /// Applies the operator to raw operand values
    pub fn apply(&self, args: &[Value]) -> LineageResult<Output> {
        if args.len() != self.arity() {
            return Err(LineageError::ArityMismatch {
                operator: self.name().to_string(),
                expected: self.arity(),
                found: args.len(),
            });
        }
        let name = self.name();
        match self {
            Operator::GreaterThan => scalar::compare(name, &args[0], &args[1], |a, b| a > b),
            Operator::GreaterOrEqual => scalar::compare(name, &args[0], &args[1], |a, b| a >= b),
            Operator::LessThan => scalar::compare(name, &args[0], &args[1], |a, b| a < b),
            Operator::LessOrEqual => scalar::compare(name, &args[0], &args[1], |a, b| a <= b),
            Operator::IsEqualTo => Ok(scalar::equals(&args[0], &args[1])),
            Operator::And => scalar::logic(name, &args[0], &args[1], |a, b| a && b),
            Operator::Or => scalar::logic(name, &args[0], &args[1], |a, b| a || b),
            Operator::Implies => scalar::logic(name, &args[0], &args[1], |a, b| !a || b),
            Operator::Not => scalar::negate(name, &args[0]),
            Operator::Addition => scalar::arithmetic(name, &args[0], &args[1], |a, b| a + b),
            Operator::Subtraction => scalar::arithmetic(name, &args[0], &args[1], |a, b| a - b),
            Operator::Opacity => element::opacity(name, &args[0]),
            Operator::ComputedStyle(property) => element::computed_style(name, property, &args[0]),
            Operator::FindBySelector(selector) => element::find_by_selector(name, selector, &args[0]),
        }
    }

    /// Returns the designator step contributed by argument `index`
    pub fn describe(&self, index: usize) -> Designator {
        match self {
            Operator::Opacity => Designator::style_property("opacity"),
            Operator::ComputedStyle(property) => Designator::style_property(property.clone()),
            // Each member carries its own selector step
            Operator::FindBySelector(_) => Designator::Identity,
            _ => Designator::operand(self.name(), index),
        }
    }
}
