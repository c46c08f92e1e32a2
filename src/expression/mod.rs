//! Expression trees and their evaluation
//!
//! An expression is a literal, a reference, an operator applied to operand
//! expressions, or a quantifier. Trees are immutable; evaluating one never
//! changes it, so a tree can be shared between drivers.
//!
//! # Evaluation order
//!
//! 1. Operands are resolved strictly left to right
//! 2. The operator is applied to the resolved values
//! 3. Quantifier candidates are visited in domain order, stopping at the
//!    first deciding one

mod context;
mod evaluation;
mod function;
mod quantifier;
mod reference;

pub use context::{Binding, Context};
pub use evaluation::{DerivedValue, Evaluation};
pub use function::ComposedFunction;
pub use quantifier::{Quantifier, QuantifierKind};
pub use reference::Reference;

use std::fmt;

use serde::Serialize;

use crate::config::EvaluationConfig;
use crate::designator::DesignatedObject;
use crate::errors::{LineageError, LineageResult};
use crate::operator::Operator;
use crate::value::Value;

/// A node of an expression tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    Constant(Value),
    Reference(Reference),
    Function(ComposedFunction),
    Quantifier(Quantifier),
}

impl Expression {
    pub fn constant(value: impl Into<Value>) -> Self {
        Expression::Constant(value.into())
    }

    /// Reference to root input `index`
    pub fn input(index: usize) -> Self {
        Expression::Reference(Reference::input(index))
    }

    /// Reference to a quantified variable
    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Reference(Reference::named(name))
    }

    /// Number of leaf terms (literals and references), counted with
    /// repetitions; quantifiers count their body's leaves
    pub fn leaf_count(&self) -> usize {
        match self {
            Expression::Constant(_) | Expression::Reference(_) => 1,
            Expression::Function(function) => function.operands().iter().map(Expression::leaf_count).sum(),
            Expression::Quantifier(quantifier) => quantifier.body().leaf_count(),
        }
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Expression::Constant(value)
    }
}

impl From<f64> for Expression {
    fn from(n: f64) -> Self {
        Expression::Constant(Value::Number(n))
    }
}

impl From<i32> for Expression {
    fn from(n: i32) -> Self {
        Expression::Constant(Value::from(n))
    }
}

impl From<bool> for Expression {
    fn from(b: bool) -> Self {
        Expression::Constant(Value::Boolean(b))
    }
}

impl From<Reference> for Expression {
    fn from(reference: Reference) -> Self {
        Expression::Reference(reference)
    }
}

impl From<ComposedFunction> for Expression {
    fn from(function: ComposedFunction) -> Self {
        Expression::Function(function)
    }
}

impl From<Quantifier> for Expression {
    fn from(quantifier: Quantifier) -> Self {
        Expression::Quantifier(quantifier)
    }
}

/// A bare operator applies to the root inputs `@0..@arity-1`
impl From<Operator> for Expression {
    fn from(operator: Operator) -> Self {
        let operands = (0..operator.arity()).map(Expression::input).collect::<Vec<_>>();
        Expression::Function(ComposedFunction::new(operator, operands))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(value) => write!(f, "{}", value),
            Expression::Reference(reference) => write!(f, "{}", reference),
            Expression::Function(function) => {
                write!(f, "{}", function.operator().name())?;
                match function.operator() {
                    Operator::ComputedStyle(param) | Operator::FindBySelector(param) => {
                        write!(f, "[\"{}\"]", param)?
                    }
                    _ => {}
                }
                write!(f, "(")?;
                for (i, operand) in function.operands().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", operand)?;
                }
                write!(f, ")")
            }
            Expression::Quantifier(quantifier) => {
                let symbol = match quantifier.kind() {
                    QuantifierKind::Universal => "forall",
                    QuantifierKind::Existential => "exists",
                };
                write!(
                    f,
                    "{} {} in {}: {}",
                    symbol,
                    quantifier.variable(),
                    quantifier.domain(),
                    quantifier.body()
                )
            }
        }
    }
}

/// Walks expression trees under a configuration
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    config: &'a EvaluationConfig,
}

impl<'a> Evaluator<'a> {
    pub fn new(config: &'a EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a EvaluationConfig {
        self.config
    }

    /// Evaluates `expression` against `context`
    pub fn evaluate(&self, expression: &Expression, context: &Context) -> LineageResult<Evaluation> {
        self.evaluate_at(expression, context, 0)
    }

    pub(crate) fn evaluate_at(
        &self,
        expression: &Expression,
        context: &Context,
        depth: usize,
    ) -> LineageResult<Evaluation> {
        if depth >= self.config.max_depth {
            return Err(LineageError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }
        match expression {
            Expression::Constant(value) => Ok(Evaluation::leaf(
                value.clone(),
                DesignatedObject::leaf(value.clone()),
            )),
            Expression::Reference(reference) => {
                let binding = context.resolve(reference)?;
                Ok(Evaluation::leaf(binding.value().clone(), binding.leaf().clone()))
            }
            Expression::Function(function) => function.evaluate(self, context, depth),
            Expression::Quantifier(quantifier) => quantifier.evaluate(self, context, depth),
        }
    }
}
