//! Composed functions: an operator applied to operand expressions

use serde::Serialize;

use super::context::Context;
use super::evaluation::Evaluation;
use super::{Evaluator, Expression};
use crate::designator::CompoundDesignator;
use crate::errors::LineageResult;
use crate::operator::Operator;

/// An operator node of an expression tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedFunction {
    operator: Operator,
    operands: Vec<Expression>,
}

impl ComposedFunction {
    pub fn new(operator: Operator, operands: impl IntoIterator<Item = Expression>) -> Self {
        Self {
            operator,
            operands: operands.into_iter().collect(),
        }
    }

    pub fn unary(operator: Operator, operand: impl Into<Expression>) -> Self {
        Self::new(operator, [operand.into()])
    }

    pub fn binary(operator: Operator, left: impl Into<Expression>, right: impl Into<Expression>) -> Self {
        Self::new(operator, [left.into(), right.into()])
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    pub fn operands(&self) -> &[Expression] {
        &self.operands
    }

    /// Resolves operands left to right, then applies the operator.
    ///
    /// The result path composes each argument's path with the operator's
    /// step for that position. The witness is the concatenation of the
    /// operands' witnesses; the operator adds no leaf of its own.
    pub(super) fn evaluate(
        &self,
        evaluator: &Evaluator<'_>,
        context: &Context,
        depth: usize,
    ) -> LineageResult<Evaluation> {
        let name = self.operator.name();
        let mut values = Vec::with_capacity(self.operands.len());
        let mut designator = CompoundDesignator::trivial();
        let mut witness = Vec::new();

        for (index, operand) in self.operands.iter().enumerate() {
            let evaluation = evaluator.evaluate_at(operand, context, depth + 1)?;
            let (value, path, leaves) = evaluation.into_scalar(name)?;
            designator = designator.compose(&path.then(self.operator.describe(index)));
            witness.extend(leaves);
            values.push(value);
        }

        let output = self.operator.apply(&values)?;
        Ok(Evaluation::new(output, designator, witness))
    }
}
