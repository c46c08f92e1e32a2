//! Named boolean conditions

use std::sync::Arc;

use super::verdict::Verdict;
use crate::expression::{Context, Evaluator, Expression};
use crate::errors::LineageResult;

/// A named expression that must evaluate to a boolean
#[derive(Debug, Clone)]
pub struct TestCondition {
    name: String,
    expression: Arc<Expression>,
}

impl TestCondition {
    pub fn new(name: impl Into<String>, expression: impl Into<Expression>) -> Self {
        Self {
            name: name.into(),
            expression: Arc::new(expression.into()),
        }
    }

    /// A condition sharing an existing expression tree
    pub fn shared(name: impl Into<String>, expression: Arc<Expression>) -> Self {
        Self {
            name: name.into(),
            expression,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Evaluates the condition into a verdict
    pub fn evaluate(&self, evaluator: &Evaluator<'_>, context: &Context) -> LineageResult<Verdict> {
        let (result, witness) = evaluator
            .evaluate(&self.expression, context)?
            .into_boolean(&self.name)?;
        Ok(Verdict::new(self.name.clone(), result, witness))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvaluationConfig;
    use crate::designator::DesignatedObject;
    use crate::errors::LineageError;
    use crate::expression::ComposedFunction;
    use crate::operator::Operator;
    use crate::value::Value;

    #[test]
    fn test_condition_verdict() {
        let condition = TestCondition::new("gt", Operator::GreaterThan);
        let config = EvaluationConfig::default();
        let context = Context::new([Value::from(100), Value::from(50)]);

        let verdict = condition.evaluate(&Evaluator::new(&config), &context).unwrap();
        assert_eq!(verdict.condition(), "gt");
        assert!(verdict.result());
        assert_eq!(
            verdict.witness(),
            &[DesignatedObject::leaf(100), DesignatedObject::leaf(50)]
        );
    }

    #[test]
    fn test_non_boolean_condition_is_an_error() {
        let condition = TestCondition::new(
            "sum",
            ComposedFunction::binary(Operator::Addition, 1, 2),
        );
        let config = EvaluationConfig::default();
        let err = condition
            .evaluate(&Evaluator::new(&config), &Context::new([]))
            .unwrap_err();
        assert_eq!(err, LineageError::type_mismatch("sum", "boolean", "number"));
    }

    #[test]
    fn test_shared_expression() {
        let expression = Arc::new(Expression::from(Operator::Not));
        let a = TestCondition::shared("a", Arc::clone(&expression));
        let b = TestCondition::shared("b", expression);
        assert_eq!(a.expression(), b.expression());
    }
}
