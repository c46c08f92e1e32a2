//! Numeric and boolean operators
//!
//! No coercion: numbers compare only with numbers, booleans combine only
//! with booleans.

use super::Output;
use crate::errors::{LineageError, LineageResult};
use crate::value::Value;

fn number(operator: &str, value: &Value) -> LineageResult<f64> {
    value
        .as_number()
        .ok_or_else(|| LineageError::type_mismatch(operator, "number", value.kind()))
}

fn boolean(operator: &str, value: &Value) -> LineageResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| LineageError::type_mismatch(operator, "boolean", value.kind()))
}

pub(super) fn compare(
    operator: &str,
    left: &Value,
    right: &Value,
    test: impl Fn(f64, f64) -> bool,
) -> LineageResult<Output> {
    let a = number(operator, left)?;
    let b = number(operator, right)?;
    Ok(Output::scalar(test(a, b)))
}

pub(super) fn arithmetic(
    operator: &str,
    left: &Value,
    right: &Value,
    op: impl Fn(f64, f64) -> f64,
) -> LineageResult<Output> {
    let a = number(operator, left)?;
    let b = number(operator, right)?;
    Ok(Output::scalar(op(a, b)))
}

pub(super) fn logic(
    operator: &str,
    left: &Value,
    right: &Value,
    op: impl Fn(bool, bool) -> bool,
) -> LineageResult<Output> {
    let a = boolean(operator, left)?;
    let b = boolean(operator, right)?;
    Ok(Output::scalar(op(a, b)))
}

pub(super) fn negate(operator: &str, value: &Value) -> LineageResult<Output> {
    Ok(Output::scalar(!boolean(operator, value)?))
}

/// Numbers compare numerically, everything else structurally
pub(super) fn equals(left: &Value, right: &Value) -> Output {
    let equal = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a == b,
        _ => left == right,
    };
    Output::scalar(equal)
}

#[cfg(test)]
mod tests {
    use crate::errors::LineageError;
    use crate::operator::{Operator, Output};
    use crate::value::Value;

    fn apply(op: Operator, args: &[Value]) -> Value {
        match op.apply(args).unwrap() {
            Output::Scalar(v) => v,
            Output::Members(_) => panic!("expected a scalar"),
        }
    }

    #[test]
    fn test_greater_than_boundary() {
        assert_eq!(apply(Operator::GreaterThan, &[100.into(), 50.into()]), Value::from(true));
        assert_eq!(apply(Operator::GreaterThan, &[0.into(), 50.into()]), Value::from(false));
        assert_eq!(apply(Operator::GreaterThan, &[1.0.into(), 1.into()]), Value::from(false));
        assert_eq!(apply(Operator::GreaterOrEqual, &[1.0.into(), 1.into()]), Value::from(true));
    }

    #[test]
    fn test_less_than() {
        assert_eq!(apply(Operator::LessThan, &[1.into(), 2.into()]), Value::from(true));
        assert_eq!(apply(Operator::LessOrEqual, &[2.into(), 2.into()]), Value::from(true));
        assert_eq!(apply(Operator::LessThan, &[2.into(), 2.into()]), Value::from(false));
    }

    #[test]
    fn test_no_coercion() {
        let err = Operator::GreaterThan
            .apply(&["100".into(), 50.into()])
            .unwrap_err();
        assert_eq!(
            err,
            LineageError::type_mismatch("GreaterThan", "number", "text")
        );
        assert!(Operator::And.apply(&[1.into(), true.into()]).is_err());
    }

    #[test]
    fn test_logic() {
        assert_eq!(apply(Operator::And, &[true.into(), false.into()]), Value::from(false));
        assert_eq!(apply(Operator::Or, &[true.into(), false.into()]), Value::from(true));
        assert_eq!(apply(Operator::Implies, &[false.into(), false.into()]), Value::from(true));
        assert_eq!(apply(Operator::Implies, &[true.into(), false.into()]), Value::from(false));
        assert_eq!(apply(Operator::Not, &[true.into()]), Value::from(false));
    }

    #[test]
    fn test_arithmetic_and_equality() {
        assert_eq!(apply(Operator::Addition, &[1.into(), 0.5.into()]), Value::from(1.5));
        assert_eq!(apply(Operator::Subtraction, &[1.into(), 3.into()]), Value::from(-2));
        assert_eq!(apply(Operator::IsEqualTo, &[1.into(), 1.0.into()]), Value::from(true));
        assert_eq!(apply(Operator::IsEqualTo, &["a".into(), "a".into()]), Value::from(true));
        assert_eq!(apply(Operator::IsEqualTo, &["1".into(), 1.into()]), Value::from(false));
    }
}
