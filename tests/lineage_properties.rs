//! Property tests for lineage invariants:
//! - Designator composition is associative and flattens to concatenation
//! - Evaluation is deterministic
//! - A verdict's witness has one leaf per leaf-term occurrence
//! - GreaterThan is strict numeric comparison

use lineage::expression::{Context, Evaluator};
use lineage::{
    ComposedFunction, CompoundDesignator, Designator, EvaluationConfig, Expression, Operator,
    TestCondition, TestDriver, Value,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_designator() -> impl Strategy<Value = Designator> {
    prop_oneof![
        Just(Designator::Identity),
        ("[#.a-z]{1,6}", 0usize..5).prop_map(|(s, i)| Designator::selector_match(s, i)),
        "[a-z-]{3,10}".prop_map(|p| Designator::style_property(p)),
        (0usize..3).prop_map(|i| Designator::operand("GreaterThan", i)),
        "\\$[a-z]{1,3}".prop_map(|n| Designator::bound(n)),
    ]
}

fn arb_path() -> impl Strategy<Value = CompoundDesignator> {
    prop::collection::vec(arb_designator(), 0..6).prop_map(|steps| CompoundDesignator::from_steps(steps))
}

/// Numeric expression trees over small integer literals and two inputs.
fn arb_numeric() -> impl Strategy<Value = Expression> {
    let leaf = prop_oneof![
        (-1000i32..1000).prop_map(|n| Expression::from(n)),
        (0usize..2).prop_map(Expression::input),
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        (prop_oneof![Just(Operator::Addition), Just(Operator::Subtraction)], inner.clone(), inner)
            .prop_map(|(op, l, r)| Expression::from(ComposedFunction::binary(op, l, r)))
    })
}

/// Boolean expression trees built from comparisons of numeric trees.
fn arb_boolean() -> impl Strategy<Value = Expression> {
    let comparison = (
        prop_oneof![
            Just(Operator::GreaterThan),
            Just(Operator::LessOrEqual),
            Just(Operator::IsEqualTo)
        ],
        arb_numeric(),
        arb_numeric(),
    )
        .prop_map(|(op, l, r)| Expression::from(ComposedFunction::binary(op, l, r)));
    comparison.prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| Expression::from(ComposedFunction::unary(Operator::Not, e))),
            (prop_oneof![Just(Operator::And), Just(Operator::Or)], inner.clone(), inner)
                .prop_map(|(op, l, r)| Expression::from(ComposedFunction::binary(op, l, r))),
        ]
    })
}

fn inputs(a: i32, b: i32) -> Vec<Value> {
    vec![Value::from(a), Value::from(b)]
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn compose_is_associative(p1 in arb_path(), p2 in arb_path(), p3 in arb_path()) {
        let left = p1.compose(&p2).compose(&p3);
        let right = p1.compose(&p2.compose(&p3));
        prop_assert_eq!(&left, &right);

        let flat = CompoundDesignator::from_steps(
            p1.iter().chain(p2.iter()).chain(p3.iter()).cloned(),
        );
        prop_assert_eq!(&left, &flat);
    }

    #[test]
    fn trivial_path_is_neutral(p in arb_path()) {
        let trivial = CompoundDesignator::trivial();
        prop_assert_eq!(&p.compose(&trivial), &p);
        prop_assert_eq!(&trivial.compose(&p), &p);
    }

    #[test]
    fn witness_has_one_leaf_per_term(expr in arb_boolean(), a in -50i32..50, b in -50i32..50) {
        let expected = expr.leaf_count();
        let mut driver = TestDriver::new([TestCondition::new("generated", expr)]);
        driver.evaluate_all(inputs(a, b)).unwrap();
        let verdict = &driver.result().unwrap().verdicts()[0];
        prop_assert_eq!(verdict.witness().len(), expected);
    }

    #[test]
    fn evaluation_is_deterministic(expr in arb_boolean(), a in -50i32..50, b in -50i32..50) {
        let mut driver = TestDriver::new([TestCondition::new("generated", expr)]);
        driver.evaluate_all(inputs(a, b)).unwrap();
        let first = driver.result().unwrap().clone();
        for _ in 0..3 {
            driver.evaluate_all(inputs(a, b)).unwrap();
            prop_assert_eq!(driver.result().unwrap(), &first);
        }
    }

    #[test]
    fn greater_than_is_strict(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
        let config = EvaluationConfig::default();
        let evaluator = Evaluator::new(&config);
        let expr: Expression = Operator::GreaterThan.into();

        let eval = evaluator.evaluate(&expr, &Context::new([Value::from(a), Value::from(b)])).unwrap();
        prop_assert_eq!(eval.derived().unwrap().value, Value::from(a > b));

        let eval = evaluator.evaluate(&expr, &Context::new([Value::from(a), Value::from(a)])).unwrap();
        prop_assert_eq!(eval.derived().unwrap().value, Value::from(false));
    }
}
