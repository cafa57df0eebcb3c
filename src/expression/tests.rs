use std::sync::Arc;

use crate::expression::ast::{Expression, Op};
use crate::expression::errors::ExpressionError;

fn lit(n: u64) -> Arc<Expression> {
    Arc::new(Expression::Literal(n))
}

fn app(op: Op, l: Arc<Expression>, r: Arc<Expression>) -> Arc<Expression> {
    Arc::new(Expression::App(op, l, r))
}

#[test]
fn test_evaluate_literal() {
    let result = lit(7).evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert_eq!(value, 7);
    }
}

#[test]
fn test_evaluate_literal_zero_is_rejected() {
    let result = lit(0).evaluate();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e, ExpressionError::NonPositive);
    }
}

#[test]
fn test_evaluate_addition() {
    let expr = app(Op::Add, lit(1), lit(50));
    assert_eq!(expr.evaluate(), Ok(51));
}

#[test]
fn test_evaluate_subtraction() {
    let expr = app(Op::Sub, lit(25), lit(10));
    assert_eq!(expr.evaluate(), Ok(15));
}

#[test]
fn test_evaluate_subtraction_non_positive() {
    let expr = app(Op::Sub, lit(10), lit(25));
    assert_eq!(expr.evaluate(), Err(ExpressionError::NonPositive));

    let expr = app(Op::Sub, lit(10), lit(10));
    assert_eq!(expr.evaluate(), Err(ExpressionError::NonPositive));
}

#[test]
fn test_evaluate_nested() {
    // (1 + 50) * (25 - 10) = 765
    let expr = app(
        Op::Mul,
        app(Op::Add, lit(1), lit(50)),
        app(Op::Sub, lit(25), lit(10)),
    );
    assert_eq!(expr.evaluate(), Ok(765));
}

#[test]
fn test_evaluate_division_exact() {
    let expr = app(Op::Div, lit(100), lit(25));
    assert_eq!(expr.evaluate(), Ok(4));
}

#[test]
fn test_evaluate_division_with_remainder() {
    let expr = app(Op::Div, lit(7), lit(2));
    assert_eq!(expr.evaluate(), Err(ExpressionError::InexactDivision));
}

#[test]
fn test_evaluate_overflow() {
    let expr = app(Op::Mul, lit(u64::MAX / 2), lit(3));
    assert_eq!(expr.evaluate(), Err(ExpressionError::Overflow));
}

#[test]
fn test_is_valid_add_canonical_order() {
    assert!(Op::Add.is_valid(1, 50));
    assert!(Op::Add.is_valid(3, 3));
    assert!(!Op::Add.is_valid(50, 1));
}

#[test]
fn test_is_valid_sub_requires_positive_result() {
    assert!(Op::Sub.is_valid(25, 10));
    assert!(!Op::Sub.is_valid(10, 25));
    assert!(!Op::Sub.is_valid(10, 10));
}

#[test]
fn test_is_valid_mul_excludes_identity() {
    assert!(Op::Mul.is_valid(3, 7));
    assert!(!Op::Mul.is_valid(1, 7));
    assert!(!Op::Mul.is_valid(7, 1));
    assert!(!Op::Mul.is_valid(7, 3));
}

#[test]
fn test_is_valid_div_requires_exact_division() {
    assert!(Op::Div.is_valid(100, 25));
    assert!(!Op::Div.is_valid(100, 3));
    assert!(!Op::Div.is_valid(100, 1));
    assert!(!Op::Div.is_valid(100, 0));
}

#[test]
fn test_valid_applications_are_positive() {
    for op in Op::ALL {
        for x in 1..=20 {
            for y in 1..=20 {
                if op.is_valid(x, y) {
                    assert!(op.apply(x, y) > 0, "{} {} {} was not positive", x, op, y);
                }
            }
        }
    }
}

#[test]
fn test_display_minimal_parentheses() {
    let expr = app(
        Op::Mul,
        app(Op::Add, lit(1), lit(50)),
        app(Op::Sub, lit(25), lit(10)),
    );
    assert_eq!(format!("{}", expr), "(1 + 50) * (25 - 10)");
}

#[test]
fn test_display_associative_chain_drops_parentheses() {
    let expr = app(Op::Add, app(Op::Add, lit(1), lit(2)), lit(3));
    assert_eq!(format!("{}", expr), "1 + 2 + 3");
}

#[test]
fn test_display_right_nested_subtraction_keeps_parentheses() {
    let expr = app(Op::Sub, lit(10), app(Op::Sub, lit(5), lit(2)));
    assert_eq!(format!("{}", expr), "10 - (5 - 2)");
}

#[test]
fn test_display_division_of_product() {
    let expr = app(Op::Div, app(Op::Mul, lit(6), lit(8)), lit(4));
    assert_eq!(format!("{}", expr), "6 * 8 / 4");

    let expr = app(Op::Div, lit(48), app(Op::Mul, lit(4), lit(2)));
    assert_eq!(format!("{}", expr), "48 / (4 * 2)");
}

#[test]
fn test_latex_division_uses_frac() {
    let expr = app(Op::Div, lit(100), app(Op::Add, lit(2), lit(3)));
    assert_eq!(expr.to_latex(), "\\frac{100}{2 + 3}");
}

#[test]
fn test_latex_multiplication_uses_cdot() {
    let expr = app(
        Op::Mul,
        app(Op::Add, lit(1), lit(50)),
        app(Op::Sub, lit(25), lit(10)),
    );
    assert_eq!(
        expr.to_latex(),
        "\\left(1 + 50\\right) \\cdot \\left(25 - 10\\right)"
    );
}
